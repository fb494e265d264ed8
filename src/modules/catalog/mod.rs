pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{CastMember, CastMemberId, CastMemberKind, Category, CategoryId, Genre, GenreId};
