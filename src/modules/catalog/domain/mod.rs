pub mod cast_member;
pub mod category;
pub mod genre;

pub use cast_member::{CastMember, CastMemberId, CastMemberKind};
pub use category::{Category, CategoryId};
pub use genre::{Genre, GenreId};
