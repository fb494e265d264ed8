// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod errors; // Shared error types
pub mod validation; // Multi-error accumulation

// Re-exports for convenience
pub use errors::{AppError, AppResult};
pub use validation::Notification;
