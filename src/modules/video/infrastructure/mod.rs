pub mod persistence;
pub mod storage;

pub use persistence::InMemoryVideoRepository;
pub use storage::InMemoryMediaResourceGateway;
