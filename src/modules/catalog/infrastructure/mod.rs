pub mod in_memory_gateways;

pub use in_memory_gateways::{
    InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway,
    InMemoryReferenceGateway,
};
