pub mod in_memory_media_gateway;

pub use in_memory_media_gateway::InMemoryMediaResourceGateway;
