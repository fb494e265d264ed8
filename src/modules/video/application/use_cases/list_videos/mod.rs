mod handler;

pub use handler::ListVideosHandler;
