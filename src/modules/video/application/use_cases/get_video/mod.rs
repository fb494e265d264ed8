mod handler;
mod query;
mod result;

pub use handler::GetVideoHandler;
pub use query::GetVideoQuery;
pub use result::GetVideoResult;
