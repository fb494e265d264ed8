mod command;
mod handler;

pub use command::UpdateMediaStatusCommand;
pub use handler::UpdateMediaStatusHandler;
