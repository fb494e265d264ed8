pub mod video_aggregate;

pub use video_aggregate::Video;
