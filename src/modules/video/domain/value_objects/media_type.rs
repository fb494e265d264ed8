use serde::{Deserialize, Serialize};
use std::fmt;

/// The five named attachment points of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Video,
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl MediaType {
    /// All slots in storage sequencing order.
    pub const ALL: [MediaType; 5] = [
        MediaType::Video,
        MediaType::Trailer,
        MediaType::Banner,
        MediaType::Thumbnail,
        MediaType::ThumbnailHalf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Trailer => "trailer",
            MediaType::Banner => "banner",
            MediaType::Thumbnail => "thumbnail",
            MediaType::ThumbnailHalf => "thumbnail_half",
        }
    }

    /// Whether this slot holds audio-video content (as opposed to an image).
    pub fn is_audio_video(&self) -> bool {
        matches!(self, MediaType::Video | MediaType::Trailer)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequencing_order_is_fixed() {
        assert_eq!(
            MediaType::ALL,
            [
                MediaType::Video,
                MediaType::Trailer,
                MediaType::Banner,
                MediaType::Thumbnail,
                MediaType::ThumbnailHalf,
            ]
        );
    }

    #[test]
    fn only_video_and_trailer_are_audio_video() {
        assert!(MediaType::Video.is_audio_video());
        assert!(MediaType::Trailer.is_audio_video());
        assert!(!MediaType::Banner.is_audio_video());
        assert!(!MediaType::Thumbnail.is_audio_video());
        assert!(!MediaType::ThumbnailHalf.is_audio_video());
    }
}
