use async_trait::async_trait;

use crate::modules::video::domain::value_objects::{
    AudioVideoMedia, ImageMedia, MediaType, Resource, VideoId,
};
use crate::shared::errors::AppResult;

/// Port for the external blob store holding raw media bytes.
///
/// Implementations key blobs by `(video id, media type)` so that everything
/// belonging to one video shares a derivable namespace and `clear_resources`
/// can sweep it in one pass.
#[async_trait]
pub trait MediaResourceGateway: Send + Sync {
    /// Store raw audio-video bytes, returning the ledger entry correlating
    /// the stored content with its identity. Fresh media is always pending.
    async fn store_audio_video(
        &self,
        video_id: VideoId,
        resource: &Resource,
    ) -> AppResult<AudioVideoMedia>;

    /// Store image bytes, returning the ledger entry.
    async fn store_image(&self, video_id: VideoId, resource: &Resource) -> AppResult<ImageMedia>;

    /// Fetch previously stored bytes for one slot, if any.
    async fn get_resource(
        &self,
        video_id: VideoId,
        media_type: MediaType,
    ) -> AppResult<Option<Resource>>;

    /// Delete every resource associated with the video id. Idempotent: a
    /// video with no stored media is a successful no-op.
    async fn clear_resources(&self, video_id: VideoId) -> AppResult<()>;
}
