use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Port for existence checks against another aggregate's collection
/// (categories, genres, cast members).
#[async_trait]
pub trait ReferenceGateway<Id>: Send + Sync {
    /// Return the subset of the requested ids that exist.
    async fn exists_by_ids(&self, ids: &[Id]) -> AppResult<Vec<Id>>;
}
