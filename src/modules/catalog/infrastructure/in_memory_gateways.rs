use async_trait::async_trait;
use dashmap::DashSet;
use std::hash::Hash;

use crate::modules::catalog::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::application::ports::ReferenceGateway;
use crate::shared::errors::AppResult;

/// Concurrent in-memory id collection answering existence checks.
///
/// One instance per aggregate kind; tests and wiring seed the ids that are
/// considered persisted.
#[derive(Debug, Default)]
pub struct InMemoryReferenceGateway<Id: Eq + Hash> {
    ids: DashSet<Id>,
}

impl<Id: Eq + Hash + Clone> InMemoryReferenceGateway<Id> {
    pub fn new() -> Self {
        Self { ids: DashSet::new() }
    }

    pub fn seed(&self, id: Id) {
        self.ids.insert(id);
    }

    pub fn seed_all(&self, ids: impl IntoIterator<Item = Id>) {
        for id in ids {
            self.ids.insert(id);
        }
    }

    pub fn remove(&self, id: &Id) {
        self.ids.remove(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[async_trait]
impl<Id> ReferenceGateway<Id> for InMemoryReferenceGateway<Id>
where
    Id: Eq + Hash + Clone + Send + Sync,
{
    async fn exists_by_ids(&self, ids: &[Id]) -> AppResult<Vec<Id>> {
        Ok(ids
            .iter()
            .filter(|id| self.ids.contains(*id))
            .cloned()
            .collect())
    }
}

pub type InMemoryCategoryGateway = InMemoryReferenceGateway<CategoryId>;
pub type InMemoryGenreGateway = InMemoryReferenceGateway<GenreId>;
pub type InMemoryCastMemberGateway = InMemoryReferenceGateway<CastMemberId>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_only_the_existing_subset() {
        let gateway = InMemoryCategoryGateway::new();
        let known = CategoryId::new();
        let unknown = CategoryId::new();
        gateway.seed(known);

        let existing = gateway.exists_by_ids(&[known, unknown]).await.unwrap();

        assert_eq!(existing, vec![known]);
    }
}
