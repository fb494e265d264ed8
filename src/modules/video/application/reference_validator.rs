use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::shared::{errors::AppResult, validation::Notification};

use super::ports::ReferenceGateway;

/// Confirm that every foreign identifier in `requested` exists in its owning
/// collection, appending at most one error per kind.
///
/// An empty set is trivially valid and the gateway is not called. Missing
/// ids are sorted by string form so the message is deterministic.
pub async fn validate_reference_ids<Id>(
    kind: &str,
    requested: &HashSet<Id>,
    gateway: &dyn ReferenceGateway<Id>,
    notification: &mut Notification,
) -> AppResult<()>
where
    Id: Clone + Eq + Hash + Display + Send + Sync,
{
    if requested.is_empty() {
        return Ok(());
    }

    let requested: Vec<Id> = requested.iter().cloned().collect();
    let existing = gateway.exists_by_ids(&requested).await?;

    let mut missing = requested;
    for id in &existing {
        if let Some(position) = missing.iter().position(|candidate| candidate == id) {
            missing.remove(position);
        }
    }

    if !missing.is_empty() {
        let mut labels: Vec<String> = missing.iter().map(|id| id.to_string()).collect();
        labels.sort();
        notification.append(format!(
            "Some {} could not be found: {}",
            kind,
            labels.join(", ")
        ));
    }
    Ok(())
}
