//! Pre-order dashboard.
//!
//! The dashboard holds a point-in-time snapshot of every request, newest
//! first, and refreshes it wholesale after each successful mutation.
//! Status overwrites are unconditional: any status may replace any other,
//! so an administrator can always correct a mistake. Deletion passes
//! through an explicit confirmation guard.

use std::sync::Arc;

use tracing::error;

use maktaba_core::{Preorder, PreorderId, PreorderStatus};
use maktaba_datastore::PreorderRepository;

use crate::error::AdminError;

/// Status facet of the dashboard filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Confirmed,
    Unavailable,
}

impl StatusFilter {
    /// Whether a request's status passes this facet.
    #[must_use]
    pub const fn matches(self, status: PreorderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => matches!(status, PreorderStatus::Pending),
            Self::Confirmed => matches!(status, PreorderStatus::Confirmed),
            Self::Unavailable => matches!(status, PreorderStatus::Unavailable),
        }
    }
}

/// Outcome of a guarded delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The operator confirmed and the record was deleted.
    Removed,
    /// The operator declined; nothing was issued to the store.
    Cancelled,
}

/// Filter a request snapshot by free text and status facet.
///
/// The query matches case-insensitively as a substring of the requester
/// name, phone, or item name; an empty query matches everything. Input
/// order is preserved (the snapshot is already newest-first), never
/// re-sorted here.
#[must_use]
pub fn search<'a>(
    records: &'a [Preorder],
    query: &str,
    filter: StatusFilter,
) -> Vec<&'a Preorder> {
    let needle = query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            let text_match = needle.is_empty()
                || record.name.to_lowercase().contains(&needle)
                || record.phone.to_lowercase().contains(&needle)
                || record.item_name.to_lowercase().contains(&needle);
            text_match && filter.matches(record.status)
        })
        .collect()
}

/// The administrator's view over pre-order requests.
pub struct PreorderDashboard<R: PreorderRepository> {
    repo: Arc<R>,
    items: Vec<Preorder>,
}

impl<R: PreorderRepository> PreorderDashboard<R> {
    /// Create a dashboard with an empty snapshot; call
    /// [`Self::refresh`] to load it.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            items: Vec::new(),
        }
    }

    /// The current snapshot, newest first.
    #[must_use]
    pub fn items(&self) -> &[Preorder] {
        &self.items
    }

    /// Re-fetch the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Store`] on failure; the previous snapshot is
    /// kept as-is.
    pub async fn refresh(&mut self) -> Result<(), AdminError> {
        let items = self.repo.list_all().await.map_err(|e| {
            error!(error = %e, "failed to fetch pre-order requests");
            AdminError::Store(e)
        })?;
        self.items = items;
        Ok(())
    }

    /// Overwrite a request's status, then refresh the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] if the request no longer exists,
    /// or [`AdminError::Store`] on store failure. Either way the snapshot
    /// is left unchanged.
    pub async fn set_status(
        &mut self,
        id: PreorderId,
        status: PreorderStatus,
    ) -> Result<(), AdminError> {
        self.repo.set_status(id, status).await.map_err(|e| {
            error!(error = %e, %id, "failed to update pre-order status");
            AdminError::from_store(format!("pre-order {id}"), e)
        })?;
        self.refresh().await
    }

    /// Delete a request after the operator confirms, then refresh.
    ///
    /// The confirmation guard receives the record about to be deleted and
    /// must answer `true`; declining cancels the whole operation before
    /// anything reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] if the request is not in the
    /// current snapshot, or [`AdminError::Store`] on store failure.
    pub async fn remove<F>(&mut self, id: PreorderId, confirm: F) -> Result<RemoveOutcome, AdminError>
    where
        F: FnOnce(&Preorder) -> bool,
    {
        let record = self
            .items
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AdminError::NotFound(format!("pre-order {id}")))?;

        if !confirm(record) {
            return Ok(RemoveOutcome::Cancelled);
        }

        self.repo.delete(id).await.map_err(|e| {
            error!(error = %e, %id, "failed to delete pre-order request");
            AdminError::Store(e)
        })?;
        self.refresh().await?;
        Ok(RemoveOutcome::Removed)
    }

    /// Filter the current snapshot. See [`search`].
    #[must_use]
    pub fn search(&self, query: &str, filter: StatusFilter) -> Vec<&Preorder> {
        search(&self.items, query, filter)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use maktaba_core::PreorderCategory;
    use maktaba_datastore::MemoryStore;

    fn record(name: &str, phone: &str, item: &str, status: PreorderStatus) -> Preorder {
        Preorder {
            id: PreorderId::generate(),
            user_id: None,
            name: name.to_owned(),
            phone: phone.to_owned(),
            item_name: item.to_owned(),
            category: PreorderCategory::BookOriginal,
            quantity: 1,
            details: None,
            status,
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Preorder> {
        vec![
            record("Rami", "0931111111", "Dune", PreorderStatus::Pending),
            record("Lina", "0932222222", "Fourth Wing", PreorderStatus::Confirmed),
            record("Omar", "0933333333", "The Silent Patient", PreorderStatus::Unavailable),
        ]
    }

    #[test]
    fn test_search_empty_query_all_filter_returns_everything_in_order() {
        let records = sample();
        let found = search(&records, "", StatusFilter::All);
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].name, "Rami");
        assert_eq!(found[2].name, "Omar");
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_fields() {
        let records = sample();
        assert_eq!(search(&records, "DUNE", StatusFilter::All).len(), 1);
        assert_eq!(search(&records, "lina", StatusFilter::All).len(), 1);
        assert_eq!(search(&records, "0933", StatusFilter::All).len(), 1);
        assert_eq!(search(&records, "missing", StatusFilter::All).len(), 0);
    }

    #[test]
    fn test_search_status_facets() {
        let records = sample();
        let pending = search(&records, "", StatusFilter::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].status, PreorderStatus::Pending);

        let confirmed = search(&records, "", StatusFilter::Confirmed);
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].name, "Lina");
    }

    #[test]
    fn test_search_combines_text_and_status() {
        let records = sample();
        assert!(search(&records, "Rami", StatusFilter::Confirmed).is_empty());
        assert_eq!(search(&records, "Rami", StatusFilter::Pending).len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_lists_newest_first() {
        let older = {
            let mut r = record("old", "093", "A", PreorderStatus::Pending);
            r.created_at = Utc::now() - Duration::hours(2);
            r
        };
        let newer = record("new", "093", "B", PreorderStatus::Pending);
        let store = MemoryStore::new().with_preorders(vec![older, newer]);

        let mut dashboard = PreorderDashboard::new(Arc::new(store));
        dashboard.refresh().await.unwrap();

        assert_eq!(dashboard.items()[0].name, "new");
        assert_eq!(dashboard.items()[1].name, "old");
    }

    #[tokio::test]
    async fn test_set_status_any_to_any() {
        let store = MemoryStore::new().with_preorders(sample());
        let mut dashboard = PreorderDashboard::new(Arc::new(store));
        dashboard.refresh().await.unwrap();
        let id = dashboard.items()[0].id;

        // Forward and straight back again: no transition is illegal.
        dashboard
            .set_status(id, PreorderStatus::Confirmed)
            .await
            .unwrap();
        dashboard
            .set_status(id, PreorderStatus::Pending)
            .await
            .unwrap();

        let item = dashboard.items().iter().find(|p| p.id == id).unwrap();
        assert_eq!(item.status, PreorderStatus::Pending);
    }

    #[tokio::test]
    async fn test_set_status_unknown_id_leaves_view_unchanged() {
        let store = MemoryStore::new().with_preorders(sample());
        let mut dashboard = PreorderDashboard::new(Arc::new(store));
        dashboard.refresh().await.unwrap();
        let before: Vec<Preorder> = dashboard.items().to_vec();

        let err = dashboard
            .set_status(PreorderId::generate(), PreorderStatus::Confirmed)
            .await
            .unwrap_err();

        assert!(matches!(err, AdminError::NotFound(_)));
        assert_eq!(dashboard.items(), before.as_slice());
    }

    #[tokio::test]
    async fn test_store_failure_keeps_last_known_good_view() {
        let store = MemoryStore::new().with_preorders(sample());
        let mut dashboard = PreorderDashboard::new(Arc::new(store.clone()));
        dashboard.refresh().await.unwrap();
        let id = dashboard.items()[0].id;
        let before: Vec<Preorder> = dashboard.items().to_vec();

        store.set_failing(true);
        let err = dashboard
            .set_status(id, PreorderStatus::Confirmed)
            .await
            .unwrap_err();

        assert!(matches!(err, AdminError::Store(_)));
        assert_eq!(dashboard.items(), before.as_slice());
    }

    #[tokio::test]
    async fn test_remove_requires_confirmation() {
        let store = MemoryStore::new().with_preorders(sample());
        let mut dashboard = PreorderDashboard::new(Arc::new(store.clone()));
        dashboard.refresh().await.unwrap();
        let id = dashboard.items()[0].id;

        let outcome = dashboard.remove(id, |_| false).await.unwrap();
        assert_eq!(outcome, RemoveOutcome::Cancelled);
        assert_eq!(store.preorders().len(), 3);

        let outcome = dashboard.remove(id, |_| true).await.unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert_eq!(store.preorders().len(), 2);
        assert_eq!(dashboard.items().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_prompt_sees_the_record() {
        let store = MemoryStore::new().with_preorders(sample());
        let mut dashboard = PreorderDashboard::new(Arc::new(store));
        dashboard.refresh().await.unwrap();
        let id = dashboard.items()[1].id;

        dashboard
            .remove(id, |record| {
                assert_eq!(record.name, "Lina");
                false
            })
            .await
            .unwrap();
    }
}
