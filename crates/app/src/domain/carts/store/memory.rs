//! In-memory cart store

use async_trait::async_trait;
use jiff::Timestamp;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;

use smartcart::{cart::Cart, ids::OwnerId};

use super::{CartRecord, CartStore, CasOutcome, StoreError, Version};

/// Process-local [`CartStore`] with the same conditional-write semantics as
/// the Postgres store. Backs service tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: Mutex<FxHashMap<OwnerId, CartRecord>>,
}

impl InMemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get(&self, owner: &OwnerId) -> Result<Option<CartRecord>, StoreError> {
        Ok(self.carts.lock().await.get(owner).cloned())
    }

    async fn compare_and_set(
        &self,
        owner: &OwnerId,
        expected: Option<Version>,
        cart: &Cart,
    ) -> Result<CasOutcome, StoreError> {
        let mut carts = self.carts.lock().await;

        let current = carts.get(owner).map(|record| record.version);

        if current != expected {
            return Ok(CasOutcome::Conflict);
        }

        let record = CartRecord {
            cart: cart.clone(),
            version: expected.map_or(Version::FIRST, Version::next),
            updated_at: Timestamp::now(),
        };

        carts.insert(owner.clone(), record.clone());

        Ok(CasOutcome::Committed(record))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn cart(owner: &str) -> Cart {
        Cart::empty(OwnerId::from(owner))
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_owner() -> TestResult {
        let store = InMemoryCartStore::new();

        assert_eq!(store.get(&OwnerId::from("user-1")).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn first_write_commits_at_version_one() -> TestResult {
        let store = InMemoryCartStore::new();
        let owner = OwnerId::from("user-1");

        let outcome = store.compare_and_set(&owner, None, &cart("user-1")).await?;

        let CasOutcome::Committed(record) = outcome else {
            panic!("expected commit, got {outcome:?}");
        };

        assert_eq!(record.version, Version::FIRST);
        assert_eq!(store.get(&owner).await?, Some(record));

        Ok(())
    }

    #[tokio::test]
    async fn create_conflicts_when_a_document_exists() -> TestResult {
        let store = InMemoryCartStore::new();
        let owner = OwnerId::from("user-1");

        store.compare_and_set(&owner, None, &cart("user-1")).await?;

        let outcome = store.compare_and_set(&owner, None, &cart("user-1")).await?;

        assert_eq!(outcome, CasOutcome::Conflict);

        Ok(())
    }

    #[tokio::test]
    async fn stale_version_conflicts_and_persists_nothing() -> TestResult {
        let store = InMemoryCartStore::new();
        let owner = OwnerId::from("user-1");

        store.compare_and_set(&owner, None, &cart("user-1")).await?;
        store
            .compare_and_set(&owner, Some(Version::FIRST), &cart("user-1"))
            .await?;

        // A writer that still believes the document is at version 1.
        let outcome = store
            .compare_and_set(&owner, Some(Version::FIRST), &cart("user-1"))
            .await?;

        assert_eq!(outcome, CasOutcome::Conflict);

        let stored = store.get(&owner).await?.map(|record| record.version);

        assert_eq!(stored, Some(Version::FIRST.next()));

        Ok(())
    }

    #[tokio::test]
    async fn versions_increase_by_one_per_commit() -> TestResult {
        let store = InMemoryCartStore::new();
        let owner = OwnerId::from("user-1");

        let mut version = None;

        for _ in 0..3 {
            let outcome = store.compare_and_set(&owner, version, &cart("user-1")).await?;

            let CasOutcome::Committed(record) = outcome else {
                panic!("expected commit, got {outcome:?}");
            };

            version = Some(record.version);
        }

        assert_eq!(version, Some(Version::from_raw(3)));

        Ok(())
    }
}
