//! Calculation history: an insert-only, in-memory record of completed
//! calculations, plus the (currently route-less) user table.
//!
//! The store is built once at startup and handed to the request handlers;
//! there is no module-level singleton. One mutex serializes mutations so
//! ids stay monotonic and reads see a consistent snapshot.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{CalculationRecord, NewCalculation, NewUser, User};

/// How many records a history listing returns when no limit is given
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Storage interface for calculations and users
#[async_trait]
pub trait Storage: Send + Sync {
    async fn add_calculation(&self, new: NewCalculation) -> AppResult<CalculationRecord>;
    async fn calculations(&self, limit: usize) -> AppResult<Vec<CalculationRecord>>;
    async fn remove_calculation(&self, id: u64) -> AppResult<CalculationRecord>;
    async fn clear_calculations(&self) -> AppResult<()>;

    async fn create_user(&self, new: NewUser) -> AppResult<User>;
    async fn user(&self, id: u64) -> AppResult<Option<User>>;
    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

struct MemInner {
    calculations: BTreeMap<u64, CalculationRecord>,
    next_calculation_id: u64,
    users: HashMap<u64, User>,
    next_user_id: u64,
}

/// In-memory storage; everything is gone at process exit.
pub struct MemStorage {
    inner: Mutex<MemInner>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemInner {
                calculations: BTreeMap::new(),
                next_calculation_id: 1,
                users: HashMap::new(),
                next_user_id: 1,
            }),
        }
    }

    fn locked(&self) -> AppResult<MutexGuard<'_, MemInner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("history store mutex poisoned".to_string()))
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn add_calculation(&self, new: NewCalculation) -> AppResult<CalculationRecord> {
        let mut inner = self.locked()?;
        let id = inner.next_calculation_id;
        inner.next_calculation_id += 1;

        let record = CalculationRecord {
            id,
            kind: new.kind,
            calculation: new.calculation,
            result: new.result,
            timestamp: Utc::now(),
        };
        inner.calculations.insert(id, record.clone());
        debug!(id, kind = ?record.kind, "stored calculation");
        Ok(record)
    }

    async fn calculations(&self, limit: usize) -> AppResult<Vec<CalculationRecord>> {
        let inner = self.locked()?;
        let mut records: Vec<CalculationRecord> = inner.calculations.values().cloned().collect();
        // Newest first; equal timestamps fall back to insertion order.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        records.truncate(limit);
        Ok(records)
    }

    async fn remove_calculation(&self, id: u64) -> AppResult<CalculationRecord> {
        let mut inner = self.locked()?;
        inner
            .calculations
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("calculation {} not found", id)))
    }

    async fn clear_calculations(&self) -> AppResult<()> {
        let mut inner = self.locked()?;
        // The id counter survives a clear: ids are never reused.
        inner.calculations.clear();
        debug!("cleared calculation history");
        Ok(())
    }

    async fn create_user(&self, new: NewUser) -> AppResult<User> {
        let mut inner = self.locked()?;
        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User {
            id,
            username: new.username,
            password: new.password,
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn user(&self, id: u64) -> AppResult<Option<User>> {
        let inner = self.locked()?;
        Ok(inner.users.get(&id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.locked()?;
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::CalculatorKind;

    fn entry(calculation: &str, result: &str) -> NewCalculation {
        NewCalculation {
            kind: CalculatorKind::Basic,
            calculation: calculation.to_string(),
            result: result.to_string(),
        }
    }

    #[tokio::test]
    async fn add_and_list_newest_first() {
        let storage = MemStorage::new();
        storage.add_calculation(entry("1 + 1", "2")).await.unwrap();
        storage.add_calculation(entry("2 + 2", "4")).await.unwrap();

        let records = storage.calculations(DEFAULT_HISTORY_LIMIT).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].calculation, "2 + 2");
        assert_eq!(records[1].calculation, "1 + 1");
    }

    #[tokio::test]
    async fn listing_respects_the_limit() {
        let storage = MemStorage::new();
        for i in 0..8 {
            storage
                .add_calculation(entry(&format!("{} + 0", i), &i.to_string()))
                .await
                .unwrap();
        }

        let records = storage.calculations(5).await.unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].calculation, "7 + 0");
    }

    #[tokio::test]
    async fn ids_are_strictly_increasing() {
        let storage = MemStorage::new();
        let first = storage.add_calculation(entry("1", "1")).await.unwrap();
        let second = storage.add_calculation(entry("2", "2")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn clear_empties_but_never_reuses_ids() {
        let storage = MemStorage::new();
        let before = storage.add_calculation(entry("1", "1")).await.unwrap();
        storage.clear_calculations().await.unwrap();

        assert!(storage
            .calculations(DEFAULT_HISTORY_LIMIT)
            .await
            .unwrap()
            .is_empty());

        let after = storage.add_calculation(entry("2", "2")).await.unwrap();
        assert!(after.id > before.id);
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let storage = MemStorage::new();
        storage.clear_calculations().await.unwrap();
        storage.clear_calculations().await.unwrap();
        assert!(storage
            .calculations(DEFAULT_HISTORY_LIMIT)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn remove_by_id_and_missing_id() {
        let storage = MemStorage::new();
        let record = storage.add_calculation(entry("1 + 1", "2")).await.unwrap();

        let removed = storage.remove_calculation(record.id).await.unwrap();
        assert_eq!(removed.id, record.id);

        let missing = storage.remove_calculation(record.id).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn users_are_stored_and_found_by_name() {
        let storage = MemStorage::new();
        let user = storage
            .create_user(NewUser {
                username: "ada".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.id, 1);

        let by_id = storage.user(user.id).await.unwrap();
        assert_eq!(by_id.map(|u| u.username), Some("ada".to_string()));

        let by_name = storage.user_by_username("ada").await.unwrap();
        assert_eq!(by_name.map(|u| u.id), Some(user.id));

        assert!(storage.user_by_username("bob").await.unwrap().is_none());
    }
}
