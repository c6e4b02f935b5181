//! Storage primitives for the employee directory.
//!
//! Nothing here survives a restart: [`InMemoryEmployees`] is seeded by its
//! constructor and lives as long as its owner.

use std::sync::Arc;

use async_trait::async_trait;
use entity::{Employee, EmployeeId, NewEmployee};
use platform_api::ApiError;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<DbError> for ApiError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::EmployeeNotFound(_) => ApiError::NotFound,
        }
    }
}

/// Backing store for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Copy of every stored record.
    async fn all(&self) -> Vec<Employee>;

    async fn find(&self, id: EmployeeId) -> Option<Employee>;

    /// Store a new record under the next free id and return it.
    async fn insert(&self, draft: NewEmployee) -> Employee;

    /// Replace the record sharing `employee.id` wholesale.
    async fn replace(&self, employee: Employee) -> DbResult<Employee>;

    async fn remove(&self, id: EmployeeId) -> DbResult<()>;

    async fn len(&self) -> usize;
}

#[derive(Debug)]
struct Table {
    rows: Arc<[Employee]>,
    // high-water mark; ids of deleted rows stay burned
    next_id: EmployeeId,
}

/// Employee list held in process memory.
///
/// Every mutation swaps in a new list value, so a [`snapshot`] taken earlier
/// never changes underneath its holder. Mutations run their
/// read-modify-write under the writer lock and therefore never lose updates.
///
/// [`snapshot`]: InMemoryEmployees::snapshot
#[derive(Debug)]
pub struct InMemoryEmployees {
    table: RwLock<Table>,
}

impl Default for InMemoryEmployees {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl InMemoryEmployees {
    pub fn new(seed: Vec<Employee>) -> Self {
        let next_id = seed.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            table: RwLock::new(Table {
                rows: seed.into(),
                next_id,
            }),
        }
    }

    /// The current list value. Cheap; shares storage with the store.
    pub async fn snapshot(&self) -> Arc<[Employee]> {
        self.table.read().await.rows.clone()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployees {
    async fn all(&self) -> Vec<Employee> {
        self.snapshot().await.to_vec()
    }

    async fn find(&self, id: EmployeeId) -> Option<Employee> {
        let rows = self.snapshot().await;
        rows.iter().find(|e| e.id == id).cloned()
    }

    async fn insert(&self, draft: NewEmployee) -> Employee {
        let mut table = self.table.write().await;
        let id = table.next_id;
        let employee = draft.with_id(id);
        let mut rows = table.rows.to_vec();
        rows.push(employee.clone());
        table.rows = rows.into();
        table.next_id = id + 1;
        debug!(id, total = table.rows.len(), "employee inserted");
        employee
    }

    async fn replace(&self, employee: Employee) -> DbResult<Employee> {
        let mut table = self.table.write().await;
        let index = table
            .rows
            .iter()
            .position(|e| e.id == employee.id)
            .ok_or(DbError::EmployeeNotFound(employee.id))?;
        let mut rows = table.rows.to_vec();
        rows[index] = employee.clone();
        table.rows = rows.into();
        debug!(id = employee.id, "employee replaced");
        Ok(employee)
    }

    async fn remove(&self, id: EmployeeId) -> DbResult<()> {
        let mut table = self.table.write().await;
        if !table.rows.iter().any(|e| e.id == id) {
            return Err(DbError::EmployeeNotFound(id));
        }
        let rows: Vec<Employee> = table.rows.iter().filter(|e| e.id != id).cloned().collect();
        table.rows = rows.into();
        debug!(id, total = table.rows.len(), "employee removed");
        Ok(())
    }

    async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.into(),
            email: format!("{}@company.com", name.to_lowercase()),
            job_title: "Software Engineer".into(),
            department: "Engineering".into(),
            phone_number: "+91 9876543210".into(),
            date_joined: NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
            salary: 60_000,
        }
    }

    fn seeded(ids: &[EmployeeId]) -> InMemoryEmployees {
        InMemoryEmployees::new(ids.iter().map(|id| draft("Seed").with_id(*id)).collect())
    }

    #[tokio::test]
    async fn first_insert_into_empty_store_gets_id_one() {
        let store = InMemoryEmployees::default();
        let stored = store.insert(draft("Asha")).await;
        assert_eq!(stored.id, 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn insert_continues_after_the_largest_seeded_id() {
        let store = seeded(&[3, 7, 5]);
        let stored = store.insert(draft("Asha")).await;
        assert_eq!(stored.id, 8);
        assert_eq!(store.find(8).await, Some(stored));
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_record() {
        let store = seeded(&[1, 2]);
        let mut updated = store.find(2).await.unwrap();
        updated.name = "Renamed".into();
        updated.salary = 1;
        store.replace(updated.clone()).await.unwrap();
        assert_eq!(store.find(2).await, Some(updated));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn replace_of_missing_id_leaves_rows_alone() {
        let store = seeded(&[1, 2]);
        let before = store.all().await;
        let err = store.replace(draft("Ghost").with_id(42)).await.unwrap_err();
        assert_eq!(err, DbError::EmployeeNotFound(42));
        assert_eq!(store.all().await, before);
    }

    #[tokio::test]
    async fn remove_of_missing_id_is_not_found() {
        let store = seeded(&[1]);
        assert_eq!(store.remove(999).await, Err(DbError::EmployeeNotFound(999)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn removed_ids_are_not_handed_out_again() {
        let store = seeded(&[1, 2]);
        store.remove(2).await.unwrap();
        let stored = store.insert(draft("Late")).await;
        assert_eq!(stored.id, 3);
        assert!(store.all().await.iter().all(|e| e.id != 2));
    }

    #[tokio::test]
    async fn old_snapshots_do_not_see_later_writes() {
        let store = seeded(&[1, 2]);
        let before = store.snapshot().await;
        store.insert(draft("New")).await;
        store.remove(1).await.unwrap();
        assert_eq!(before.len(), 2);
        assert_eq!(before[0].id, 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(InMemoryEmployees::default());
        let handles: Vec<_> = (0..32)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(draft(&format!("E{n}"))).await.id })
            })
            .collect();
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
        assert_eq!(store.len().await, 32);
    }

    #[test]
    fn not_found_maps_to_api_not_found() {
        let err: ApiError = DbError::EmployeeNotFound(5).into();
        assert!(err.is_not_found());
    }
}
