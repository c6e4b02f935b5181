use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use entity::{Employee, EmployeeId, NewEmployee};
use platform_api::{ApiResult, Notifier};
use platform_db::{EmployeeRepository, InMemoryEmployees};
use tracing::{info, instrument, warn};

use crate::search;
use crate::seed::{SeedOptions, demo_employees};
use crate::stats::DashboardStats;

/// Simulated round-trip time of each directory call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub mutate: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            mutate: Duration::from_millis(500),
        }
    }
}

impl Latency {
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            mutate: delay,
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// The employee directory. Every read and write goes through here.
///
/// Inputs are trusted; validate with [`crate::EmployeeForm`] before calling.
pub struct DirectoryService<R = InMemoryEmployees> {
    repo: Arc<R>,
    latency: Latency,
    notifier: Notifier,
}

impl DirectoryService<InMemoryEmployees> {
    /// A fresh in-memory directory filled with the demo records.
    pub fn seeded(options: &SeedOptions, latency: Latency, notifier: Notifier) -> Self {
        let employees = demo_employees(options);
        info!(total = employees.len(), "seeded employee directory");
        Self::new(Arc::new(InMemoryEmployees::new(employees)), latency, notifier)
    }
}

impl<R: EmployeeRepository> DirectoryService<R> {
    pub fn new(repo: Arc<R>, latency: Latency, notifier: Notifier) -> Self {
        Self {
            repo,
            latency,
            notifier,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[instrument(name = "directory.list", skip(self))]
    pub async fn list(&self) -> Vec<Employee> {
        pause(self.latency.list).await;
        self.repo.all().await
    }

    #[instrument(name = "directory.get", skip(self))]
    pub async fn get(&self, id: EmployeeId) -> Option<Employee> {
        pause(self.latency.get).await;
        self.repo.find(id).await
    }

    #[instrument(name = "directory.create", skip_all)]
    pub async fn create(&self, draft: NewEmployee) -> Employee {
        pause(self.latency.mutate).await;
        let employee = self.repo.insert(draft).await;
        info!(id = employee.id, "employee created");
        self.notifier.success("Employee added successfully");
        employee
    }

    /// Replace the stored record with the same id. Every field is taken from
    /// `employee`; there is no partial update.
    #[instrument(name = "directory.update", skip_all, fields(id = employee.id))]
    pub async fn update(&self, employee: Employee) -> ApiResult<Employee> {
        pause(self.latency.mutate).await;
        match self.repo.replace(employee).await {
            Ok(stored) => {
                info!("employee updated");
                self.notifier.success("Employee updated successfully");
                Ok(stored)
            }
            Err(err) => {
                warn!(error = %err, "update rejected");
                self.notifier.error("Employee not found");
                Err(err.into())
            }
        }
    }

    #[instrument(name = "directory.delete", skip(self))]
    pub async fn delete(&self, id: EmployeeId) -> ApiResult<()> {
        pause(self.latency.mutate).await;
        match self.repo.remove(id).await {
            Ok(()) => {
                info!("employee deleted");
                self.notifier.success("Employee deleted successfully");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "delete rejected");
                self.notifier.error("Employee not found");
                Err(err.into())
            }
        }
    }

    /// [`list`](Self::list) narrowed to records matching `term`.
    pub async fn search(&self, term: &str) -> Vec<Employee> {
        search::filter(self.list().await, term)
    }

    pub async fn dashboard(&self, today: NaiveDate) -> DashboardStats {
        let employees = self.list().await;
        DashboardStats::from_employees(&employees, today)
    }
}
