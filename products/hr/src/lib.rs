//! HR vertical slice: the employee directory.

pub mod form;
pub mod search;
pub mod seed;
pub mod service;
pub mod stats;

pub use form::{DEPARTMENTS, EmployeeForm};
pub use seed::{LITERAL_EMPLOYEES, SeedOptions, demo_employees};
pub use service::{DirectoryService, Latency};
pub use stats::{DashboardStats, DepartmentHeadcount, YearlyHires};
