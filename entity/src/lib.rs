//! Plain records shared by the directory and identity crates.

pub mod accounts;
pub mod employees;
pub mod sessions;

pub use accounts::Account;
pub use employees::{Employee, EmployeeId, NewEmployee};
pub use sessions::{SESSION_KEY, SessionUser};
