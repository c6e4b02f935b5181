//! Fixtures shared by the cross-crate scenarios.

use std::path::Path;

use products_hr::{EmployeeForm, Latency};
use server::AppConfig;

/// Deterministic seed, no simulated latency, sessions under `session_dir`.
pub fn test_config(session_dir: &Path) -> AppConfig {
    AppConfig {
        session_dir: session_dir.to_path_buf(),
        latency: Latency::none(),
        seed_total: products_hr::seed::DEFAULT_TOTAL,
        seed_rng: Some(42),
    }
}

pub fn valid_form() -> EmployeeForm {
    EmployeeForm {
        name: "Arjun Menon".into(),
        email: "arjun.menon@company.com".into(),
        job_title: "QA Engineer".into(),
        department: "Engineering".into(),
        phone_number: "9988776655".into(),
        date_joined: "2023-11-15".into(),
        salary: 72_000,
    }
}
