//! The add/edit employee form.
//!
//! The directory service trusts its callers, so everything user-typed goes
//! through [`EmployeeForm::validate`] first.

use chrono::NaiveDate;
use entity::NewEmployee;
use platform_api::{ApiError, ApiResult};
use serde::Deserialize;

/// Departments offered by the form's picker.
pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "Customer Support",
    "Human Resources",
    "Finance",
    "Legal",
    "Operations",
];

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_LEN: usize = 7;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    pub phone_number: String,
    /// `YYYY-MM-DD`
    pub date_joined: String,
    pub salary: u64,
}

impl EmployeeForm {
    /// Check every field, reporting the first failure the way the form does.
    pub fn validate(&self) -> ApiResult<NewEmployee> {
        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ApiError::invalid("Name must be at least 2 characters."));
        }
        let email = self.email.trim();
        if !is_email(email) {
            return Err(ApiError::invalid("Please enter a valid email address."));
        }
        let job_title = self.job_title.trim();
        if job_title.chars().count() < MIN_NAME_LEN {
            return Err(ApiError::invalid("Job title is required."));
        }
        let department = self.department.trim();
        if department.is_empty() {
            return Err(ApiError::invalid("Department is required."));
        }
        let phone_number = self.phone_number.trim();
        if phone_number.chars().count() < MIN_PHONE_LEN {
            return Err(ApiError::invalid("Please enter a valid phone number."));
        }
        if !is_indian_phone(phone_number) {
            return Err(ApiError::invalid("Please enter a valid Indian phone number."));
        }
        let date_joined = parse_join_date(&self.date_joined)?;

        Ok(NewEmployee {
            name: name.to_string(),
            email: email.to_string(),
            job_title: job_title.to_string(),
            department: department.to_string(),
            phone_number: phone_number.to_string(),
            date_joined,
            salary: self.salary,
        })
    }
}

fn parse_join_date(value: &str) -> ApiResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::invalid("Date joined is required."));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::invalid("Date joined must be a valid YYYY-MM-DD date."))
}

/// `local@domain.tld`, no whitespace anywhere.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Ten digits, optionally preceded by `+91` and a single whitespace.
fn is_indian_phone(value: &str) -> bool {
    let digits = match value.strip_prefix("+91") {
        Some(rest) => rest.strip_prefix(char::is_whitespace).unwrap_or(rest),
        None => value,
    };
    digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit())
}
