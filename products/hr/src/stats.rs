//! Dashboard aggregates over a directory snapshot.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use entity::Employee;
use serde::Serialize;

/// Join dates on or after `today - RECENT_MONTHS` count as recent hires.
pub const RECENT_MONTHS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DepartmentHeadcount {
    pub department: String,
    pub headcount: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct YearlyHires {
    pub year: i32,
    pub hires: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub departments: usize,
    pub recent_hires: usize,
    /// Sorted by department name.
    pub by_department: Vec<DepartmentHeadcount>,
    /// Ascending by year.
    pub hires_by_year: Vec<YearlyHires>,
}

impl DashboardStats {
    pub fn from_employees(employees: &[Employee], today: NaiveDate) -> Self {
        let mut by_department: BTreeMap<&str, usize> = BTreeMap::new();
        let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
        for employee in employees {
            *by_department.entry(employee.department.as_str()).or_default() += 1;
            *by_year.entry(employee.date_joined.year()).or_default() += 1;
        }

        let cutoff = today
            .checked_sub_months(Months::new(RECENT_MONTHS))
            .unwrap_or(NaiveDate::MIN);
        let recent_hires = employees
            .iter()
            .filter(|e| e.date_joined >= cutoff)
            .count();

        Self {
            total: employees.len(),
            departments: by_department.len(),
            recent_hires,
            by_department: by_department
                .into_iter()
                .map(|(department, headcount)| DepartmentHeadcount {
                    department: department.to_string(),
                    headcount,
                })
                .collect(),
            hires_by_year: by_year
                .into_iter()
                .map(|(year, hires)| YearlyHires { year, hires })
                .collect(),
        }
    }
}
