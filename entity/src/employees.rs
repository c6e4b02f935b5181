use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Directory-assigned identifier. Starts at 1 and is never handed out twice.
pub type EmployeeId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
    pub salary: u64,
}

/// An employee record before the directory has assigned it an id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
    pub salary: u64,
}

impl NewEmployee {
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            job_title: self.job_title,
            department: self.department,
            phone_number: self.phone_number,
            date_joined: self.date_joined,
            salary: self.salary,
        }
    }
}

impl From<Employee> for NewEmployee {
    fn from(value: Employee) -> Self {
        Self {
            name: value.name,
            email: value.email,
            job_title: value.job_title,
            department: value.department,
            phone_number: value.phone_number,
            date_joined: value.date_joined,
            salary: value.salary,
        }
    }
}
