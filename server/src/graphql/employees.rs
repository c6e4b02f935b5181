use async_graphql::{ID, InputObject, SimpleObject};
use chrono::NaiveDate;
use entity::Employee;
use products_hr::{DashboardStats, EmployeeForm};

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Employee")]
pub struct EmployeeNode {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
    pub salary: u64,
}

impl From<Employee> for EmployeeNode {
    fn from(model: Employee) -> Self {
        Self {
            id: ID(model.id.to_string()),
            name: model.name,
            email: model.email,
            job_title: model.job_title,
            department: model.department,
            phone_number: model.phone_number,
            date_joined: model.date_joined,
            salary: model.salary,
        }
    }
}

/// Add/edit form payload. `dateJoined` is `YYYY-MM-DD`.
#[derive(Clone, Debug, InputObject)]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    pub phone_number: String,
    pub date_joined: String,
    pub salary: u64,
}

impl From<EmployeeInput> for EmployeeForm {
    fn from(input: EmployeeInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            job_title: input.job_title,
            department: input.department,
            phone_number: input.phone_number,
            date_joined: input.date_joined,
            salary: input.salary,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct DepartmentCount {
    pub department: String,
    pub headcount: usize,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct YearCount {
    pub year: i32,
    pub hires: usize,
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Dashboard")]
pub struct DashboardNode {
    pub total: usize,
    pub departments: usize,
    pub recent_hires: usize,
    pub by_department: Vec<DepartmentCount>,
    pub hires_by_year: Vec<YearCount>,
}

impl From<DashboardStats> for DashboardNode {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total: stats.total,
            departments: stats.departments,
            recent_hires: stats.recent_hires,
            by_department: stats
                .by_department
                .into_iter()
                .map(|row| DepartmentCount {
                    department: row.department,
                    headcount: row.headcount,
                })
                .collect(),
            hires_by_year: stats
                .hires_by_year
                .into_iter()
                .map(|row| YearCount {
                    year: row.year,
                    hires: row.hires,
                })
                .collect(),
        }
    }
}
