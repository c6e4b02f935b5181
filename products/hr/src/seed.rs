//! Demo directory contents: a handful of fixed records padded out with
//! randomly generated ones.

use chrono::{Duration, NaiveDate};
use entity::{Employee, EmployeeId};
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const DEFAULT_TOTAL: usize = 50;

/// `(name, email, job title, department, phone, joined y/m/d, salary)`
type LiteralRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    (i32, u32, u32),
    u64,
);

pub const LITERAL_EMPLOYEES: &[LiteralRow] = &[
    (
        "John Doe",
        "john.doe@company.com",
        "Software Engineer",
        "Engineering",
        "(555) 123-4567",
        (2021, 3, 15),
        80_000,
    ),
    (
        "Jane Smith",
        "jane.smith@company.com",
        "Product Manager",
        "Product",
        "(555) 987-6543",
        (2020, 7, 22),
        95_000,
    ),
    (
        "Michael Johnson",
        "michael.johnson@company.com",
        "UX Designer",
        "Design",
        "(555) 456-7890",
        (2022, 1, 10),
        75_000,
    ),
    (
        "Emily Williams",
        "emily.williams@company.com",
        "Marketing Specialist",
        "Marketing",
        "(555) 234-5678",
        (2021, 11, 5),
        70_000,
    ),
    (
        "Robert Brown",
        "robert.brown@company.com",
        "HR Manager",
        "Human Resources",
        "(555) 876-5432",
        (2019, 9, 18),
        85_000,
    ),
];

const JOB_TITLES: &[(&str, &[&str])] = &[
    (
        "Engineering",
        &[
            "Software Engineer",
            "QA Engineer",
            "DevOps Engineer",
            "Frontend Developer",
            "Backend Developer",
        ],
    ),
    (
        "Product",
        &["Product Manager", "Product Owner", "Business Analyst", "Product Analyst"],
    ),
    (
        "Design",
        &["UX Designer", "UI Designer", "Graphic Designer", "Product Designer"],
    ),
    (
        "Marketing",
        &[
            "Marketing Specialist",
            "Content Writer",
            "SEO Specialist",
            "Social Media Manager",
        ],
    ),
    (
        "Human Resources",
        &[
            "HR Manager",
            "Recruiter",
            "HR Coordinator",
            "Talent Acquisition Specialist",
        ],
    ),
    (
        "Finance",
        &["Financial Analyst", "Accountant", "Finance Manager", "Payroll Specialist"],
    ),
    (
        "Sales",
        &[
            "Sales Representative",
            "Sales Manager",
            "Account Executive",
            "Business Development Rep",
        ],
    ),
    (
        "Customer Support",
        &[
            "Customer Support Rep",
            "Customer Success Manager",
            "Support Engineer",
            "Support Lead",
        ],
    ),
    (
        "Operations",
        &[
            "Operations Manager",
            "Project Manager",
            "Program Manager",
            "Operations Analyst",
        ],
    ),
    (
        "Legal",
        &[
            "Legal Counsel",
            "Compliance Officer",
            "Contract Specialist",
            "Legal Assistant",
        ],
    ),
];

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Vivaan", "Aditya", "Vihaan", "Arjun", "Reyansh", "Ayaan", "Atharva", "Anaya",
    "Anika", "Saanvi", "Aadhya", "Pari", "Diya", "Myra", "Kavya",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Verma", "Patel", "Singh", "Kumar", "Gupta", "Shah", "Reddy", "Joshi", "Chauhan",
    "Nair", "Mehta", "Agarwal", "Iyer", "Malhotra",
];

const SALARY_STEP: u64 = 1_000;

#[derive(Clone, Debug)]
pub struct SeedOptions {
    /// Target size of the directory. Never fewer than the literal records.
    pub total: usize,
    /// Fixed RNG seed for reproducible output; entropy when `None`.
    pub rng_seed: Option<u64>,
    /// Upper bound for generated join dates.
    pub today: NaiveDate,
}

impl SeedOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            total: DEFAULT_TOTAL,
            rng_seed: None,
            today,
        }
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

pub fn demo_employees(options: &SeedOptions) -> Vec<Employee> {
    let mut rng = match options.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut employees = literal_employees();
    let missing = options.total.saturating_sub(employees.len());
    let first_id = employees.len() as EmployeeId + 1;
    for offset in 0..missing {
        employees.push(generated_employee(
            &mut rng,
            first_id + offset as EmployeeId,
            options.today,
        ));
    }
    employees
}

fn literal_employees() -> Vec<Employee> {
    LITERAL_EMPLOYEES
        .iter()
        .zip(1..)
        .filter_map(
            |(&(name, email, job_title, department, phone, (y, m, d), salary), id)| {
                Some(Employee {
                    id,
                    name: name.into(),
                    email: email.into(),
                    job_title: job_title.into(),
                    department: department.into(),
                    phone_number: phone.into(),
                    date_joined: NaiveDate::from_ymd_opt(y, m, d)?,
                    salary,
                })
            },
        )
        .collect()
}

fn generated_employee(rng: &mut StdRng, id: EmployeeId, today: NaiveDate) -> Employee {
    let (department, titles) = pick(rng, JOB_TITLES);
    let job_title = pick(rng, titles);
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);

    Employee {
        id,
        name: format!("{first} {last}"),
        email: format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
        job_title: job_title.to_string(),
        department: department.to_string(),
        phone_number: format!("+91 {:010}", rng.gen_range(0..10_000_000_000u64)),
        date_joined: random_join_date(rng, today),
        salary: rng.gen_range(30..150) * SALARY_STEP,
    }
}

fn random_join_date(rng: &mut StdRng, today: NaiveDate) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or(today);
    let span = (today - start).num_days();
    if span <= 0 {
        return start;
    }
    start + Duration::days(rng.gen_range(0..=span))
}

fn pick<T: Copy>(rng: &mut StdRng, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn default_seed_has_fifty_records_with_unique_ids() {
        let employees = demo_employees(&SeedOptions::new(today()).with_rng_seed(7));
        assert_eq!(employees.len(), 50);
        let ids: HashSet<_> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(ids.iter().max(), Some(&50));
        assert_eq!(employees[0].name, "John Doe");
        assert_eq!(employees[4].name, "Robert Brown");
    }

    #[test]
    fn generated_records_follow_the_demo_shapes() {
        let employees = demo_employees(&SeedOptions::new(today()).with_rng_seed(11));
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        for employee in &employees[LITERAL_EMPLOYEES.len()..] {
            assert!(employee.email.ends_with("@company.com"));
            assert_eq!(employee.email, employee.email.to_lowercase());
            assert!(employee.phone_number.starts_with("+91 "));
            assert_eq!(employee.phone_number.len(), 14);
            assert!((30_000..=149_000).contains(&employee.salary));
            assert_eq!(employee.salary % SALARY_STEP, 0);
            assert!(employee.date_joined >= start && employee.date_joined <= today());
            let titles = JOB_TITLES
                .iter()
                .find(|(dept, _)| *dept == employee.department)
                .map(|(_, titles)| *titles)
                .unwrap();
            assert!(titles.contains(&employee.job_title.as_str()));
        }
    }

    #[test]
    fn fixed_rng_seed_is_reproducible() {
        let options = SeedOptions::new(today()).with_rng_seed(42);
        assert_eq!(demo_employees(&options), demo_employees(&options));
    }

    #[test]
    fn totals_below_the_literal_count_keep_the_literals() {
        let employees = demo_employees(&SeedOptions::new(today()).with_total(2));
        assert_eq!(employees.len(), LITERAL_EMPLOYEES.len());
    }
}
