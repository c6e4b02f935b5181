use entity::Employee;

/// Case-insensitive substring match on name, email, department and job title.
/// The term is used as typed, surrounding whitespace included; an empty term
/// keeps everything.
pub fn filter(employees: Vec<Employee>, term: &str) -> Vec<Employee> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return employees;
    }
    employees
        .into_iter()
        .filter(|employee| matches(employee, &needle))
        .collect()
}

fn matches(employee: &Employee, needle: &str) -> bool {
    [
        &employee.name,
        &employee.email,
        &employee.department,
        &employee.job_title,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{SeedOptions, demo_employees};
    use chrono::NaiveDate;

    fn literals() -> Vec<Employee> {
        demo_employees(&SeedOptions::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).with_total(0))
    }

    fn names(employees: &[Employee]) -> Vec<&str> {
        employees.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn empty_term_returns_everything() {
        assert_eq!(filter(literals(), "").len(), 5);
    }

    #[test]
    fn whitespace_in_the_term_is_significant() {
        assert_eq!(names(&filter(literals(), " smith")), vec!["Jane Smith"]);
        assert_eq!(names(&filter(literals(), "jane ")), vec!["Jane Smith"]);
        assert!(filter(literals(), "   ").is_empty());
    }

    #[test]
    fn matches_any_searchable_field_ignoring_case() {
        assert_eq!(names(&filter(literals(), "jane")), vec!["Jane Smith"]);
        assert_eq!(names(&filter(literals(), "HUMAN")), vec!["Robert Brown"]);
        assert_eq!(names(&filter(literals(), "designer")), vec!["Michael Johnson"]);
        assert_eq!(
            names(&filter(literals(), "emily.williams@")),
            vec!["Emily Williams"]
        );
    }

    #[test]
    fn phone_numbers_are_not_searched() {
        assert!(filter(literals(), "555").is_empty());
    }
}
