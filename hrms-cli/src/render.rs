//! Status lines and user-facing wording for registry outcomes.

use colored::Colorize;
use hrms_core::RegistryError;

pub fn success(message: &str) -> String {
    format!("{} {message}", "✓".green().bold())
}

pub fn failure(message: &str) -> String {
    format!("{} {message}", "✗".red().bold())
}

/// Describes a failed command. Registry rule violations get their own wording;
/// anything else falls back to the full anyhow chain.
pub fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<RegistryError>() {
        Some(rule) => describe(rule),
        None => format!("{err:#}"),
    }
}

pub fn describe(err: &RegistryError) -> String {
    match err {
        RegistryError::DuplicateDepartment { name } => {
            format!("Department '{name}' already exists.")
        }
        RegistryError::DepartmentNotFound { name } => {
            format!("No department named '{name}' was found.")
        }
        RegistryError::DepartmentNotEmpty { name, headcount } => format!(
            "Department '{name}' still has {headcount} employee(s); remove them first."
        ),
        RegistryError::HeadcountExceeded { name, limit } => {
            format!("Department '{name}' has reached its employee limit of {limit}.")
        }
        RegistryError::SalaryLimitExceeded { name, limit, .. } => format!(
            "The average salary of '{name}' would exceed its limit of {limit}."
        ),
        RegistryError::InvalidDepartmentName { name } => format!(
            "Department name '{name}' is too short to derive an employee code."
        ),
        RegistryError::DuplicateEmployeeNumber { department, number } => {
            format!("Employee number '{number}' already exists in '{department}'.")
        }
        RegistryError::EmployeeNotFound { number } => {
            format!("No employee with number '{number}' was found.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrms_core::{DepartmentName, EmployeeNo};
    use rust_decimal_macros::dec;

    #[test]
    fn status_lines_carry_markers() {
        colored::control::set_override(false);
        assert_eq!(success("done"), "✓ done");
        assert_eq!(failure("nope"), "✗ nope");
    }

    #[test]
    fn registry_errors_get_friendly_wording() {
        let err = anyhow::Error::new(RegistryError::SalaryLimitExceeded {
            name: DepartmentName::from("Sales"),
            average: dec!(600),
            salary: dec!(500),
            limit: dec!(1000),
        });
        assert_eq!(
            describe_failure(&err),
            "The average salary of 'Sales' would exceed its limit of 1000."
        );
    }

    #[test]
    fn other_errors_show_their_chain() {
        let err = anyhow::anyhow!("disk on fire").context("failed to list");
        assert_eq!(describe_failure(&err), "failed to list: disk on fire");
    }

    #[test]
    fn not_found_names_the_number() {
        let msg = describe(&RegistryError::EmployeeNotFound { number: EmployeeNo::from("EN01") });
        assert!(msg.contains("'EN01'"));
    }
}
