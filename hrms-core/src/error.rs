//! Error types for hrms-core.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{DepartmentName, EmployeeNo};

/// Business-rule violations reported by [`Registry`](crate::Registry) operations.
///
/// Every variant is recoverable: the registry is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A department with this name is already registered.
    #[error("department '{name}' already exists")]
    DuplicateDepartment { name: DepartmentName },

    #[error("department '{name}' not found")]
    DepartmentNotFound { name: DepartmentName },

    /// Departments can only be removed once they have no employees.
    #[error("department '{name}' still has {headcount} employee(s)")]
    DepartmentNotEmpty {
        name: DepartmentName,
        headcount: usize,
    },

    #[error("department '{name}' is at its employee limit of {limit}")]
    HeadcountExceeded { name: DepartmentName, limit: u32 },

    /// `average` is the department average before the new hire was considered.
    #[error(
        "salary {salary} on top of average {average} exceeds the limit {limit} of department '{name}'"
    )]
    SalaryLimitExceeded {
        name: DepartmentName,
        average: Decimal,
        salary: Decimal,
        limit: Decimal,
    },

    /// The name is too short to derive a two-character department code from.
    #[error("cannot derive a department code from '{name}'")]
    InvalidDepartmentName { name: DepartmentName },

    #[error("employee number '{number}' already exists in department '{department}'")]
    DuplicateEmployeeNumber {
        department: DepartmentName,
        number: EmployeeNo,
    },

    #[error("employee '{number}' not found")]
    EmployeeNotFound { number: EmployeeNo },
}
