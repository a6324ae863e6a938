//! `add-employee`, `remove-employee` and `edit-employee`

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use hrms_core::{DepartmentName, EmployeeNo, Registry};

use super::parse_amount;

#[derive(Args, Debug)]
pub struct AddEmployeeArgs {
    /// Department to hire into.
    pub department: String,

    /// Number suffix; stored as department code + suffix (e.g. `01` -> `EN01`).
    pub number: String,

    pub full_name: String,

    pub position: String,

    #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
    pub salary: Decimal,
}

impl AddEmployeeArgs {
    pub fn run(self, registry: &mut Registry) -> Result<String> {
        let department = DepartmentName::from(self.department);
        let employee = registry.add_employee(
            &department,
            &EmployeeNo::from(self.number),
            self.full_name,
            self.position,
            self.salary,
        )?;
        Ok(format!(
            "Employee '{}' ({}) added to '{department}'.",
            employee.number(),
            employee.full_name()
        ))
    }
}

#[derive(Args, Debug)]
pub struct RemoveEmployeeArgs {
    pub department: String,

    /// Full stored number, including the department code (e.g. `EN01`).
    pub number: String,
}

impl RemoveEmployeeArgs {
    pub fn run(self, registry: &mut Registry) -> Result<String> {
        let department = DepartmentName::from(self.department);
        let removed = registry.remove_employee(&department, &EmployeeNo::from(self.number))?;
        Ok(format!(
            "Employee '{}' ({}) removed from '{department}'.",
            removed.number(),
            removed.full_name()
        ))
    }
}

#[derive(Args, Debug)]
pub struct EditEmployeeArgs {
    /// Full stored number, including the department code (e.g. `EN01`).
    pub number: String,

    pub full_name: String,

    #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
    pub salary: Decimal,

    pub position: String,
}

impl EditEmployeeArgs {
    pub fn run(self, registry: &mut Registry) -> Result<String> {
        let employee = registry.edit_employee(
            &EmployeeNo::from(self.number),
            self.full_name,
            self.salary,
            self.position,
        )?;
        Ok(format!("Employee '{}' updated.", employee.number()))
    }
}
