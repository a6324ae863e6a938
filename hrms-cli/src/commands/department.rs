//! `add-department` and `remove-department`

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use hrms_core::{DepartmentName, Registry};

use super::parse_amount;

#[derive(Args, Debug)]
pub struct AddDepartmentArgs {
    /// Department name; its first two letters become the employee code.
    pub name: String,

    /// Maximum number of employees (at least 1).
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub employee_limit: u32,

    /// Cap on the department's average salary.
    #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
    pub salary_limit: Decimal,
}

impl AddDepartmentArgs {
    pub fn run(self, registry: &mut Registry) -> Result<String> {
        let dept = registry.add_department(
            DepartmentName::from(self.name),
            self.employee_limit,
            self.salary_limit,
        )?;
        Ok(format!(
            "Department '{}' added (up to {} employees, average salary cap {}).",
            dept.name(),
            dept.employee_limit(),
            dept.salary_limit()
        ))
    }
}

#[derive(Args, Debug)]
pub struct RemoveDepartmentArgs {
    pub name: String,
}

impl RemoveDepartmentArgs {
    pub fn run(self, registry: &mut Registry) -> Result<String> {
        let removed = registry.remove_department(&DepartmentName::from(self.name))?;
        Ok(format!("Department '{}' removed.", removed.name()))
    }
}
