//! Commands accepted at the `hrms>` prompt.
//!
//! Each line is parsed by [`ShellLine`]; every command's `run` returns the text
//! to print on success, or an error the shell renders as a failure line.

pub mod department;
pub mod employee;
pub mod list;

use std::str::FromStr;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use department::{AddDepartmentArgs, RemoveDepartmentArgs};
use employee::{AddEmployeeArgs, EditEmployeeArgs, RemoveEmployeeArgs};
use list::ListArgs;

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(
    name = "hrms",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_value_name = "COMMAND",
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// List departments and their employees.
    List(ListArgs),

    /// Create a department with headcount and average-salary limits.
    AddDepartment(AddDepartmentArgs),

    /// Delete a department that has no employees.
    RemoveDepartment(RemoveDepartmentArgs),

    /// Hire an employee into a department.
    AddEmployee(AddEmployeeArgs),

    /// Remove an employee by full (prefixed) number.
    RemoveEmployee(RemoveEmployeeArgs),

    /// Change an employee's name, salary and position.
    EditEmployee(EditEmployeeArgs),

    /// Leave the shell.
    #[command(alias = "quit")]
    Exit,
}

/// Non-negative decimal amount, e.g. `1200` or `1200.50`.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal, String> {
    let amount = Decimal::from_str(s.trim()).map_err(|e| format!("'{s}' is not a number: {e}"))?;
    check_amount(amount)
}

/// Salaries and salary limits must not be negative.
pub(crate) fn check_amount(amount: Decimal) -> Result<Decimal, String> {
    if amount < Decimal::ZERO {
        return Err(format!("'{amount}' must not be negative"));
    }
    Ok(amount)
}

/// A department must be able to hold at least one employee.
pub(crate) fn check_employee_limit(limit: u32) -> Result<u32, String> {
    if limit == 0 {
        return Err("employee limit must be at least 1".to_owned());
    }
    Ok(limit)
}
