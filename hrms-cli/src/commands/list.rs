//! `list` — departments with headcount, average salary and employees.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use hrms_core::{Department, Registry};

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self, registry: &Registry) -> Result<String> {
        if self.json {
            return render_json(registry.departments());
        }
        Ok(render_text(registry.departments()))
    }
}

#[derive(Serialize)]
struct ListingJson<'a> {
    departments: Vec<DepartmentJson<'a>>,
}

#[derive(Serialize)]
struct DepartmentJson<'a> {
    #[serde(flatten)]
    department: &'a Department,
    headcount: usize,
    average_salary: Decimal,
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "number")]
    number: String,
    #[tabled(rename = "name")]
    full_name: String,
    #[tabled(rename = "position")]
    position: String,
    #[tabled(rename = "salary")]
    salary: Decimal,
}

fn render_json(departments: &[Department]) -> Result<String> {
    let payload = ListingJson {
        departments: departments
            .iter()
            .map(|department| DepartmentJson {
                department,
                headcount: department.headcount(),
                average_salary: department.average_salary(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&payload).context("failed to serialize department listing")
}

fn render_text(departments: &[Department]) -> String {
    if departments.is_empty() {
        return "No departments registered.".to_string();
    }

    let mut out = String::from("Departments:");
    for dept in departments {
        let _ = write!(
            out,
            "\n\n{} | employees: {}/{} | average salary: {} (cap {})",
            dept.name().to_string().bold(),
            dept.headcount(),
            dept.employee_limit(),
            dept.average_salary().round_dp(2),
            dept.salary_limit(),
        );

        if dept.is_empty() {
            out.push_str("\n  (no employees)");
            continue;
        }

        let rows: Vec<EmployeeRow> = dept
            .employees()
            .iter()
            .map(|e| EmployeeRow {
                number: e.number().to_string(),
                full_name: e.full_name().to_string(),
                position: e.position().to_string(),
                salary: e.salary(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        let _ = write!(out, "\n{table}");
    }
    out
}
