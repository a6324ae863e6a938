//! Optional YAML configuration: display/logging defaults and seed data.
//!
//! # Location
//!
//! ```text
//! --config <path>           (explicit; must exist)
//! ~/.hrms/config.yaml       (default; silently skipped when absent)
//! ```
//!
//! Like the rest of the CLI, loaders come in two forms: `load_at(home)` for
//! tests with a `TempDir`, and `load()` which derives home from `dirs::home_dir()`.
//! The file is only ever read.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

use hrms_core::{DepartmentName, EmployeeNo, Registry};

use crate::commands::{check_amount, check_employee_limit};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `false` disables colored status lines.
    pub color: Option<bool>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log: Option<String>,
    /// Departments (and their employees) created at startup.
    pub departments: Vec<SeedDepartment>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDepartment {
    pub name: String,
    pub employee_limit: u32,
    pub salary_limit: Decimal,
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedEmployee {
    /// Suffix only; the department code is prepended on insert.
    pub number: String,
    pub full_name: String,
    pub position: String,
    pub salary: Decimal,
}

/// `<home>/.hrms/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".hrms").join("config.yaml")
}

/// Reads and parses `path`. A missing file is an error.
pub fn load_from(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))
}

/// Loads `<home>/.hrms/config.yaml`, or the default config if it does not exist.
pub fn load_at(home: &Path) -> Result<Config> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_from(&path)
}

/// `load_at` convenience wrapper. No home directory means no config.
pub fn load() -> Result<Config> {
    match dirs::home_dir() {
        Some(home) => load_at(&home),
        None => Ok(Config::default()),
    }
}

impl Config {
    /// Replays the seed section through the registry, so every limit applies.
    ///
    /// Entries are held to the same input rules as the shell: a positive
    /// employee limit and non-negative amounts.
    pub fn seed(&self, registry: &mut Registry) -> Result<()> {
        for dept in &self.departments {
            let name = DepartmentName::from(dept.name.as_str());
            dept.check()
                .and_then(|()| {
                    registry.add_department(name.clone(), dept.employee_limit, dept.salary_limit)?;
                    Ok(())
                })
                .with_context(|| format!("seed department '{}'", dept.name))?;

            for employee in &dept.employees {
                employee
                    .check()
                    .and_then(|()| {
                        registry.add_employee(
                            &name,
                            &EmployeeNo::from(employee.number.as_str()),
                            employee.full_name.as_str(),
                            employee.position.as_str(),
                            employee.salary,
                        )?;
                        Ok(())
                    })
                    .with_context(|| {
                        format!(
                            "seed employee '{}' in department '{}'",
                            employee.number, dept.name
                        )
                    })?;
            }
        }
        Ok(())
    }
}

impl SeedDepartment {
    fn check(&self) -> Result<()> {
        check_employee_limit(self.employee_limit).map_err(anyhow::Error::msg)?;
        check_amount(self.salary_limit).map_err(|e| anyhow!("salary_limit {e}"))?;
        Ok(())
    }
}

impl SeedEmployee {
    fn check(&self) -> Result<()> {
        check_amount(self.salary).map_err(|e| anyhow!("salary {e}"))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
