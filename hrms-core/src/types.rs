//! Domain types for the HR registry.
//!
//! Entities are only ever built and mutated through [`Registry`](crate::Registry);
//! outside the crate they are read-only views.
//! All monetary values are [`Decimal`]; never `f64`.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::RegistryError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Name of a department. Unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DepartmentName(pub String);

impl fmt::Display for DepartmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for DepartmentName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DepartmentName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// An employee number. Stored numbers always carry the department code prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmployeeNo(pub String);

impl fmt::Display for EmployeeNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EmployeeNo {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmployeeNo {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Two-character, upper-cased prefix derived from a department name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCode(String);

impl DepartmentCode {
    /// First two chars of the upper-cased `name`.
    ///
    /// Always exactly two chars: a letter whose upper case expands (`ß` to
    /// `SS`) fills both. Returns [`RegistryError::InvalidDepartmentName`] when
    /// the name itself has fewer than two chars.
    pub fn derive(name: &DepartmentName) -> Result<Self, RegistryError> {
        if name.0.chars().nth(1).is_none() {
            return Err(RegistryError::InvalidDepartmentName { name: name.clone() });
        }
        Ok(Self(name.0.chars().flat_map(char::to_uppercase).take(2).collect()))
    }

    /// `code + suffix`, e.g. `EN` + `01` = `EN01`.
    pub fn prefix(&self, suffix: &EmployeeNo) -> EmployeeNo {
        EmployeeNo(format!("{self}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepartmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A person assigned to exactly one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub(crate) number: EmployeeNo,
    pub(crate) full_name: String,
    pub(crate) position: String,
    pub(crate) salary: Decimal,
}

impl Employee {
    pub(crate) fn new(
        number: EmployeeNo,
        full_name: String,
        position: String,
        salary: Decimal,
    ) -> Self {
        Self {
            number,
            full_name,
            position,
            salary,
        }
    }

    pub fn number(&self) -> &EmployeeNo {
        &self.number
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }
}

/// An organisational unit with a headcount cap and an average-salary cap.
///
/// Employees are kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub(crate) name: DepartmentName,
    pub(crate) employee_limit: u32,
    pub(crate) salary_limit: Decimal,
    pub(crate) employees: Vec<Employee>,
}

impl Department {
    pub(crate) fn new(name: DepartmentName, employee_limit: u32, salary_limit: Decimal) -> Self {
        Self {
            name,
            employee_limit,
            salary_limit,
            employees: Vec::new(),
        }
    }

    pub fn name(&self) -> &DepartmentName {
        &self.name
    }

    pub fn employee_limit(&self) -> u32 {
        self.employee_limit
    }

    pub fn salary_limit(&self) -> Decimal {
        self.salary_limit
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn headcount(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// True once `headcount() >= employee_limit`.
    pub fn is_full(&self) -> bool {
        self.headcount() >= self.employee_limit as usize
    }

    /// Exact lookup by stored (prefixed) number.
    pub fn find_employee(&self, number: &EmployeeNo) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.number == number)
    }

    pub(crate) fn position_of(&self, number: &EmployeeNo) -> Option<usize> {
        self.employees.iter().position(|e| &e.number == number)
    }

    pub(crate) fn find_employee_mut(&mut self, number: &EmployeeNo) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| &e.number == number)
    }

    /// Arithmetic mean of all salaries, or zero for an empty department.
    ///
    /// Exact sum over count while the sum fits in a [`Decimal`]; past that an
    /// incremental mean that never forms the total.
    pub fn average_salary(&self) -> Decimal {
        if self.employees.is_empty() {
            return Decimal::ZERO;
        }
        let total = self
            .employees
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.salary));
        match total {
            Some(total) => total / Decimal::from(self.employees.len()),
            None => self.running_mean(),
        }
    }

    fn running_mean(&self) -> Decimal {
        let mut mean = Decimal::ZERO;
        for (i, employee) in self.employees.iter().enumerate() {
            let k = Decimal::from(i + 1);
            // The next mean lies between `mean` and the salary, so saturation
            // only absorbs rounding at the edge of the range.
            mean = match employee.salary.checked_sub(mean) {
                Some(delta) => mean.saturating_add(delta / k),
                None => (mean - mean / k).saturating_add(employee.salary / k),
            };
        }
        mean
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dept_with(salaries: &[Decimal]) -> Department {
        let mut dept = Department::new(DepartmentName::from("Engineering"), 10, dec!(100000));
        for (i, salary) in salaries.iter().enumerate() {
            dept.employees.push(Employee::new(
                EmployeeNo(format!("EN{i:02}")),
                format!("Person {i}"),
                "Engineer".into(),
                *salary,
            ));
        }
        dept
    }

    #[test]
    fn newtype_display() {
        assert_eq!(DepartmentName::from("Sales").to_string(), "Sales");
        assert_eq!(EmployeeNo::from("SA01").to_string(), "SA01");
    }

    #[test]
    fn average_of_empty_department_is_zero() {
        assert_eq!(dept_with(&[]).average_salary(), Decimal::ZERO);
    }

    #[test]
    fn average_is_exact() {
        let dept = dept_with(&[dec!(1000), dec!(2000), dec!(3000)]);
        assert_eq!(dept.average_salary(), dec!(2000));
    }

    #[test]
    fn average_keeps_decimal_cents() {
        let dept = dept_with(&[dec!(0.10), dec!(0.20)]);
        assert_eq!(dept.average_salary(), dec!(0.15));
    }

    #[test]
    fn average_survives_an_overflowing_total() {
        let dept = dept_with(&[Decimal::MAX, Decimal::MAX]);
        assert_eq!(dept.average_salary(), Decimal::MAX);

        let avg = dept_with(&[Decimal::MAX, Decimal::MAX, Decimal::ZERO]).average_salary();
        assert!(avg > Decimal::MAX / dec!(2) && avg < Decimal::MAX, "{avg}");
    }

    #[test]
    fn code_is_upper_cased_first_two_chars() {
        let code = DepartmentCode::derive(&DepartmentName::from("engineering")).unwrap();
        assert_eq!(code.as_str(), "EN");
        assert_eq!(code.prefix(&EmployeeNo::from("01")), EmployeeNo::from("EN01"));
    }

    #[test]
    fn code_counts_chars_not_bytes() {
        let code = DepartmentCode::derive(&DepartmentName::from("éq")).unwrap();
        assert_eq!(code.as_str(), "ÉQ");
    }

    #[test]
    fn code_stays_two_chars_when_upper_case_expands() {
        let code = DepartmentCode::derive(&DepartmentName::from("ßeta")).unwrap();
        assert_eq!(code.as_str(), "SS");
        assert_eq!(code.to_string().chars().count(), 2);
        assert!(DepartmentCode::derive(&DepartmentName::from("ß")).is_err());
    }

    #[test]
    fn code_rejects_short_names() {
        for name in ["", "X"] {
            let err = DepartmentCode::derive(&DepartmentName::from(name)).unwrap_err();
            assert!(matches!(err, RegistryError::InvalidDepartmentName { .. }));
        }
    }

    #[test]
    fn department_serializes_flat_with_string_amounts() {
        let dept = dept_with(&[dec!(1200.50)]);
        let value = serde_json::to_value(&dept).expect("serialize");
        assert_eq!(value["name"], "Engineering");
        assert_eq!(value["employee_limit"], 10);
        assert_eq!(value["salary_limit"], "100000");
        assert_eq!(value["employees"][0]["number"], "EN00");
        assert_eq!(value["employees"][0]["salary"], "1200.50");
    }

    #[test]
    fn is_full_tracks_limit() {
        let mut dept = dept_with(&[dec!(1)]);
        assert!(!dept.is_full());
        dept.employee_limit = 1;
        assert!(dept.is_full());
    }
}
