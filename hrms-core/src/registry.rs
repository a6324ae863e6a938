//! In-memory department/employee registry.
//!
//! # API pattern
//!
//! Every operation validates first and mutates last, so a returned `Err`
//! guarantees the registry is unchanged. Lookups are linear scans over
//! insertion-ordered `Vec`s; listing order is always insertion order.
//!
//! # Employee numbers
//!
//! [`Registry::add_employee`] stores `code + suffix` (e.g. `EN01`), while
//! [`Registry::remove_employee`] and [`Registry::edit_employee`] compare the
//! argument verbatim against stored numbers. Callers must pass the full,
//! prefixed number to remove or edit an employee.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::RegistryError;
use crate::types::{Department, DepartmentCode, DepartmentName, Employee, EmployeeNo};

/// Owner of all departments. Construct one per session; there is no global instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    departments: Vec<Department>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. Queries
    // -----------------------------------------------------------------------

    /// All departments in insertion order.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn department(&self, name: &DepartmentName) -> Option<&Department> {
        self.departments.iter().find(|d| &d.name == name)
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    // -----------------------------------------------------------------------
    // 2. Departments
    // -----------------------------------------------------------------------

    /// Appends a new, empty department.
    pub fn add_department(
        &mut self,
        name: DepartmentName,
        employee_limit: u32,
        salary_limit: Decimal,
    ) -> Result<&Department, RegistryError> {
        if self.department(&name).is_some() {
            return Err(rejected(RegistryError::DuplicateDepartment { name }));
        }

        debug!(department = %name, employee_limit, %salary_limit, "department added");
        self.departments
            .push(Department::new(name, employee_limit, salary_limit));
        Ok(&self.departments[self.departments.len() - 1])
    }

    /// Removes an empty department and hands it back.
    pub fn remove_department(&mut self, name: &DepartmentName) -> Result<Department, RegistryError> {
        let index = self.index_of(name)?;
        let headcount = self.departments[index].headcount();
        if headcount > 0 {
            return Err(rejected(RegistryError::DepartmentNotEmpty {
                name: name.clone(),
                headcount,
            }));
        }

        debug!(department = %name, "department removed");
        Ok(self.departments.remove(index))
    }

    // -----------------------------------------------------------------------
    // 3. Employees
    // -----------------------------------------------------------------------

    /// Hires into `department` under number `code + employee_no`.
    ///
    /// Checks, in order: department exists, headcount below limit,
    /// `current average + salary <= salary limit`, department name long enough
    /// for a code, prefixed number unused. The salary check compares against
    /// the average *before* the hire, not the resulting one.
    pub fn add_employee(
        &mut self,
        department: &DepartmentName,
        employee_no: &EmployeeNo,
        full_name: impl Into<String>,
        position: impl Into<String>,
        salary: Decimal,
    ) -> Result<&Employee, RegistryError> {
        let index = self.index_of(department)?;
        let dept = &self.departments[index];

        if dept.is_full() {
            return Err(rejected(RegistryError::HeadcountExceeded {
                name: dept.name.clone(),
                limit: dept.employee_limit,
            }));
        }

        let average = dept.average_salary();
        let within_limit = average
            .checked_add(salary)
            .is_some_and(|projected| projected <= dept.salary_limit);
        if !within_limit {
            return Err(rejected(RegistryError::SalaryLimitExceeded {
                name: dept.name.clone(),
                average,
                salary,
                limit: dept.salary_limit,
            }));
        }

        let code = DepartmentCode::derive(&dept.name).map_err(rejected)?;
        let number = code.prefix(employee_no);
        if dept.find_employee(&number).is_some() {
            return Err(rejected(RegistryError::DuplicateEmployeeNumber {
                department: dept.name.clone(),
                number,
            }));
        }

        debug!(department = %department, employee = %number, %salary, "employee added");
        let employees = &mut self.departments[index].employees;
        employees.push(Employee::new(number, full_name.into(), position.into(), salary));
        Ok(&employees[employees.len() - 1])
    }

    /// Removes the employee whose stored number equals `employee_no` exactly.
    pub fn remove_employee(
        &mut self,
        department: &DepartmentName,
        employee_no: &EmployeeNo,
    ) -> Result<Employee, RegistryError> {
        let index = self.index_of(department)?;
        let dept = &mut self.departments[index];
        let Some(position) = dept.position_of(employee_no) else {
            return Err(rejected(RegistryError::EmployeeNotFound {
                number: employee_no.clone(),
            }));
        };

        debug!(department = %department, employee = %employee_no, "employee removed");
        Ok(dept.employees.remove(position))
    }

    /// Overwrites name, salary and position of the first employee, across all
    /// departments in registry order, whose number equals `employee_no`.
    ///
    /// The number itself is never changed. Limits are not re-checked.
    pub fn edit_employee(
        &mut self,
        employee_no: &EmployeeNo,
        full_name: impl Into<String>,
        salary: Decimal,
        position: impl Into<String>,
    ) -> Result<&Employee, RegistryError> {
        let Some(employee) = self
            .departments
            .iter_mut()
            .find_map(|d| d.find_employee_mut(employee_no))
        else {
            return Err(rejected(RegistryError::EmployeeNotFound {
                number: employee_no.clone(),
            }));
        };

        employee.full_name = full_name.into();
        employee.salary = salary;
        employee.position = position.into();
        debug!(employee = %employee_no, %salary, "employee updated");
        Ok(&*employee)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn index_of(&self, name: &DepartmentName) -> Result<usize, RegistryError> {
        self.departments
            .iter()
            .position(|d| &d.name == name)
            .ok_or_else(|| {
                rejected(RegistryError::DepartmentNotFound { name: name.clone() })
            })
    }
}

fn rejected(err: RegistryError) -> RegistryError {
    debug!(error = %err, "operation rejected");
    err
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dept(name: &str) -> DepartmentName {
        DepartmentName::from(name)
    }

    fn no(n: &str) -> EmployeeNo {
        EmployeeNo::from(n)
    }

    #[test]
    fn new_registry_is_empty() {
        let reg = Registry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn add_department_appends_in_order() {
        let mut reg = Registry::new();
        reg.add_department(dept("Sales"), 3, dec!(1000)).unwrap();
        reg.add_department(dept("Engineering"), 3, dec!(1000)).unwrap();
        let names: Vec<_> = reg.departments().iter().map(|d| d.name().0.as_str()).collect();
        assert_eq!(names, ["Sales", "Engineering"]);
    }

    #[test]
    fn add_employee_returns_prefixed_record() {
        let mut reg = Registry::new();
        reg.add_department(dept("Engineering"), 3, dec!(5000)).unwrap();
        let employee = reg
            .add_employee(&dept("Engineering"), &no("01"), "Ada", "Engineer", dec!(1200))
            .unwrap();
        assert_eq!(employee.number(), &no("EN01"));
        assert_eq!(employee.full_name(), "Ada");
        assert_eq!(employee.position(), "Engineer");
        assert_eq!(employee.salary(), dec!(1200));
    }

    #[test]
    fn headcount_check_precedes_salary_check() {
        let mut reg = Registry::new();
        reg.add_department(dept("Ops"), 0, dec!(0)).unwrap();
        let err = reg
            .add_employee(&dept("Ops"), &no("01"), "A", "B", dec!(10))
            .unwrap_err();
        assert!(matches!(err, RegistryError::HeadcountExceeded { limit: 0, .. }));
    }

    #[test]
    fn salary_check_precedes_name_check() {
        let mut reg = Registry::new();
        reg.add_department(dept("X"), 5, dec!(100)).unwrap();
        let err = reg
            .add_employee(&dept("X"), &no("01"), "A", "B", dec!(500))
            .unwrap_err();
        assert!(matches!(err, RegistryError::SalaryLimitExceeded { .. }));

        let err = reg
            .add_employee(&dept("X"), &no("01"), "A", "B", dec!(50))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDepartmentName { .. }));
        assert!(reg.department(&dept("X")).unwrap().is_empty());
    }

    #[test]
    fn salary_overflow_counts_as_exceeded() {
        let mut reg = Registry::new();
        reg.add_department(dept("Big"), 5, Decimal::MAX).unwrap();
        reg.add_employee(&dept("Big"), &no("01"), "A", "B", Decimal::MAX)
            .unwrap();
        let err = reg
            .add_employee(&dept("Big"), &no("02"), "C", "D", Decimal::MAX)
            .unwrap_err();
        assert!(matches!(err, RegistryError::SalaryLimitExceeded { .. }));
    }

    #[test]
    fn average_after_edits_to_max_salary_stays_exact() {
        let mut reg = Registry::new();
        reg.add_department(dept("Big"), 5, Decimal::MAX).unwrap();
        reg.add_employee(&dept("Big"), &no("01"), "A", "B", dec!(1))
            .unwrap();
        reg.add_employee(&dept("Big"), &no("02"), "C", "D", dec!(1))
            .unwrap();
        reg.edit_employee(&no("BI01"), "A", Decimal::MAX, "B").unwrap();
        reg.edit_employee(&no("BI02"), "C", Decimal::MAX, "D").unwrap();

        let big = reg.department(&dept("Big")).unwrap();
        assert_eq!(big.average_salary(), Decimal::MAX);
    }

    #[test]
    fn remove_department_returns_it() {
        let mut reg = Registry::new();
        reg.add_department(dept("Sales"), 1, dec!(1)).unwrap();
        let removed = reg.remove_department(&dept("Sales")).unwrap();
        assert_eq!(removed.name(), &dept("Sales"));
        assert!(reg.is_empty());
    }

    #[test]
    fn edit_does_not_touch_number() {
        let mut reg = Registry::new();
        reg.add_department(dept("Sales"), 2, dec!(1000)).unwrap();
        reg.add_employee(&dept("Sales"), &no("7"), "Old", "Clerk", dec!(100))
            .unwrap();
        let edited = reg
            .edit_employee(&no("SA7"), "New", dec!(200), "Lead")
            .unwrap();
        assert_eq!(edited.number(), &no("SA7"));
        assert_eq!(edited.full_name(), "New");
        assert_eq!(edited.position(), "Lead");
        assert_eq!(edited.salary(), dec!(200));
    }
}
