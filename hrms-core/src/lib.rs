//! HR registry core library: entity types, the registry and its errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and the `Department` / `Employee` entities
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — [`Registry`] and every mutation on it
//!
//! This crate performs no I/O; rendering and input parsing live in `hrms-cli`.

pub mod error;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use registry::Registry;
pub use types::{Department, DepartmentCode, DepartmentName, Employee, EmployeeNo};
