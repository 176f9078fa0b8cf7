//! Employee Repositories

mod availabilities;
mod employees;

pub(crate) use availabilities::PgEmployeeAvailabilitiesRepository;
pub(crate) use employees::PgEmployeesRepository;
