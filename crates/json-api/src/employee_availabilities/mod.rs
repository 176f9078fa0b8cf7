//! Employee Availabilities

mod handlers;
mod models;

pub(crate) use handlers::*;
