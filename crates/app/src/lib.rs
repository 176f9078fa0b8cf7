//! Shared rostering domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod storage;

#[cfg(test)]
mod test;
