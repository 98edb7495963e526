//! Domain logic for the cinedex movie catalog.
//!
//! Pure types and functions shared by the database and API crates:
//! the error taxonomy, ID aliases, and pagination arithmetic. This crate
//! performs no I/O.

pub mod error;
pub mod pagination;
pub mod types;
