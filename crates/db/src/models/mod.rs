//! Row models returned by the repository layer.
//!
//! Each submodule contains a `Serialize` entity struct matching the
//! database row, mapped explicitly column-by-column rather than derived.

pub mod movie;
