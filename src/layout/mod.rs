//! Conversion between the two Rust module layout conventions.
//!
//! In the 2018-style layout a module file `X.rs` sits beside a directory `X`
//! holding its submodules. In the 2015-style layout that file is renamed to
//! `mod.rs` and lives inside `X` itself. The nest pass converts a tree from
//! the former to the latter, the flatten pass goes the other way.

mod flatten;
mod nest;
mod walk;

pub use flatten::flatten_module_files;
pub use nest::nest_module_files;
pub use walk::ConvertError;

/// File name marking a directory as a module in the 2015-style layout.
pub const MOD_FILE_NAME: &str = "mod.rs";

/// Extension given to module files moved out to the 2018-style layout.
pub const MODULE_EXTENSION: &str = "rs";
