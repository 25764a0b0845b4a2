//! Share a pool of tips between employees in proportion to the hours each
//! worked over a range of months.
//!
//! `core` holds the allocation engine and the employee table format,
//! `cmd` the command-line subcommands built on it.

pub mod cmd;
pub mod core;
