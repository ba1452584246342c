//! Command implementations for OxiGz CLI.

pub mod extract;
pub mod info;
pub mod target;

pub use extract::cmd_extract;
pub use info::cmd_info;
pub use target::cmd_target;
pub use test::cmd_test;
