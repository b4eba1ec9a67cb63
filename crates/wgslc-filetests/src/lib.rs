//! File-based tests for the Metal backend.
//!
//! Similar to Cranelift's filetests, `.msl` files under `filetests/` contain:
//! - a test command (`test emit`)
//! - `fixture <name>` sections naming a module built by [`fixtures`]
//! - expectations in `;` comments after each section: filecheck directives,
//!   `entry <stage> <name>` lines, or a single `error: <text>` line
//!
//! The [`reader`] module parses emitted Metal literals and brace
//! initializers back into values so round-trip properties can be checked.

pub mod filecheck;
pub mod fixtures;
pub mod parser;
pub mod reader;
pub mod test_emit;

pub use filecheck::{build_filechecker, match_filecheck};
pub use fixtures::{fixture, FIXTURE_NAMES};
pub use parser::{parse_test_file, TestCase};
pub use reader::{parse_aggregate, parse_literal, Element, MetalLiteral, ReadError};
pub use test_emit::run_tests_from_file;
