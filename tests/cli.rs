//! Command-line test suite for the `mdkit` binary.

#[path = "cli/conversion_tests.rs"]
mod conversion_tests;
#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
