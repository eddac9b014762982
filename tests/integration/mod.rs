//! Integration tests for the storytally report
//!
//! These tests run the compiled binary against temporary story directories
//! and check the report it prints.

pub mod cli_report;
