//! Integration tests

mod calculator_test;
mod config_test;
mod record_test;
