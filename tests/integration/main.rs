//! Integration test suite

mod cli_test;
mod config_test;
mod helpers;
mod sync_scenario_test;
