//! Integration test harness.

mod cli_test;
mod flow_test;
mod sequencer_test;
