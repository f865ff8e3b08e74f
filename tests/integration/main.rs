//! Integration tests for fpb

mod helpers;

mod cli_test;
#[cfg(unix)]
mod supervisor_test;
