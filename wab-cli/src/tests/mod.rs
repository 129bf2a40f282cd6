//! Shared test harness modules for the `wab` CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod render_steps;
mod render_unit;
