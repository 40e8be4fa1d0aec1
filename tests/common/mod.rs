//! Shared test utilities for faqs integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Timer-driven harnesses run under
//! `#[tokio::test(start_paused = true)]` and move the clock with
//! `tokio::time::advance`.

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
