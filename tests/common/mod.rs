//! Common test utilities for RentVix CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project, data and home directories plus CLI runners
//! - Fixtures: menu, feature and package payloads shaped like the REST API

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
