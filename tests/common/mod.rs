//! Shared helpers for integration tests. Not every test binary uses every helper.
#![allow(dead_code)]

pub mod harness;
pub mod http_client;
pub mod stub_judge;
