//! Boundary adapters. Currently a single HTTP interface.

pub mod http;
