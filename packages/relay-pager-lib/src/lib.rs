//! # relay-pager-lib
//!
//! `relay-pager-lib` is a collection of utilities used by the various `relay-pager-*` crates.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod defaults;
pub mod utils;
