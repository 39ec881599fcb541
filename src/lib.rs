// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

pub use markdown_kit_core::{VERSION_NUMBER, VERSION_STRING as VERSION};
