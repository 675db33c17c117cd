//! Filesystem-backed implementations of the app ports.

pub mod adapters;
pub mod config;
