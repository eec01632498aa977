//! avi2mp4 - batch AVI to MP4 remuxing
//!
//! This library crate exposes the core functionality for integration testing.

pub mod batch;
pub mod config;
pub mod convert;
pub mod discover;
pub mod report;
