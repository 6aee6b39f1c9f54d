//! Marquee - caching discovery proxy for TMDB
//!
//! This library crate exposes the core functionality for integration testing.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod server;
pub mod tmdb;
