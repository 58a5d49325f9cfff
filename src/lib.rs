//! Self-assessment service for Edge AI career readiness.
//!
//! The [`assessment`] module carries the question catalog, response intake,
//! scoring engine, and report composition; [`config`] and [`telemetry`] wire
//! the surrounding service the same way for every entry point.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
