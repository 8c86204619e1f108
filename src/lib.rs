//! Multi-function calculator service.
//!
//! The engine (unit conversion tables, date arithmetic, percentage math,
//! an arithmetic expression evaluator) and the in-memory calculation
//! history live under `core`; the `api` module exposes them over HTTP.

pub mod api;
pub mod config;
pub mod core;
pub mod shared;
