//! One-shot host health probe.
//!
//! A cycle reads aggregate CPU, memory, disk and per-process CPU usage once
//! and records a warning for each reading above its threshold.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
