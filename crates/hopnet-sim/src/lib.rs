//! Hopnet Simulation Library
//!
//! This library provides the scenario layer for the hopnet CLI: loading
//! scenario files, executing them against a ring, and reporting outcomes.

pub mod scenario;
