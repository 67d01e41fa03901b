//! # prewarn-core
//!
//! Core types, ID generation, and error types for Prewarn.
//!
//! This crate provides the foundational types shared across all Prewarn crates:
//! - The fixed set of habit categories and their display metadata
//! - Log entries and risk predictions
//! - The JSON contract expected from the external forecasting model
//! - ID generation
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;

pub use entities::{LogEntry, RiskAssessment, RiskPrediction};
pub use enums::{CategoryMeta, HabitCategory, RiskLevel};
pub use errors::CoreError;
