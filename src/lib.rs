//! # Sprout - SMART goal validation and epic generation
//!
//! Sprout scores free-form PI planning goals against the SMART rubric
//! (Specific, Measurable, Achievable, Relevant, Time-bound) and breaks
//! reviewed goals down into epics and features with effort estimates and
//! team assignments. Both engines are stateless, synchronous pure
//! functions over their inputs; the CLI is a thin shell around them.
//!
//! ## Quick Start
//!
//! ```bash
//! # Score a goals document
//! sprout validate goals.txt
//!
//! # Pipe text through stdin, get the full report as JSON
//! cat goals.txt | sprout validate - --json
//!
//! # Turn reviewed goals into epics and features
//! sprout generate goals.json --sequential-ids
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error types and result aliases
//! - [`generator`]: Epic/feature generation engine
//! - [`ids`]: Work item id generation
//! - [`model`]: Data models (goals, reports, epics, features)
//! - [`validator`]: SMART goal validation engine

/// Command-line interface definitions using clap.
pub mod cli;

/// Error types and result aliases.
///
/// Defines the `SproutError` enum and `Result<T>` type alias.
pub mod error;

/// Epic and feature generation engine.
///
/// Turns reviewed goal records into a two-level work breakdown.
pub mod generator;

/// Work item identifier generation.
pub mod ids;

pub mod logging;

/// Data models.
///
/// Includes `GoalRecord`, `ValidationReport`, `Epic`, and `Feature`.
pub mod model;

/// Text helpers shared by both engines.
pub mod text;

/// SMART goal validation engine.
///
/// Segments document text and scores goals against the SMART rubric.
pub mod validator;
