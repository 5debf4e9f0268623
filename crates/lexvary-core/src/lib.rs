//! Shared types for lexvary.
//!
//! This crate has no I/O. It holds what both the generation engine and
//! the command line need to agree on:
//!
//! - [`options`] -- the fixed-shape option record and flag names
//! - [`error`] -- input validation and [`VariationError`]
//! - [`tables`] -- accent, leet, abbreviation, synonym and symbol tables
//! - [`character`] -- character-level substitutions and collapsing
//! - [`case`] -- lower, upper, capitalized and title casing

pub mod case;
pub mod character;
pub mod error;
pub mod options;
pub mod tables;

pub use error::{VariationError, validate_input};
pub use options::{OptionFlag, VariationOptions};
