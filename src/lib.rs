//! Ranked industry/buzzword bar charts from company CSV exports.
//!
//! The pipeline runs strictly forward:
//! CSV → [`data::loader`] → [`data::columns`] → [`data::aggregate`] →
//! [`data::rank`] → [`format`] → [`chart`].

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod format;
pub mod state;
pub mod ui;
