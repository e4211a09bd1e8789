//! Core of the electric-motorcycle campaign landing pages.
//!
//! The financing resolver, the savings calculator and the campaign resolver are
//! pure functions over immutable tables. Everything in [`api`] composes them for
//! the HTTP surface.

pub mod analytics;
pub mod api;
pub mod campaigns;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod financing;
pub mod leads;
pub mod savings;
pub mod telemetry;
