//! # sensorboard-domain
//!
//! Pure domain model for the sensorboard air-quality dashboard.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions, timestamps
//! - Decode and validate the **fleet snapshot** and **device history** payloads
//! - Map devices to their mounting **position**
//! - Build **table rows**, including the staleness flag
//! - Track the **selection** and the seven **chart handles**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod chart;
pub mod device;
pub mod history;
pub mod metric;
pub mod reading;
pub mod selection;
pub mod table;
