//! # sensorboard-app
//!
//! Application layer: the polling controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the HTTP adapter implements:
//!   - `SensorApi`: fetch the fleet snapshot and a device's history
//! - Own the single [`state::DashboardState`] and mutate it through
//!   [`controller::DashboardController`]:
//!   - `refresh_fleet`: fleet timer tick
//!   - `select_device`: row click
//!   - `refresh_history`: history timer tick
//! - Gate each endpoint with [`request_gate::RequestGate`] so overlapping
//!   responses can never be applied out of order
//! - Load and validate [`config::DashboardConfig`]
//!
//! ## Dependency rule
//! Depends on `sensorboard-domain` only. Never imports adapter crates.
//! The controller is single-threaded by construction (browser event loop),
//! so ports do not require `Send`.

pub mod config;
pub mod controller;
pub mod ports;
pub mod request_gate;
pub mod state;
