//! Medilink server application core.
//!
//! Backend for the hospital medication donation and exchange platform. This
//! crate contains HTTP routing, session-gated controllers, the donation to
//! shipment workflow, dashboard metric aggregation, the published-notice
//! lifecycle, and the scheduled expiry sweep.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
