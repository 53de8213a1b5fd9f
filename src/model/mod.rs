//! Wire DTOs and shared request-scoped models.
//!
//! Field names on the wire are Spanish, matching the public API contract;
//! camelCase fields use serde renames. All identifiers are plain JSON
//! numbers and all dates ISO-8601 strings.

pub mod api;
pub mod app;
pub mod auth;
pub mod donation;
pub mod hospital;
pub mod logistics;
pub mod metrics;
pub mod notice;
pub mod notification;
pub mod publication;
pub mod session;
pub mod shipment;
