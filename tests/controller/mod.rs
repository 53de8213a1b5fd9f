//! Tests for HTTP controller endpoints.
//!
//! Controllers are exercised directly with an in-memory database and
//! session, asserting status codes and the resulting database state.

mod auth;
mod dashboard;
mod logistics;
mod notice;
mod notification;
mod shipment;
