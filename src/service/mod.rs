//! Service layer for business logic.
//!
//! Services hold the decision logic the controllers delegate to: the
//! donation-shipment workflow, the logistics handler deletion guard,
//! notification updates, dashboard aggregation, the notice lifecycle, and
//! account registration/login. Pass-through CRUD goes straight from
//! controller to repository.

pub mod auth;
pub mod logistics;
pub mod metrics;
pub mod notice;
pub mod notification;
pub mod shipment;
