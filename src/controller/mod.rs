//! HTTP request handlers.
//!
//! Controllers validate request bodies, gate protected routes on the
//! session, and delegate to the service or data layer. Response shaping
//! stays here; business rules live in [`crate::service`].

pub mod auth;
pub mod dashboard;
pub mod donation;
pub mod hospital;
pub mod logistics;
pub mod notice;
pub mod notification;
pub mod publication;
pub mod shipment;
pub mod util;
