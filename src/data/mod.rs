//! Repository layer: narrow per-aggregate query/write methods.
//!
//! Repositories are generic over `C: ConnectionTrait` so services can hand
//! them either the shared connection or an open transaction.

pub mod donation;
pub mod hospital;
pub mod logistics_handler;
pub mod metrics;
pub mod notice;
pub mod notification;
pub mod publication;
pub mod shipment;
pub mod shipment_state;
pub mod user;
