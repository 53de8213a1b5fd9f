//! Database entities for the Medilink platform.
//!
//! Each module maps one table of the relational schema. The `shipment_state`
//! and `transport_method` tables are fixed catalogs seeded by migrations and
//! are never mutated at runtime.

pub mod prelude;

pub mod app_user;
pub mod donation;
pub mod hospital;
pub mod logistics_handler;
pub mod medication;
pub mod medication_request;
pub mod notice;
pub mod notification;
pub mod payment;
pub mod publication;
pub mod shipment;
pub mod shipment_state;
pub mod transport_method;
