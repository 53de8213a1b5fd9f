//! Tests for service-layer business logic against an in-memory database.

mod metrics;
