//! Session-stored values.

pub mod user;
