//! Scheduled background jobs.

pub mod cron;
