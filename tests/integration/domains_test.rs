//! Per-domain integration tests against a live PostgreSQL database
//!
//! Run with `cargo test -p caredesk-integration-tests -- --ignored` once
//! `TEST_DATABASE_URL` points at a disposable database.

mod common;
mod conversations;
mod documents;
mod escalations;
mod messages;
mod users;
