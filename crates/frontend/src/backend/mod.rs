//! Thin client for the hosted backend services: one authentication endpoint
//! and one realtime document store. Nothing here owns data; the store is
//! read-only from this application's point of view.

pub mod auth;
pub mod config;
pub mod connection;
pub mod store;

pub use connection::{backend, Backend};
pub use store::Subscription;
