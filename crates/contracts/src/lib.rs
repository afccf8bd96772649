//! Shared contracts between the frontend and the hosted backend services:
//! wire-level data model plus the pure filtering/aggregation logic that the
//! dashboard renders.

pub mod domain;
pub mod shared;
pub mod system;
