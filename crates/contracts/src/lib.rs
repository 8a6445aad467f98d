//! Shared contracts between the dashboard frontend and the remote REST API.
//!
//! Besides plain DTOs this crate hosts the pure part of the list/chart query
//! coordinator (`shared::query`), so it can be unit-tested without a browser.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
