//! # Atlas Analytics Engine
//!
//! This crate is the logical core of the dashboard: the filter engine and the
//! aggregation engine that turn the raw sales table plus a unit selection into
//! the derived tables every visualization consumes.
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** no I/O, no knowledge of HTTP or the terminal. It
//!   depends only on `core-types`.
//! - **Stateless derivation:** the `AnalyticsEngine` holds no dataset. Every
//!   call receives the (already filtered) records explicitly and recomputes
//!   its output from scratch; there is no cache and no shared mutable state
//!   between requests.
//!
//! ## Public API
//!
//! - `filter`: applies a `FilterSelection` to a record slice, order-preserving.
//! - `AnalyticsEngine`: the eleven derivation operations, the summary
//!   metrics, and the composed `DashboardReport`.
//! - The report structs in `report`: the serializable payloads handed to any
//!   presentation layer.

pub mod engine;
pub mod filter;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use filter::filter;
pub use report::{
    CountryYearRate, DashboardReport, GroupTotal, Heatmap, PieSlice, RankedEntry, SummaryMetrics,
    TrendPoint,
};
