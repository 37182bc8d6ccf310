//! Client-side core of the thawing dashboard.
//!
//! Everything here is plain Rust so it builds and tests natively; the
//! browser crates only wire these values into Dioxus signals and the
//! Chart.js bridge.
//!
//! - `models`: wire payloads of the backend endpoints
//! - `format` / `kpi`: KPI card text
//! - `chart` / `accuracy`: Chart.js configs and forecast error metrics
//! - `calendar`: month grid generation and severity filtering
//! - `upload`: prediction upload outcome
//! - `source`: the data-source seam implemented over HTTP by the web crate
//! - `sequence`: latest-response-wins request tokens

pub mod accuracy;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod kpi;
pub mod models;
pub mod sequence;
pub mod source;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;
