//! Dioxus components, HTTP source and Chart.js bridge for the thawing
//! dashboard.
//!
//! This crate provides:
//! - `api`: `DashboardSource` over the browser `fetch` API
//! - `js_bridge`: Rust wrappers for the Chart.js glue via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `actions`: spawned refresh/upload tasks guarded by request tokens
//! - `components`: RSX components for every dashboard panel

pub mod actions;
pub mod api;
pub mod components;
pub mod js_bridge;
pub mod state;
