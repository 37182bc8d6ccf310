//! Spawned tasks that fetch and write results into `AppState`.
//!
//! Every task takes a ticket before it starts and only writes its result
//! if that ticket is still the newest for its panel.

use crate::api::HttpSource;
use crate::state::AppState;
use dioxus::prelude::*;
use log::{debug, error};
use thaw_core::chart;
use thaw_core::kpi;
use thaw_core::sequence::RequestSequence;
use thaw_core::upload::{self, UploadView};
use web_sys::File;

/// Fetch `/api/lotes/{sku}` and update the KPI cards.
pub fn refresh_kpis(mut state: AppState, source: HttpSource, tokens: RequestSequence, sku: String) {
    let ticket = tokens.issue();
    spawn(async move {
        let texts = kpi::refresh(&source, &sku).await;
        if tokens.is_current(ticket) {
            state.kpi.set(texts);
        } else {
            debug!("Discarding stale KPI response for SKU {}", sku);
        }
    });
}

/// Fetch `/api/dashboard` and replace the chart set.
pub fn refresh_charts(mut state: AppState, source: HttpSource, tokens: RequestSequence) {
    let ticket = tokens.issue();
    state.charts_loading.set(true);
    spawn(async move {
        let outcome = chart::load_charts(&source).await;
        if !tokens.is_current(ticket) {
            debug!("Discarding stale dashboard response");
            return;
        }
        match outcome {
            Ok(set) => {
                state.error_msg.set(None);
                state.charts.set(Some(set));
            }
            Err(e) => {
                error!("Failed to load dashboard data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Não foi possível carregar os gráficos. {}", e)));
                state.charts.set(None);
            }
        }
        state.charts_loading.set(false);
    });
}

/// Post the chosen file to `/predict`; with no file only the message changes.
pub fn submit_upload(mut state: AppState, source: HttpSource, tokens: RequestSequence, file: Option<File>) {
    let ticket = tokens.issue();
    if file.is_some() {
        state.upload.set(UploadView::Pending);
    }
    spawn(async move {
        let view = upload::submit(&source, file).await;
        if tokens.is_current(ticket) {
            state.upload.set(view);
        } else {
            debug!("Discarding stale upload response");
        }
    });
}
