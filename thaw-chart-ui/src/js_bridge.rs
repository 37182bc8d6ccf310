//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Chart.js glue lives in `assets/js/dashboard-charts.js` and is
//! evaluated as globals (no ES modules) once Chart.js itself has loaded.
//! Chart configs cross the bridge as JSON strings built by `thaw_core::chart`.

// Embed the chart glue at compile time
static DASHBOARD_CHARTS_JS: &str = include_str!("../assets/js/dashboard-charts.js");

/// Chart.js build loaded by the app shell.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[thaw] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install the chart glue once Chart.js is available. Safe to call again.
///
/// The glue is evaluated at global scope via indirect eval from inside the
/// polling callback, then its functions are promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__thawChartsReady) {{ window.__thawChartScripts = {}; }}",
        serde_json::to_string(DASHBOARD_CHARTS_JS).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__thawChartsReady || window.__thawChartsPolling) return;
            window.__thawChartsPolling = true;
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__thawChartScripts);
                    delete window.__thawChartScripts;
                    if (typeof renderThawChart !== 'undefined') window.renderThawChart = renderThawChart;
                    if (typeof destroyThawChart !== 'undefined') window.destroyThawChart = destroyThawChart;
                    window.__thawChartsReady = true;
                    window.__thawChartsPolling = false;
                    console.log('[thaw] charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Draw a chart into `canvas_id`, replacing any chart already there.
///
/// Waits for `init_charts` to finish; if the canvas is missing when the
/// glue runs, nothing is drawn.
pub fn render_chart(canvas_id: &str, config_json: &str) {
    call_js(&render_script(canvas_id, config_json));
}

/// Dispose of the chart drawn in `canvas_id`, if any, and drop a render
/// still waiting for Chart.js on that canvas.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&destroy_script(canvas_id));
}

// JSON-encoding a string yields a valid JS string literal
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Waiting renders live in `window.__thawPendingRenders`, one per canvas;
/// a newer render or a destroy on the same canvas cancels the older one.
fn render_script(canvas_id: &str, config_json: &str) -> String {
    let id = js_string(canvas_id);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            var pending = window.__thawPendingRenders = window.__thawPendingRenders || {{}};
            if (pending[{id}]) {{ clearInterval(pending[{id}]); delete pending[{id}]; }}
            var draw = function() {{
                try {{
                    window.renderThawChart({id}, {config});
                }} catch(e) {{ console.error('[thaw] renderThawChart error:', e); }}
            }};
            if (window.__thawChartsReady && typeof window.renderThawChart !== 'undefined') {{
                draw();
                return;
            }}
            var handle = setInterval(function() {{
                if (window.__thawChartsReady && typeof window.renderThawChart !== 'undefined') {{
                    clearInterval(handle);
                    if (pending[{id}] === handle) delete pending[{id}];
                    draw();
                }}
            }}, 100);
            pending[{id}] = handle;
        }})();
        "#,
    )
}

fn destroy_script(canvas_id: &str) -> String {
    let id = js_string(canvas_id);
    format!(
        r#"
        (function() {{
            var pending = window.__thawPendingRenders;
            if (pending && pending[{id}]) {{ clearInterval(pending[{id}]); delete pending[{id}]; }}
            if (typeof window.destroyThawChart !== 'undefined') window.destroyThawChart({id});
        }})();
        "#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_waits_without_a_deadline() {
        let script = render_script("lineChart", "{}");
        assert!(script.contains("setInterval"));
        assert!(!script.contains("attempts"));
    }

    #[test]
    fn render_replaces_a_pending_render_on_the_same_canvas() {
        let script = render_script("lineChart", "{}");
        let cancel = r#"if (pending["lineChart"]) { clearInterval(pending["lineChart"]); delete pending["lineChart"]; }"#;
        let register = r#"pending["lineChart"] = handle;"#;
        assert!(script.contains(cancel));
        assert!(script.contains(register));
        assert!(script.find(cancel) < script.find(register));
    }

    #[test]
    fn destroy_cancels_a_pending_render() {
        let script = destroy_script("barChart");
        assert!(script.contains(r#"clearInterval(pending["barChart"])"#));
        assert!(script.contains(r#"window.destroyThawChart("barChart")"#));
    }

    #[test]
    fn config_is_passed_as_a_string_literal() {
        let script = render_script("lineChart", r#"{"type":"line","label":"it's"}"#);
        assert!(script.contains(r#"window.renderThawChart("lineChart", "{\"type\":\"line\",\"label\":\"it's\"}")"#));
    }
}
