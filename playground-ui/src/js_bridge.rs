//! Typed wrappers around ECharts interop via `js_sys::eval()`.
//!
//! The glue functions live in `assets/js/echarts-bridge.js` and are evaluated
//! as globals (no ES modules) once `window.echarts` exists. ECharts itself is
//! loaded from a `<script>` tag declared in the app's `Dioxus.toml`.

static ECHARTS_BRIDGE_JS: &str = include_str!("../assets/js/echarts-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('playground JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal. JSON string syntax is valid JS.
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Install the bridge once ECharts has loaded. Call once at app startup.
///
/// The bridge is stashed on `window` and evaluated with indirect eval so its
/// `function` declarations land at global scope, then promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__playgroundChartScripts = {};",
        js_string_literal(ECHARTS_BRIDGE_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForECharts = setInterval(function() {
                if (typeof echarts !== 'undefined') {
                    clearInterval(waitForECharts);
                    (0, eval)(window.__playgroundChartScripts);
                    delete window.__playgroundChartScripts;
                    if (typeof renderEChart !== 'undefined') window.renderEChart = renderEChart;
                    if (typeof disposeEChart !== 'undefined') window.disposeEChart = disposeEChart;
                    window.__playgroundChartsReady = true;
                    console.log('playground charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render (or re-render) a chart into the element with `container_id`.
///
/// Polls until the bridge is installed and the container exists, so it is
/// safe to call from an effect that runs before the first paint.
pub fn render_chart(container_id: &str, option_json: &str, config_json: &str) {
    let id = js_string_literal(container_id);
    let option = js_string_literal(option_json);
    let config = js_string_literal(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__playgroundChartsReady &&
                    typeof window.renderEChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderEChart({id}, {option}, {config});
                    }} catch(e) {{ console.error('[playground] renderEChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Dispose the ECharts instance and resize observer for `container_id`.
pub fn dispose_chart(container_id: &str) {
    call_js(&format!(
        "if (typeof window.disposeEChart !== 'undefined') window.disposeEChart({});",
        js_string_literal(container_id)
    ));
}
