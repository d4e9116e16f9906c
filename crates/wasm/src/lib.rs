//! Browser bridge for the report view controller.
//!
//! The report markup calls these exports from its `onclick` / `onmouseover`
//! attributes. Each export runs the matching controller operation and
//! applies the returned commands to the page.

pub mod dom;

use std::sync::Mutex;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wet_report_core::controller::highlight::{highlight_target, plan_highlight};
use wet_report_core::{ReportConfig, ReportController};
use wet_report_protocol::DomCommand;

static CONTROLLER: Mutex<Option<ReportController>> = Mutex::new(None);

fn with_controller<T>(f: impl FnOnce(&mut ReportController) -> T) -> Result<T, JsValue> {
    let mut guard = CONTROLLER
        .lock()
        .map_err(|_| JsError::new("report state lock poisoned"))?;
    let controller = guard
        .as_mut()
        .ok_or_else(|| JsError::new("report controller not initialised, call init() first"))?;
    Ok(f(controller))
}

/// Run an operation and apply its commands with the lock released.
fn run(f: impl FnOnce(&mut ReportController) -> Vec<DomCommand>) -> Result<(), JsValue> {
    let (commands, config) = with_controller(|c| (f(c), c.config().clone()))?;
    dom::apply(&dom::window()?, &config, &commands);
    Ok(())
}

/// Configuration of the running controller, or the defaults when the page
/// never called `init` (a report loaded inside another report's preview).
fn current_config() -> Result<ReportConfig, JsValue> {
    let guard = CONTROLLER
        .lock()
        .map_err(|_| JsError::new("report state lock poisoned"))?;
    Ok(guard
        .as_ref()
        .map_or_else(ReportConfig::default, |c| c.config().clone()))
}

fn log_error(context: &str, err: &JsValue) {
    web_sys::console::error_2(&JsValue::from_str(context), err);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = dom::window()?;
    let hook = Closure::<dyn FnMut()>::new(|| {
        if let Err(e) = highlight() {
            log_error("wet-report: highlight failed", &e);
        }
    });
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(dom::HIGHLIGHT_HOOK),
        hook.as_ref().unchecked_ref(),
    )?;
    hook.forget();
    Ok(())
}

/// Capture the page and build the controller.
///
/// `config_json` overrides element ids, overlay placement and highlight
/// styling; omitted fields keep their defaults.
#[wasm_bindgen]
pub fn init(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => ReportConfig::from_json(&json).map_err(|e| JsError::new(&e.to_string()))?,
        None => ReportConfig::default(),
    };
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let snapshot = dom::snapshot(&document, &config);

    let hide = Closure::<dyn FnMut()>::new(|| {
        if let Err(e) = hide_preview() {
            log_error("wet-report: hide preview failed", &e);
        }
    });
    dom::set_hide_preview_handler(hide.as_ref().unchecked_ref::<js_sys::Function>().clone());
    hide.forget();

    if let Some(frame) = dom::preview_frame(&document, &config) {
        let loaded = Closure::<dyn FnMut()>::new(|| {
            if let Err(e) = overlay_loaded() {
                log_error("wet-report: preview placement failed", &e);
            }
        });
        frame.set_onload(Some(loaded.as_ref().unchecked_ref()));
        loaded.forget();
    }

    let controller = ReportController::new(config, &snapshot);
    let mut guard = CONTROLLER
        .lock()
        .map_err(|_| JsError::new("report state lock poisoned"))?;
    *guard = Some(controller);
    Ok(())
}

/// The page as captured at `init`, re-read now, as JSON.
#[wasm_bindgen(js_name = pageSnapshot)]
pub fn page_snapshot() -> Result<String, JsValue> {
    let config = with_controller(|c| c.config().clone())?;
    let window = dom::window()?;
    let snapshot = dom::snapshot(&dom::document(&window)?, &config);
    serde_json::to_string(&snapshot).map_err(|e| JsError::new(&e.to_string()).into())
}

#[wasm_bindgen(js_name = toggleSection)]
pub fn toggle_section(icon_id: &str, section_id: &str) -> Result<(), JsValue> {
    run(|c| c.toggle_section(icon_id, section_id))
}

/// `pairs` alternates icon ids and section ids: `[icon, section, icon, ...]`.
#[wasm_bindgen(js_name = toggleAllSections)]
pub fn toggle_all_sections(trigger_id: &str, pairs: Vec<String>) -> Result<(), JsValue> {
    let pairs: Vec<(&str, &str)> = pairs
        .chunks_exact(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();
    run(|c| c.toggle_all_sections(trigger_id, &pairs))
}

#[wasm_bindgen(js_name = revealSection)]
pub fn reveal_section(section_id: &str) -> Result<(), JsValue> {
    run(|c| c.reveal_section(section_id))
}

#[wasm_bindgen(js_name = switchOverview)]
pub fn switch_overview(trigger_id: &str) -> Result<(), JsValue> {
    run(|c| c.switch_overview(trigger_id))
}

/// Hide table `hide_id` and show the other one. Ids other than the
/// configured summary / detailed table ids change nothing.
#[wasm_bindgen(js_name = switchTables)]
pub fn switch_tables(hide_id: &str, force: bool) -> Result<(), JsValue> {
    run(|c| {
        let Some(hide) = c.table_by_id(hide_id) else {
            return Vec::new();
        };
        c.switch_tables(hide, hide.other(), force)
    })
}

#[wasm_bindgen(js_name = showAllRows)]
pub fn show_all_rows() -> Result<(), JsValue> {
    run(ReportController::show_all_rows)
}

#[wasm_bindgen(js_name = hideSuccessfulRows)]
pub fn hide_successful_rows() -> Result<(), JsValue> {
    run(ReportController::hide_successful_rows)
}

/// Preview `src` next to the element that raised `event`.
#[wasm_bindgen(js_name = showPreview)]
pub fn show_preview(event: &web_sys::Event, src: &str) -> Result<(), JsValue> {
    let Some(anchor) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return Ok(());
    };
    let anchor = dom::client_rect(&anchor);
    let viewport = dom::viewport(&dom::window()?)?;
    run(|c| c.show_preview(src, anchor, &viewport))
}

#[wasm_bindgen(js_name = hidePreview)]
pub fn hide_preview() -> Result<(), JsValue> {
    run(ReportController::hide_preview)
}

fn overlay_loaded() -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let viewport = dom::viewport(&window)?;
    run(|c| {
        let config = c.config().clone();
        c.overlay_loaded(&viewport, || dom::measure_preview(&document, &config))
    })
}

/// Emphasize the element named by the `highlight` query parameter after
/// the configured settle delay. Works without `init`.
#[wasm_bindgen]
pub fn highlight() -> Result<(), JsValue> {
    let delay = current_config()?.highlight.delay_ms;
    let window = dom::window()?;
    let callback = Closure::once_into_js(|| {
        if let Err(e) = run_highlight() {
            log_error("wet-report: highlight failed", &e);
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(delay).unwrap_or(i32::MAX),
    )?;
    Ok(())
}

fn run_highlight() -> Result<(), JsValue> {
    let config = current_config()?;
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let limit = config.highlight.ancestor_depth_limit;
    let contexts = dom::location_contexts(&window, limit.saturating_add(1));

    let Some(selector) = highlight_target(&config.highlight, &contexts) else {
        return Ok(());
    };
    let Some(element) = document.query_selector(&selector).ok().flatten() else {
        return Ok(());
    };
    let layout = dom::element_layout(&window, &element);
    let commands = plan_highlight(&config.highlight, &selector, &layout);
    dom::apply(&window, &config, &commands);
    Ok(())
}
