//! Reading the live page and applying controller commands to it.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, HtmlIFrameElement, HtmlImageElement,
    ScrollBehavior, ScrollToOptions, Window,
};
use wet_report_core::ReportConfig;
use wet_report_core::color;
use wet_report_core::controller::ElementLayout;
use wet_report_core::model::{IconSnapshot, PageSnapshot, SectionSnapshot};
use wet_report_protocol::{DomCommand, ElementRef, Point, Rect, ScrollOffsets, Viewport};

/// Window property a report page exposes its highlight entry point under,
/// so a parent page can trigger it inside the preview frame.
pub const HIGHLIGHT_HOOK: &str = "wetReportHighlight";

thread_local! {
    /// Hides the preview; bound to the preview document's pointer events.
    static HIDE_PREVIEW: RefCell<Option<js_sys::Function>> = const { RefCell::new(None) };
}

pub fn set_hide_preview_handler(handler: js_sys::Function) {
    HIDE_PREVIEW.with(|cell| *cell.borrow_mut() = Some(handler));
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsError::new("no window").into())
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsError::new("no document").into())
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn preview_frame(document: &Document, config: &ReportConfig) -> Option<HtmlIFrameElement> {
    document
        .get_element_by_id(&config.ids.preview)
        .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok())
}

fn px(style: &CssStyleDeclaration, property: &str) -> f64 {
    style
        .get_property_value(property)
        .ok()
        .and_then(|v| v.trim().trim_end_matches("px").parse().ok())
        .unwrap_or(0.0)
}

fn is_displayed(element: &HtmlElement) -> bool {
    element
        .style()
        .get_property_value("display")
        .is_ok_and(|display| display != "none")
}

pub fn viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let body = window.document().and_then(|d| d.body());
    let scroll = ScrollOffsets {
        page_x: window.page_x_offset().unwrap_or(0.0),
        page_y: window.page_y_offset().unwrap_or(0.0),
        body_left: body.as_ref().map_or(0.0, |b| f64::from(b.scroll_left())),
        body_top: body.as_ref().map_or(0.0, |b| f64::from(b.scroll_top())),
    };
    Ok(Viewport::new(width, height).with_scroll(scroll))
}

pub fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Capture toggle icons, their sections and the active overview table.
pub fn snapshot(document: &Document, config: &ReportConfig) -> PageSnapshot {
    let mut snapshot = PageSnapshot::default();
    let images = document.get_elements_by_tag_name("img");
    for i in 0..images.length() {
        let Some(img) = images
            .item(i)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        let id = img.id();
        if id.is_empty() {
            continue;
        }
        if let Some(section_id) = id.strip_prefix(&config.ids.section_icon_prefix)
            && let Some(section) = html_element(document, section_id)
        {
            snapshot.sections.push(SectionSnapshot {
                id: section_id.to_string(),
                visible: is_displayed(&section),
            });
        }
        snapshot.icons.push(IconSnapshot { id, src: img.src() });
    }
    snapshot.detailed_overview_visible =
        html_element(document, &config.ids.detailed_overview).is_some_and(|t| is_displayed(&t));
    snapshot
}

/// Search strings of this document and its enclosing frames, innermost first.
///
/// Stops at the top window, at a cross-origin parent, or after `limit` entries.
pub fn location_contexts(window: &Window, limit: usize) -> Vec<String> {
    let mut contexts = Vec::new();
    let mut current = window.clone();
    while contexts.len() < limit {
        let Ok(search) = current.location().search() else {
            break;
        };
        contexts.push(search);
        match current.parent() {
            Ok(Some(parent)) if parent != current => current = parent,
            _ => break,
        }
    }
    contexts
}

/// Border plus padding on each axis, from the computed style.
fn chrome(style: &CssStyleDeclaration) -> (f64, f64) {
    let sum = |props: [&str; 4]| props.iter().map(|p| px(style, p)).sum::<f64>();
    (
        sum([
            "border-left-width",
            "border-right-width",
            "padding-left",
            "padding-right",
        ]),
        sum([
            "border-top-width",
            "border-bottom-width",
            "padding-top",
            "padding-bottom",
        ]),
    )
}

pub fn element_layout(window: &Window, element: &Element) -> ElementLayout {
    let border_box = client_rect(element);
    let style = window.get_computed_style(element).ok().flatten();
    let (background, (chrome_x, chrome_y)) = match &style {
        Some(style) => (
            style
                .get_property_value("background-color")
                .ok()
                .and_then(|v| color::parse_css_color(&v)),
            chrome(style),
        ),
        None => (None, (0.0, 0.0)),
    };
    let origin = viewport(window).map_or(Point::new(0.0, 0.0), |vp| vp.scroll.origin());

    ElementLayout {
        tag_name: element.tag_name(),
        input_type: element.get_attribute("type"),
        background,
        border_box,
        // clientWidth is 0 for inline boxes, so derive the content box from
        // the border box instead.
        content_width: (border_box.w - chrome_x).max(0.0),
        content_height: (border_box.h - chrome_y).max(0.0),
        page_offset: Point::new(border_box.x + origin.x, border_box.y + origin.y),
        contains_image: element.query_selector("img").ok().flatten().is_some(),
    }
}

fn for_each_target(
    document: &Document,
    target: &ElementRef,
    mut f: impl FnMut(&Element) -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(&target.selector())?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            f(&element)?;
        }
    }
    Ok(())
}

fn selected(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn ensure_min_margin(window: &Window, element: &HtmlElement, min: f64) -> Result<(), JsValue> {
    let Some(computed) = window.get_computed_style(element)? else {
        return Ok(());
    };
    for side in ["margin-top", "margin-right", "margin-bottom", "margin-left"] {
        if px(&computed, side) < min {
            element.style().set_property(side, &format!("{min}px"))?;
        }
    }
    Ok(())
}

fn highlight_in_frame(frame: &HtmlIFrameElement) -> Result<(), JsValue> {
    let Some(frame_window) = frame.content_window() else {
        return Ok(());
    };
    let hook = js_sys::Reflect::get(&frame_window, &JsValue::from_str(HIGHLIGHT_HOOK))?;
    if let Ok(hook) = hook.dyn_into::<js_sys::Function>() {
        hook.call0(&frame_window)?;
    }
    Ok(())
}

/// Apply commands in order.
///
/// Commands addressing missing elements are skipped. A failing command is
/// reported to the console and the rest of the batch still runs.
pub fn apply(window: &Window, config: &ReportConfig, commands: &[DomCommand]) {
    let document = match document(window) {
        Ok(document) => document,
        Err(e) => {
            web_sys::console::error_2(&JsValue::from_str("wet-report: no document"), &e);
            return;
        }
    };
    for command in commands {
        if let Err(e) = apply_one(window, &document, config, command) {
            web_sys::console::error_2(
                &JsValue::from_str(&format!("wet-report: {command:?} failed")),
                &e,
            );
        }
    }
}

fn apply_one(
    window: &Window,
    document: &Document,
    config: &ReportConfig,
    command: &DomCommand,
) -> Result<(), JsValue> {
    match command {
        DomCommand::SetDisplay { id, visible } => {
            if let Some(el) = html_element(document, id) {
                el.style()
                    .set_property("display", if *visible { "" } else { "none" })?;
            }
        }
        DomCommand::SetImageSource { id, src } => {
            if let Some(img) = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                img.set_src(src);
            }
        }
        DomCommand::AddClass { target, class } => {
            for_each_target(document, target, |el| el.class_list().add_1(class))?;
        }
        DomCommand::RemoveClass { target, class } => {
            for_each_target(document, target, |el| el.class_list().remove_1(class))?;
        }
        DomCommand::NavigateOverlay { url } => {
            if let Some(frame_window) =
                preview_frame(document, config).and_then(|f| f.content_window())
            {
                frame_window.location().replace(url)?;
            }
        }
        DomCommand::PlaceOverlay { position } => {
            if let Some(frame) = preview_frame(document, config) {
                let style = frame.style();
                style.set_property("left", &format!("{}px", position.x))?;
                style.set_property("top", &format!("{}px", position.y))?;
            }
        }
        DomCommand::ShowOverlay | DomCommand::HideOverlay => {
            if let Some(frame) = preview_frame(document, config) {
                let display = if matches!(command, DomCommand::ShowOverlay) {
                    "block"
                } else {
                    "none"
                };
                frame.style().set_property("display", display)?;
            }
        }
        DomCommand::BindOverlayHover => {
            let frame_doc = preview_frame(document, config).and_then(|f| f.content_document());
            if let Some(frame_doc) = frame_doc {
                HIDE_PREVIEW.with(|cell| {
                    let handler = cell.borrow();
                    frame_doc.set_onmouseout(handler.as_ref());
                    frame_doc.set_onmouseover(handler.as_ref());
                });
            }
        }
        DomCommand::HighlightInOverlay => {
            if let Some(frame) = preview_frame(document, config) {
                highlight_in_frame(&frame)?;
            }
        }
        DomCommand::ApplyGlow { selector, glow } => {
            if let Some(el) = selected(document, selector) {
                let shadow = glow.to_box_shadow(config.highlight.accent(glow.accent));
                el.style().set_property("box-shadow", &shadow)?;
            }
        }
        DomCommand::ApplyGlowToFirstImage { selector, glow } => {
            let img = selected(document, selector)
                .and_then(|el| el.query_selector("img").ok().flatten())
                .and_then(|img| img.dyn_into::<HtmlElement>().ok());
            if let Some(img) = img {
                let shadow = glow.to_box_shadow(config.highlight.accent(glow.accent));
                img.style().set_property("box-shadow", &shadow)?;
            }
        }
        DomCommand::EnsureMinMargin { selector, px } => {
            if let Some(el) = selected(document, selector) {
                ensure_min_margin(window, &el, *px)?;
            }
        }
        DomCommand::ScrollTo { position, smooth } => {
            let options = ScrollToOptions::new();
            options.set_left(position.x);
            options.set_top(position.y);
            options.set_behavior(if *smooth {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Auto
            });
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    Ok(())
}

/// Make the preview frame visible and measure its rendered height.
pub fn measure_preview(document: &Document, config: &ReportConfig) -> f64 {
    let Some(frame) = preview_frame(document, config) else {
        return 0.0;
    };
    if frame.style().set_property("display", "block").is_err() {
        return 0.0;
    }
    frame.get_bounding_client_rect().height()
}
