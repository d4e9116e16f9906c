//! Browser tests: `wasm-pack test --headless --firefox crates/wasm`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlIFrameElement, HtmlImageElement, Window};
use wet_report_core::ReportConfig;
use wet_report_core::controller::highlight::plan_highlight;
use wet_report_protocol::{DomCommand, ElementRef, Point};
use wet_report_wasm::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn element(id: &str) -> Element {
    document().get_element_by_id(id).unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn mount(html: &str) {
    document().body().unwrap().set_inner_html(html);
}

fn display(id: &str) -> String {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn icon_src(id: &str) -> String {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlImageElement>()
        .unwrap()
        .src()
}

const PAGE: &str = r#"
    <img id="overviewswitcher" src="images/collapse-square.png">
    <img id="expandAll" src="images/collapse-square.png">
    <table id="summaryoverview"></table>
    <table id="detailedoverview" style="display: none"></table>
    <img id="showHide_a" src="images/collapse-square.png">
    <div id="a">section a</div>
    <img id="showHide_b" src="images/expand-square.png">
    <div id="b" style="display: none">section b</div>
    <button id="showAll" class="hidden"></button>
    <button id="hideSuccessful"></button>
    <div class="successful"></div>
"#;

#[wasm_bindgen_test]
fn toggles_section_and_icon() {
    mount(PAGE);
    wet_report_wasm::init(None).unwrap();

    wet_report_wasm::toggle_section("showHide_a", "a").unwrap();
    assert_eq!(display("a"), "none");
    assert!(icon_src("showHide_a").ends_with("images/expand-square.png"));

    wet_report_wasm::reveal_section("b").unwrap();
    assert_eq!(display("b"), "");
    assert!(icon_src("showHide_b").ends_with("images/collapse-square.png"));
}

#[wasm_bindgen_test]
fn overview_switch_keeps_one_table() {
    mount(PAGE);
    wet_report_wasm::init(None).unwrap();

    wet_report_wasm::switch_overview("overviewswitcher").unwrap();
    assert_eq!(display("summaryoverview"), "");
    assert_eq!(display("detailedoverview"), "none");
}

#[wasm_bindgen_test]
fn row_filter_swaps_controls() {
    mount(PAGE);
    wet_report_wasm::init(None).unwrap();

    wet_report_wasm::hide_successful_rows().unwrap();
    let show_all = element("showAll");
    let hide = element("hideSuccessful");
    let row = document().query_selector(".successful").unwrap().unwrap();
    assert!(!show_all.class_list().contains("hidden"));
    assert!(hide.class_list().contains("hidden"));
    assert!(row.class_list().contains("hidden"));

    wet_report_wasm::show_all_rows().unwrap();
    assert!(show_all.class_list().contains("hidden"));
    assert!(!hide.class_list().contains("hidden"));
    assert!(!row.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn toggle_all_takes_flat_icon_section_list() {
    mount(PAGE);
    wet_report_wasm::init(None).unwrap();
    let pairs = || {
        ["showHide_a", "a", "showHide_b", "b"]
            .map(String::from)
            .to_vec()
    };

    wet_report_wasm::toggle_all_sections("expandAll", pairs()).unwrap();
    assert!(icon_src("expandAll").ends_with("images/expand-square.png"));
    assert_eq!(display("a"), "none");
    assert_eq!(display("b"), "none");

    wet_report_wasm::toggle_all_sections("expandAll", pairs()).unwrap();
    assert_eq!(display("a"), "");
    assert_eq!(display("b"), "");
    assert!(icon_src("showHide_b").ends_with("images/collapse-square.png"));
}

#[wasm_bindgen_test]
fn switch_tables_by_configured_id() {
    mount(PAGE);
    wet_report_wasm::init(None).unwrap();

    wet_report_wasm::switch_tables("summaryoverview", false).unwrap();
    assert_eq!(display("summaryoverview"), "none");
    assert_eq!(display("detailedoverview"), "");

    wet_report_wasm::switch_tables("nosuchtable", true).unwrap();
    assert_eq!(display("summaryoverview"), "none");
    assert_eq!(display("detailedoverview"), "");

    wet_report_wasm::switch_tables("detailedoverview", false).unwrap();
    assert_eq!(display("summaryoverview"), "");
    assert_eq!(display("detailedoverview"), "none");
}

#[wasm_bindgen_test]
async fn preview_opens_beside_hovered_link() {
    mount(
        r#"
        <a id="link" href="step.html"
           style="position: absolute; left: 40px; top: 60px; width: 60px; height: 14px; display: block">step</a>
        <iframe id="preview" style="display: none; position: absolute; height: 150px; border: 0"></iframe>
    "#,
    );
    wet_report_wasm::init(None).unwrap();

    let src = format!("{}/step-preview.html", window().location().origin().unwrap());
    let on_hover = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        wet_report_wasm::show_preview(&event, &src).unwrap();
    });
    let link = element("link");
    link.add_event_listener_with_callback("mouseover", on_hover.as_ref().unchecked_ref())
        .unwrap();
    on_hover.forget();
    link.dispatch_event(&web_sys::Event::new("mouseover").unwrap())
        .unwrap();

    let frame = element("preview").dyn_into::<HtmlIFrameElement>().unwrap();
    let mut placed = false;
    for _ in 0..100 {
        sleep(50).await;
        if !frame.style().get_property_value("top").unwrap().is_empty() {
            placed = true;
            break;
        }
    }
    assert!(placed, "preview frame never loaded");

    let frame_height = 150.0 + ReportConfig::default().overlay.height_padding;
    let inner_height = window().inner_height().unwrap().as_f64().unwrap();
    let top = 60f64.min(inner_height - frame_height).max(10.0);
    assert_eq!(display("preview"), "block");
    assert_eq!(frame.style().get_property_value("left").unwrap(), "120px");
    assert_eq!(
        frame.style().get_property_value("top").unwrap(),
        format!("{top}px")
    );
    let frame_doc = frame.content_document().unwrap();
    assert!(frame_doc.onmouseout().is_some());
    assert!(frame_doc.onmouseover().is_some());

    wet_report_wasm::hide_preview().unwrap();
    assert_eq!(display("preview"), "none");
}

#[wasm_bindgen_test]
fn contexts_walk_up_into_parent_frame() {
    mount(r#"<iframe id="child"></iframe>"#);
    let child = element("child")
        .dyn_into::<HtmlIFrameElement>()
        .unwrap()
        .content_window()
        .unwrap();

    let contexts = dom::location_contexts(&child, 9);
    assert!(contexts.len() >= 2);
    assert_eq!(contexts[0], "");
    assert_eq!(contexts[1], window().location().search().unwrap());

    assert_eq!(dom::location_contexts(&child, 1).len(), 1);
}

#[wasm_bindgen_test]
fn inline_padding_decides_glow_style() {
    mount(
        r#"
        <p><span id="thin" style="padding: 1px">thin</span></p>
        <p><span id="wide" style="padding: 12px">wide</span></p>
    "#,
    );
    let config = ReportConfig::default();
    let highlight = |id: &str| {
        let selector = format!("#{id}");
        let details = dom::element_layout(&window(), &element(id));
        assert!(details.content_width > 0.0);
        let commands = plan_highlight(&config.highlight, &selector, &details);
        dom::apply(&window(), &config, &commands);
        element(id)
            .dyn_into::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("box-shadow")
            .unwrap()
    };

    let thin = highlight("thin");
    assert!(!thin.is_empty());
    assert!(thin.contains("inset"));

    let wide = highlight("wide");
    assert!(!wide.is_empty());
    assert!(!wide.contains("inset"));
}

#[wasm_bindgen_test]
fn margin_and_scroll_commands_reach_the_page() {
    mount(
        r#"
        <input id="cb" type="checkbox" style="margin: 0">
        <div style="height: 5000px"></div>
    "#,
    );
    let config = ReportConfig::default();
    dom::apply(
        &window(),
        &config,
        &[
            DomCommand::EnsureMinMargin {
                selector: "#cb".into(),
                px: 3.0,
            },
            DomCommand::ScrollTo {
                position: Point::new(0.0, 400.0),
                smooth: false,
            },
        ],
    );

    let style = element("cb").dyn_into::<HtmlElement>().unwrap().style();
    for side in ["margin-top", "margin-right", "margin-bottom", "margin-left"] {
        assert_eq!(style.get_property_value(side).unwrap(), "3px");
    }
    assert_eq!(window().page_y_offset().unwrap(), 400.0);
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn failed_command_does_not_stop_the_batch() {
    mount(PAGE);
    let config = ReportConfig::default();
    dom::apply(
        &window(),
        &config,
        &[
            DomCommand::AddClass {
                target: ElementRef::id("a"),
                class: String::new(),
            },
            DomCommand::SetDisplay {
                id: "a".into(),
                visible: false,
            },
        ],
    );
    assert_eq!(display("a"), "none");
}
