// Browser tests for pages missing a required element. Wiring must fail before
// the page is modified. Nothing in this binary wires successfully.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::window;
use yard_cat::YardConfig;
use yard_cat::dom::{self, PageElements};

wasm_bindgen_test_configure!(run_in_browser);

const HEADER: &str = "<header id='header'><canvas id='header-canvas' width='320' height='120'></canvas></header>";
const GROUND: &str = "<canvas id='ground-canvas' width='320' height='40'></canvas>";
const SELECT: &str = "<div id='time-select'></div>";

fn set_page(parts: &[&str]) {
    let doc = window().unwrap().document().unwrap();
    doc.body().unwrap().set_inner_html(&parts.concat());
}

fn option_count() -> u32 {
    let doc = window().unwrap().document().unwrap();
    doc.get_element_by_id("time-select")
        .map(|c| c.child_element_count())
        .unwrap_or(0)
}

fn wire_err() -> String {
    dom::wire_page(YardConfig::default())
        .unwrap_err()
        .as_string()
        .unwrap()
}

#[wasm_bindgen_test]
fn missing_ground_canvas_fails_without_touching_the_page() {
    set_page(&[HEADER, SELECT]);
    assert_eq!(wire_err(), "missing element #ground-canvas");
    assert_eq!(option_count(), 0);
    assert!(dom::with_yard(|_| ()).is_none());
}

#[wasm_bindgen_test]
fn missing_toggle_fails_before_any_listener_or_option() {
    set_page(&[
        "<canvas id='header-canvas' width='320' height='120'></canvas>",
        GROUND,
        SELECT,
    ]);
    assert_eq!(wire_err(), "missing element #header");
    assert_eq!(option_count(), 0);
    assert!(dom::with_yard(|_| ()).is_none());
}

#[wasm_bindgen_test]
fn resolve_reports_the_option_container() {
    set_page(&[HEADER, GROUND]);
    let doc = window().unwrap().document().unwrap();
    let err = PageElements::resolve(&doc, &YardConfig::default())
        .err()
        .unwrap()
        .as_string()
        .unwrap();
    assert_eq!(err, "missing element #time-select");
}
