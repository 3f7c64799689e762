#![cfg(target_arch = "wasm32")]

use advent_core::DEFAULT_STORAGE_KEY;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};
use yew::Renderer;

use advent_web::app::App;
use advent_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::window().document().expect("document")
}

fn ensure_app_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn pin_date(date: &str) {
    dom::window()
        .history()
        .expect("history")
        .replace_state_with_url(&JsValue::NULL, "", Some(&format!("?date={date}")))
        .expect("replace url");
}

fn stored() -> Option<String> {
    dom::local_storage()
        .expect("localStorage")
        .get_item(DEFAULT_STORAGE_KEY)
        .expect("read record")
}

fn days_opened() -> String {
    document()
        .get_element_by_id("daysOpened")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn door(day: u8) -> HtmlElement {
    document()
        .query_selector(&format!(".calendar-door[data-day='{day}']"))
        .expect("query door")
        .expect("door exists")
        .dyn_into()
        .expect("cast to element")
}

async fn settle() {
    dom::sleep_ms(30).await.expect("timer");
}

#[wasm_bindgen_test]
async fn door_clicks_reveal_or_shake() {
    pin_date("12-19");
    dom::local_storage()
        .expect("localStorage")
        .set_item(DEFAULT_STORAGE_KEY, "[1]")
        .expect("seed record");

    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    assert_eq!(days_opened(), "1");
    assert!(document().get_element_by_id("doorModal").is_none());

    door(3).click();
    settle().await;
    assert!(document().get_element_by_id("doorModal").is_some());
    assert_eq!(days_opened(), "2");
    assert_eq!(stored().as_deref(), Some("[1,3]"));

    door(20).click();
    settle().await;
    let classes = door(20).get_attribute("class").unwrap_or_default();
    assert!(classes.contains("shake"), "locked door should shake: {classes}");
    assert_eq!(stored().as_deref(), Some("[1,3]"));
    assert_eq!(days_opened(), "2");

    dom::local_storage()
        .expect("localStorage")
        .remove_item(DEFAULT_STORAGE_KEY)
        .expect("clear record");
    ensure_app_root();
}
