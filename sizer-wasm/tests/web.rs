//! Browser smoke tests. Run with `wasm-pack test --headless --firefox sizer-wasm`.
#![cfg(target_arch = "wasm32")]

use sizer_core::{AppState, CatalogItem, Event, Settings};
use sizer_wasm::dom::{ATTR_REMOVE, render_cards, target_index};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn renders_one_card_per_item() {
    let doc = document();
    let container = doc.create_element("div").unwrap();

    let mut app = AppState::new(Settings::default());
    let _ = app.update(Event::SuggestionSelected(CatalogItem::new(
        Some("Google"),
        "Pixel 4",
        "68.8 x 147.1",
    )));
    render_cards(&doc, &container, &app.cards()).unwrap();

    assert_eq!(container.child_element_count(), 2);
    let first = container.first_element_child().unwrap();
    let style = first.get_attribute("style").unwrap_or_default();
    assert!(style.contains("342.4px"), "style was {style}");
    assert!(first.text_content().unwrap_or_default().contains("Credit card"));
}

#[wasm_bindgen_test]
fn remove_button_carries_its_position() {
    let doc = document();
    let container = doc.create_element("div").unwrap();
    let app = AppState::new(Settings::default());
    render_cards(&doc, &container, &app.cards()).unwrap();

    let btn = container
        .query_selector(&format!("[{}]", ATTR_REMOVE))
        .unwrap()
        .unwrap();
    assert_eq!(target_index(Some(btn.into()), ATTR_REMOVE), Some(0));
}

#[wasm_bindgen_test]
fn rerender_replaces_previous_cards() {
    let doc = document();
    let container = doc.create_element("div").unwrap();
    let mut app = AppState::new(Settings::default());
    let _ = app.update(Event::AddReferenceClicked);
    render_cards(&doc, &container, &app.cards()).unwrap();
    let _ = app.update(Event::RemoveRequested(0));
    render_cards(&doc, &container, &app.cards()).unwrap();
    assert_eq!(container.child_element_count(), 1);
}
