use sizer_core::{CardView, CatalogItem, Redraw};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::constants::{ID_ITEMS, ID_LOADING, ID_SCALE, ID_SCALE_LABEL, ID_SEARCH, ID_SUGGESTIONS};
use crate::state::State;
use crate::utils::log;

/// Attribute carrying a card's position on its remove button.
pub const ATTR_REMOVE: &str = "data-remove";
/// Attribute carrying a suggestion's rank on its list entry.
pub const ATTR_SUGGESTION: &str = "data-suggestion";

/// Repaint the parts of the page named by `what`.
pub fn redraw(state: &State, what: Redraw) {
    let result = match what {
        Redraw::Nothing => Ok(()),
        Redraw::Suggestions => draw_suggestions(state),
        Redraw::Cards => draw_cards(state),
        Redraw::Everything => draw(state),
    };
    if let Err(e) = result {
        log(&format!("redraw failed: {:?}", e));
    }
}

pub fn draw(state: &State) -> Result<(), JsValue> {
    draw_loading(state);
    draw_search(state);
    draw_suggestions(state)?;
    draw_cards(state)
}

fn draw_loading(state: &State) {
    if let Some(el) = html_by_id(&state.document, ID_LOADING) {
        el.set_hidden(state.app.is_ready());
    }
}

fn draw_search(state: &State) {
    if let Some(input) = input_by_id(&state.document, ID_SEARCH) {
        input.set_disabled(!state.app.is_ready());
        if input.value() != state.app.query() {
            input.set_value(state.app.query());
        }
    }
}

fn draw_scale(state: &State) {
    let scale = state.app.scale();
    if let Some(input) = input_by_id(&state.document, ID_SCALE) {
        input.set_value(&scale.get().to_string());
    }
    if let Some(el) = html_by_id(&state.document, ID_SCALE_LABEL) {
        el.set_inner_text(&scale.label());
    }
}

pub fn draw_suggestions(state: &State) -> Result<(), JsValue> {
    let Some(list) = html_by_id(&state.document, ID_SUGGESTIONS) else {
        return Ok(());
    };
    list.set_inner_html("");
    for (i, item) in state.app.suggestions().iter().enumerate() {
        let entry = suggestion_entry(&state.document, i, item)?;
        list.append_child(&entry)?;
    }
    list.set_hidden(state.app.suggestions().is_empty());
    Ok(())
}

fn suggestion_entry(doc: &Document, rank: usize, item: &CatalogItem) -> Result<Element, JsValue> {
    let li = doc.create_element("li")?;
    li.set_class_name("suggestion");
    li.set_attribute(ATTR_SUGGESTION, &rank.to_string())?;
    li.set_text_content(Some(&item.display_name()));
    Ok(li)
}

pub fn draw_cards(state: &State) -> Result<(), JsValue> {
    draw_scale(state);
    let Some(container) = html_by_id(&state.document, ID_ITEMS) else {
        log("cards container #items not found");
        return Ok(());
    };
    render_cards(&state.document, &container, &state.app.cards())
}

/// Replace the children of `container` with one card per view.
pub fn render_cards(
    doc: &Document,
    container: &Element,
    cards: &[CardView],
) -> Result<(), JsValue> {
    container.set_inner_html("");
    for card in cards {
        let el = card_element(doc, card)?;
        container.append_child(&el)?;
    }
    Ok(())
}

fn card_element(doc: &Document, card: &CardView) -> Result<Element, JsValue> {
    let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
    el.set_class_name("card");
    let style = el.style();
    style.set_property("width", &format!("{}px", card.size.width_px))?;
    style.set_property("height", &format!("{}px", card.size.height_px))?;
    style.set_property("background", card.background)?;

    let label = doc.create_element("span")?;
    label.set_class_name("card-label");
    label.set_text_content(Some(&card.label));
    el.append_child(&label)?;

    let btn = doc.create_element("button")?;
    btn.set_class_name("card-remove");
    btn.set_attribute(ATTR_REMOVE, &card.index.to_string())?;
    btn.set_text_content(Some("Remove"));
    el.append_child(&btn)?;
    Ok(el.into())
}

/// Read a numeric data attribute from the event target or its nearest
/// ancestor carrying it.
pub fn target_index(target: Option<web_sys::EventTarget>, attr: &str) -> Option<usize> {
    let el: Element = target?.dyn_into().ok()?;
    let holder = el.closest(&format!("[{}]", attr)).ok()??;
    holder.get_attribute(attr)?.parse().ok()
}

pub fn html_by_id(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)?.dyn_into().ok()
}

pub fn input_by_id(doc: &Document, id: &str) -> Option<HtmlInputElement> {
    doc.get_element_by_id(id)?.dyn_into().ok()
}
