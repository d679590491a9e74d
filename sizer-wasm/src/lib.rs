use std::cell::RefCell;
use std::rc::Rc;

use sizer_core::{AppState, Catalog, Event as AppEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, KeyboardEvent, Window};

pub mod config;
pub mod constants;
pub mod dom;
pub mod state;
pub mod utils;

use crate::config::Config;
use crate::constants::{ID_ADD_CARD, ID_ITEMS, ID_SCALE, ID_SEARCH, ID_SUGGESTIONS};
use crate::dom::{
    ATTR_REMOVE, ATTR_SUGGESTION, draw, html_by_id, input_by_id, redraw, target_index,
};
use crate::state::{STATE, State};
use crate::utils::{asset_url, fetch_text_with_fallbacks, log};

/// Feed one user event through the model and repaint what it changed.
fn dispatch(state: &Rc<RefCell<State>>, event: AppEvent) {
    let mut s = state.borrow_mut();
    let what = s.app.update(event);
    redraw(&s, what);
}

fn select_suggestion(state: &Rc<RefCell<State>>, rank: usize) {
    let item = state.borrow().app.suggestions().get(rank).cloned();
    if let Some(item) = item {
        dispatch(state, AppEvent::SuggestionSelected(item));
    }
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    // Search box: query on input, Enter picks the top suggestion, Escape clears
    if let Some(input) = input_by_id(&doc, ID_SEARCH) {
        let st = state.clone();
        let input_read = input.clone();
        let oninput = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            dispatch(&st, AppEvent::QueryChanged(input_read.value()));
        }));
        input.set_oninput(Some(oninput.as_ref().unchecked_ref()));
        oninput.forget();

        let st = state.clone();
        let keydown = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                select_suggestion(&st, 0);
            } else if e.key() == "Escape" {
                dispatch(&st, AppEvent::QueryCleared);
            }
        }));
        input.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        keydown.forget();
    } else {
        log("search input #search not found");
    }

    // Suggestion list (delegated clicks)
    if let Some(list) = html_by_id(&doc, ID_SUGGESTIONS) {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            if let Some(rank) = target_index(e.target(), ATTR_SUGGESTION) {
                select_suggestion(&st, rank);
            }
        }));
        list.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Add reference card
    if let Some(btn) = html_by_id(&doc, ID_ADD_CARD) {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            dispatch(&st, AppEvent::AddReferenceClicked);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Scale slider
    if let Some(slider) = input_by_id(&doc, ID_SCALE) {
        slider.set_min(&sizer_core::render::SCALE_MIN.to_string());
        slider.set_max(&sizer_core::render::SCALE_MAX.to_string());
        slider.set_step(&sizer_core::render::SCALE_STEP.to_string());
        let st = state.clone();
        let sl_read = slider.clone();
        let oninput = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Ok(v) = sl_read.value().parse::<f64>() {
                dispatch(&st, AppEvent::ScaleChanged(v));
            }
        }));
        slider.set_oninput(Some(oninput.as_ref().unchecked_ref()));
        oninput.forget();
    }

    // Remove buttons (delegated clicks on the cards container)
    if let Some(items) = html_by_id(&doc, ID_ITEMS) {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            if let Some(index) = target_index(e.target(), ATTR_REMOVE) {
                dispatch(&st, AppEvent::RemoveRequested(index));
            }
        }));
        items.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    } else {
        log("cards container #items not found");
    }
    Ok(())
}

fn bundled_catalog() -> Catalog {
    match Catalog::from_json(include_str!("../../phones.json")) {
        Ok(c) => c,
        Err(e) => {
            log(&format!("Bundled catalog is invalid: {e}"));
            Catalog::default()
        }
    }
}

/// Fetch the configured catalog, falling back to the bundled copy, and hand
/// it to the running page.
async fn fetch_and_load_catalog(window: Window, path: String) {
    let text = fetch_text_with_fallbacks(
        &window,
        &[&asset_url(&path), &format!("/{}", path.trim_start_matches('/')), &path],
    )
    .await;
    let catalog = match text.map(|t| Catalog::from_json(&t)) {
        Some(Ok(c)) => c,
        Some(Err(e)) => {
            log(&format!("Failed to parse catalog '{}': {}", path, e));
            bundled_catalog()
        }
        None => {
            log(&format!("Catalog '{}' unavailable, using bundled copy", path));
            bundled_catalog()
        }
    };
    log(&format!("Loaded {} devices", catalog.len()));

    STATE.with(|st| {
        if let Some(st_rc) = st.borrow().as_ref() {
            dispatch(st_rc, AppEvent::CatalogLoaded(catalog));
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = Config::from_query(&window.location().search().unwrap_or_default());

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        app: AppState::new(config.settings.clone()),
        config,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    attach_ui(state.clone())?;
    draw(&state.borrow())?;

    let (window, path) = {
        let s = state.borrow();
        (s.window.clone(), s.config.catalog.clone())
    };
    wasm_bindgen_futures::spawn_local(fetch_and_load_catalog(window, path));
    Ok(())
}

/// Number of devices in the loaded catalog; zero while loading.
#[wasm_bindgen]
pub fn catalog_size() -> usize {
    STATE.with(|st| {
        st.borrow()
            .as_ref()
            .map_or(0, |s| s.borrow().app.catalog_len())
    })
}
