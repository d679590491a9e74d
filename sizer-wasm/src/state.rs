use std::cell::RefCell;
use std::rc::Rc;

use sizer_core::AppState;
use web_sys::{Document, Window};

use crate::config::Config;

/// Page state stored behind an `Rc<RefCell<_>>` so it can be shared across
/// the DOM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub config: Config,
    pub app: AppState,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
