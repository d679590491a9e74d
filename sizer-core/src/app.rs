//! Page model: every user interaction is an [`Event`] fed to
//! [`AppState::update`], which derives the next state and reports what the
//! page has to redraw.

use crate::catalog::{Catalog, CatalogItem};
use crate::collection::Collection;
use crate::dimensions::DimensionOrder;
use crate::error::{Error, Result};
use crate::render::{CardView, ScaleFactor, layout};
use crate::search::{DEFAULT_KEYS, DEFAULT_LIMIT, SearchIndex};

/// Tunables chosen once at start-up.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub order: DimensionOrder,
    pub colored: bool,
    pub suggestion_limit: usize,
    pub initial_scale: ScaleFactor,
    pub search_keys: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            order: DimensionOrder::default(),
            colored: false,
            suggestion_limit: DEFAULT_LIMIT,
            initial_scale: ScaleFactor::default(),
            search_keys: DEFAULT_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    CatalogLoaded(Catalog),
    QueryChanged(String),
    QueryCleared,
    SuggestionSelected(CatalogItem),
    RemoveRequested(usize),
    ScaleChanged(f64),
    AddReferenceClicked,
}

/// What changed after an update.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    Nothing,
    Suggestions,
    Cards,
    Everything,
}

pub struct AppState {
    settings: Settings,
    index: Option<SearchIndex>,
    query: String,
    suggestions: Vec<CatalogItem>,
    collection: Collection,
    scale: ScaleFactor,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        AppState {
            scale: settings.initial_scale,
            settings,
            index: None,
            query: String::new(),
            suggestions: Vec::new(),
            collection: Collection::with_reference(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// True once the catalog has been indexed.
    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn catalog_len(&self) -> usize {
        self.index.as_ref().map_or(0, SearchIndex::len)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[CatalogItem] {
        &self.suggestions
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn search(&self, query: &str) -> Result<Vec<CatalogItem>> {
        let index = self.index.as_ref().ok_or(Error::IndexNotReady)?;
        Ok(index.search(query, Some(self.settings.suggestion_limit)))
    }

    pub fn cards(&self) -> Vec<CardView> {
        layout(
            &self.collection,
            self.scale,
            self.settings.order,
            self.settings.colored,
        )
    }

    pub fn update(&mut self, event: Event) -> Redraw {
        match event {
            Event::CatalogLoaded(catalog) => {
                let keys: Vec<&str> = self
                    .settings
                    .search_keys
                    .iter()
                    .map(String::as_str)
                    .collect();
                self.index = Some(SearchIndex::new(catalog.devices, &keys));
                self.suggestions = self.search(&self.query).unwrap_or_default();
                Redraw::Everything
            }
            Event::QueryChanged(text) => {
                self.query = text;
                match self.search(&self.query) {
                    Ok(found) => {
                        self.suggestions = found;
                        Redraw::Suggestions
                    }
                    Err(_) => Redraw::Nothing,
                }
            }
            Event::QueryCleared => {
                self.query.clear();
                self.suggestions.clear();
                // The input still shows the old text.
                Redraw::Everything
            }
            Event::SuggestionSelected(item) => {
                self.collection = self.collection.append(item);
                self.query.clear();
                self.suggestions.clear();
                Redraw::Everything
            }
            Event::RemoveRequested(index) => {
                if index >= self.collection.len() {
                    return Redraw::Nothing;
                }
                self.collection = self.collection.remove_at(index);
                Redraw::Cards
            }
            Event::ScaleChanged(value) => {
                let scale = ScaleFactor::new(value);
                if scale == self.scale {
                    return Redraw::Nothing;
                }
                self.scale = scale;
                Redraw::Cards
            }
            Event::AddReferenceClicked => {
                self.collection = self.collection.append(CatalogItem::reference_card());
                Redraw::Cards
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Settings::default())
    }
}
