//! Phone size comparison core.
//!
//! Parses catalog dimension strings, searches the catalog, keeps the list of
//! displayed devices and sizes their cards. Shared by the browser page and
//! host-side tests; nothing here touches the DOM.

pub mod app;
pub mod catalog;
pub mod collection;
pub mod dimensions;
pub mod error;
pub mod render;
pub mod search;

pub use app::{AppState, Event, Redraw, Settings};
pub use catalog::{Catalog, CatalogItem};
pub use collection::{Collection, DisplayedItem};
pub use dimensions::{DimensionOrder, Dimensions, parse_dimensions};
pub use error::{Error, Result};
pub use render::{BASE_PX_PER_MM, BoxSize, CardView, ScaleFactor, card_color, layout, render_box};
pub use search::{DEFAULT_LIMIT, MatchKind, SearchHit, SearchIndex};
