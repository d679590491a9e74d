/// Start-up defaults and DOM element ids shared by the page modules.
pub const DEFAULT_CATALOG: &str = "phones.json";

pub const ID_SEARCH: &str = "search";
pub const ID_SUGGESTIONS: &str = "suggestions";
pub const ID_ADD_CARD: &str = "addCard";
pub const ID_SCALE: &str = "scale";
pub const ID_SCALE_LABEL: &str = "scaleLabel";
pub const ID_ITEMS: &str = "items";
pub const ID_LOADING: &str = "loading";
