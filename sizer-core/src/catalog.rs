use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimensions::{DimensionOrder, Dimensions};
use crate::error::Result;

/// One record of the device catalog.
///
/// `oem` and `model` compose the display name. Older datasets carry a single
/// `name` and a `dimensions` field instead; those load into `model` and
/// `body_dimensions`. Fields the page does not know about are kept in `extra`
/// so their string values stay searchable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oem: Option<String>,
    #[serde(default, alias = "name")]
    pub model: String,
    #[serde(default, alias = "dimensions")]
    pub body_dimensions: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CatalogItem {
    pub fn new(oem: Option<&str>, model: &str, body_dimensions: &str) -> Self {
        CatalogItem {
            oem: oem.map(str::to_string),
            model: model.to_string(),
            body_dimensions: body_dimensions.to_string(),
            extra: BTreeMap::new(),
        }
    }

    /// The built-in credit card used as the real-world size reference.
    pub fn reference_card() -> Self {
        CatalogItem::new(None, "Credit card", "85.60 x 53.98")
    }

    /// `"{oem} {model}"`, or just the model when there is no manufacturer.
    pub fn display_name(&self) -> String {
        match self.oem.as_deref() {
            Some(oem) if !oem.trim().is_empty() => format!("{} {}", oem, self.model),
            _ => self.model.clone(),
        }
    }

    pub fn dimensions(&self, order: DimensionOrder) -> Dimensions {
        Dimensions::parse(&self.body_dimensions, order)
    }

    /// Look up a text field by its dataset name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "oem" => self.oem.as_deref(),
            "model" | "name" => Some(self.model.as_str()),
            "body_dimensions" | "dimensions" => Some(self.body_dimensions.as_str()),
            other => self.extra.get(other).and_then(|v| v.as_str()),
        }
    }
}

/// Static catalog asset: `{"devices": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub devices: Vec<CatalogItem>,
}

/// Accepted file layouts: the wrapped object or a bare list of items.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<CatalogItem>),
    Wrapped(Catalog),
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(match serde_json::from_str(text)? {
            CatalogFile::Bare(devices) => Catalog { devices },
            CatalogFile::Wrapped(catalog) => catalog,
        })
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
