use sizer_core::{DimensionOrder, ScaleFactor, Settings};

use crate::constants::DEFAULT_CATALOG;
use crate::utils::get_query_param;

/// Page configuration read from the URL query string.
///
/// Recognized parameters: `catalog`, `scale`, `colors`, `order` (`wh`/`hw`),
/// `limit` and `keys` (comma separated field names). Unknown or invalid
/// values keep the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub catalog: String,
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog: DEFAULT_CATALOG.to_string(),
            settings: Settings::default(),
        }
    }
}

impl Config {
    pub fn from_query(search: &str) -> Self {
        let mut cfg = Config::default();
        let param = |key: &str| get_query_param(search, key).map(|v| v.trim().to_string());

        if let Some(path) = param("catalog")
            && !path.is_empty()
        {
            cfg.catalog = path;
        }
        if let Some(v) = param("scale")
            && let Ok(scale) = v.parse::<f64>()
        {
            cfg.settings.initial_scale = ScaleFactor::new(scale);
        }
        if let Some(v) = param("colors") {
            cfg.settings.colored =
                matches!(v.to_lowercase().as_str(), "" | "1" | "true" | "yes" | "on");
        }
        if let Some(v) = param("order") {
            match v.to_lowercase().as_str() {
                "wh" | "width-first" => cfg.settings.order = DimensionOrder::WidthFirst,
                "hw" | "height-first" => cfg.settings.order = DimensionOrder::HeightFirst,
                _ => {}
            }
        }
        if let Some(v) = param("limit")
            && let Ok(n) = v.parse::<usize>()
            && n > 0
        {
            cfg.settings.suggestion_limit = n;
        }
        if let Some(v) = param("keys") {
            let keys: Vec<String> = v
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
            if !keys.is_empty() {
                cfg.settings.search_keys = keys;
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_uses_defaults() {
        assert_eq!(Config::from_query(""), Config::default());
        assert_eq!(Config::from_query("?").catalog, "phones.json");
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = Config::from_query("?catalog=data/devices.json&scale=1.5&colors=1&order=hw&limit=5&keys=model,brand");
        assert_eq!(cfg.catalog, "data/devices.json");
        assert_eq!(cfg.settings.initial_scale.get(), 1.5);
        assert!(cfg.settings.colored);
        assert_eq!(cfg.settings.order, DimensionOrder::HeightFirst);
        assert_eq!(cfg.settings.suggestion_limit, 5);
        assert_eq!(cfg.settings.search_keys, vec!["model", "brand"]);
    }

    #[test]
    fn bare_colors_flag_enables_colors() {
        assert!(Config::from_query("?colors").settings.colored);
        assert!(!Config::from_query("?colors=off").settings.colored);
    }

    #[test]
    fn scale_is_clamped() {
        assert_eq!(Config::from_query("?scale=9").settings.initial_scale.get(), 2.0);
        assert_eq!(Config::from_query("?scale=0").settings.initial_scale.get(), 0.5);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let cfg = Config::from_query("?scale=big&order=sideways&limit=0&keys=,&catalog=");
        assert_eq!(cfg, Config::default());
    }
}
