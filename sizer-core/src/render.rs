use crate::collection::Collection;
use crate::dimensions::{DimensionOrder, Dimensions};

/// Screen pixels per millimeter at 100% scale.
pub const BASE_PX_PER_MM: f64 = 4.0;

pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 2.0;
pub const SCALE_STEP: f64 = 0.05;

/// Zoom applied to every card, kept within [`SCALE_MIN`, `SCALE_MAX`] on
/// [`SCALE_STEP`] increments.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return ScaleFactor::default();
        }
        let clamped = value.clamp(SCALE_MIN, SCALE_MAX);
        // Count in hundredths so 1.0 and 2.0 come out exact.
        let steps = (clamped / SCALE_STEP).round();
        ScaleFactor(steps * 5.0 / 100.0)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Slider label, e.g. `"105%"`.
    pub fn label(self) -> String {
        // From the step count, since 1.15 * 100.0 is just under 115.
        let steps = (self.0 / SCALE_STEP).round() as i64;
        format!("{}%", steps * 5)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor(1.0)
    }
}

/// Rendered card size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSize {
    pub width_px: f64,
    pub height_px: f64,
}

/// Size a card from its physical dimensions.
///
/// Width is anchored at `width_mm * BASE_PX_PER_MM * scale` and height keeps
/// the physical aspect ratio. Degenerate input yields a zero-size box.
pub fn render_box(dims: Dimensions, scale: ScaleFactor) -> BoxSize {
    if dims.is_degenerate() {
        return BoxSize::default();
    }
    let width_px = dims.width_mm * BASE_PX_PER_MM * scale.get();
    let height_px = width_px * (dims.height_mm / dims.width_mm);
    if !width_px.is_finite() || !height_px.is_finite() {
        return BoxSize::default();
    }
    BoxSize {
        width_px: width_px.max(0.0),
        height_px: height_px.max(0.0),
    }
}

/// Background colour for the card at position `i`.
pub fn card_color(i: usize) -> &'static str {
    // Fixed 16-color categorical palette, cycling by position.
    const PALETTE: [&str; 16] = [
        "tomato",
        "orangered",
        "orange",
        "gold",
        "yellowgreen",
        "mediumseagreen",
        "lightseagreen",
        "teal",
        "deepskyblue",
        "dodgerblue",
        "slateblue",
        "blueviolet",
        "orchid",
        "hotpink",
        "peru",
        "slategray",
    ];
    PALETTE[i % PALETTE.len()]
}

/// Everything the page needs to draw one card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub index: usize,
    pub label: String,
    pub size: BoxSize,
    pub background: &'static str,
}

/// Lay out every displayed item in order.
pub fn layout(
    collection: &Collection,
    scale: ScaleFactor,
    order: DimensionOrder,
    colored: bool,
) -> Vec<CardView> {
    collection
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| CardView {
            index,
            label: item.display_name(),
            size: render_box(item.dimensions(order), scale),
            background: if colored { card_color(index) } else { "white" },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn card() -> Dimensions {
        CatalogItem::reference_card().dimensions(DimensionOrder::WidthFirst)
    }

    #[test]
    fn reference_card_at_full_scale() {
        let b = render_box(card(), ScaleFactor::new(1.0));
        assert!(close(b.width_px, 342.4));
        assert!(close(b.height_px, 342.4 * 53.98 / 85.60));
        assert!((b.height_px - 215.9).abs() < 0.05);
    }

    #[test]
    fn double_scale_doubles_both_sides() {
        let one = render_box(card(), ScaleFactor::new(1.0));
        let two = render_box(card(), ScaleFactor::new(2.0));
        assert_eq!(two.width_px, one.width_px * 2.0);
        assert_eq!(two.height_px, one.height_px * 2.0);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let dims = Dimensions {
            width_mm: 70.4,
            height_mm: 147.6,
        };
        for s in [0.5, 0.75, 1.35, 2.0] {
            let b = render_box(dims, ScaleFactor::new(s));
            assert!(close(b.height_px / b.width_px, 147.6 / 70.4));
        }
    }

    #[test]
    fn degenerate_dimensions_render_empty() {
        for dims in [
            Dimensions::default(),
            Dimensions {
                width_mm: 0.0,
                height_mm: 12.0,
            },
            Dimensions {
                width_mm: f64::NAN,
                height_mm: 1.0,
            },
            Dimensions {
                width_mm: 1.0,
                height_mm: f64::INFINITY,
            },
        ] {
            assert_eq!(render_box(dims, ScaleFactor::default()), BoxSize::default());
        }
    }

    #[test]
    fn scale_is_clamped_and_snapped() {
        assert_eq!(ScaleFactor::new(0.1).get(), 0.5);
        assert_eq!(ScaleFactor::new(5.0).get(), 2.0);
        assert_eq!(ScaleFactor::new(1.0).get(), 1.0);
        assert_eq!(ScaleFactor::new(1.52).get(), 1.5);
        assert_eq!(ScaleFactor::new(1.03).get(), 1.05);
        assert_eq!(ScaleFactor::new(f64::NAN), ScaleFactor::default());
    }

    #[test]
    fn scale_label_shows_whole_percent() {
        assert_eq!(ScaleFactor::new(1.0).label(), "100%");
        assert_eq!(ScaleFactor::new(0.5).label(), "50%");
        assert_eq!(ScaleFactor::new(2.0).label(), "200%");
        assert_eq!(ScaleFactor::new(1.15).label(), "115%");
        for step in 10..=40 {
            let scale = ScaleFactor::new(step as f64 * SCALE_STEP);
            assert_eq!(scale.label(), format!("{}%", step * 5));
        }
    }

    #[test]
    fn colors_cycle_by_position() {
        assert_eq!(card_color(0), card_color(16));
        assert_ne!(card_color(0), card_color(1));
        let distinct: std::collections::HashSet<_> = (0..16).map(card_color).collect();
        assert_eq!(distinct.len(), 16);
    }

    #[test]
    fn layout_follows_collection_order() {
        let c = Collection::with_reference().append(CatalogItem::new(
            Some("Samsung"),
            "Galaxy S10",
            "70.4 x 147.6",
        ));
        let cards = layout(&c, ScaleFactor::default(), DimensionOrder::WidthFirst, true);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].label, "Credit card");
        assert_eq!(cards[1].label, "Samsung Galaxy S10");
        assert_eq!(cards[1].index, 1);
        assert_eq!(cards[1].background, card_color(1));
        assert!(close(cards[1].size.width_px, 70.4 * 4.0));

        let plain = layout(&c, ScaleFactor::default(), DimensionOrder::WidthFirst, false);
        assert!(plain.iter().all(|v| v.background == "white"));
    }
}
