use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref RE_DIMENSIONS: Regex = Regex::new(r"([0-9]+\.?[0-9]*) x ([0-9]+\.?[0-9]*)").unwrap();
}

/// Extract the first `<number> x <number>` pair from a dimension string.
///
/// Numbers come back in the order they appear in the text. Only ASCII digits
/// count. A string that does not contain the pattern yields `(0.0, 0.0)`.
pub fn parse_dimensions(text: &str) -> (f64, f64) {
    let Some(caps) = RE_DIMENSIONS.captures(text) else {
        return (0.0, 0.0);
    };
    match (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
        (Ok(first), Ok(second)) => (first, second),
        _ => (0.0, 0.0),
    }
}

/// Which of the two parsed numbers is the width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionOrder {
    /// `"<width> x <height>"`
    #[default]
    WidthFirst,
    /// `"<height> x <width>"`, as phone data sheets usually list it.
    HeightFirst,
}

/// Physical size of an item in millimeters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Dimensions {
    pub fn parse(text: &str, order: DimensionOrder) -> Self {
        let (first, second) = parse_dimensions(text);
        match order {
            DimensionOrder::WidthFirst => Dimensions {
                width_mm: first,
                height_mm: second,
            },
            DimensionOrder::HeightFirst => Dimensions {
                width_mm: second,
                height_mm: first,
            },
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width_mm > 0.0 && self.width_mm.is_finite() && self.height_mm.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_card() {
        assert_eq!(parse_dimensions("85.60 x 53.98"), (85.60, 53.98));
    }

    #[test]
    fn parses_integers_and_trailing_dot() {
        assert_eq!(parse_dimensions("70 x 147"), (70.0, 147.0));
        assert_eq!(parse_dimensions("70. x 147.5"), (70.0, 147.5));
    }

    #[test]
    fn ignores_surrounding_text() {
        assert_eq!(parse_dimensions("  70.4 x 147.6  "), (70.4, 147.6));
        assert_eq!(
            parse_dimensions("158.2 x 77.8 x 8.1 mm (6.23 x 3.06 x 0.32 in)"),
            (158.2, 77.8)
        );
    }

    #[test]
    fn non_matching_strings_are_zero() {
        for s in [
            "",
            "abc",
            "85.60x53.98",
            "85.60  x 53.98",
            "85.60 X 53.98",
            "85.60 × 53.98",
            "x 53.98",
            "85.60 x",
            "-",
            "٣ x 5",
            "1٣ x 5",
            "８５ x 5",
        ] {
            assert_eq!(parse_dimensions(s), (0.0, 0.0), "input {s:?}");
        }
    }

    #[test]
    fn order_maps_width_and_height() {
        let wf = Dimensions::parse("85.60 x 53.98", DimensionOrder::WidthFirst);
        assert_eq!(wf.width_mm, 85.60);
        assert_eq!(wf.height_mm, 53.98);

        let hf = Dimensions::parse("158.2 x 77.8 x 8.1 mm", DimensionOrder::HeightFirst);
        assert_eq!(hf.width_mm, 77.8);
        assert_eq!(hf.height_mm, 158.2);
    }

    #[test]
    fn degenerate_detection() {
        assert!(Dimensions::parse("n/a", DimensionOrder::WidthFirst).is_degenerate());
        assert!(Dimensions::parse("0 x 12", DimensionOrder::WidthFirst).is_degenerate());
        assert!(!Dimensions::parse("1 x 0", DimensionOrder::WidthFirst).is_degenerate());
    }
}
