//! Factory Pattern: string keys to drawable shapes.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::UnknownShape;

// ============================================================================
// Shape variants
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Square,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Square, ShapeKind::Circle];

    /// The lower-case key the factory accepts for this variant.
    pub fn key(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| s.eq_ignore_ascii_case(kind.key()))
            .ok_or_else(|| UnknownShape::new(s))
    }
}

pub trait Shape {
    fn kind(&self) -> ShapeKind;

    /// The line `draw` prints.
    fn render(&self) -> String;

    fn draw(&self) {
        println!("{}", self.render());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn render(&self) -> String {
        "Rectangle class::draw_shape() method.".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square;

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn render(&self) -> String {
        "Square class::draw_shape() method.".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle;

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn render(&self) -> String {
        "Circle class::draw_shape() method.".to_string()
    }
}

// ============================================================================
// Factory
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    /// Build the shape named by `shape_type`, ignoring case.
    ///
    /// A missing key and an unknown key both give `None`. Use
    /// `str::parse::<ShapeKind>()` to tell the two apart.
    pub fn create(&self, shape_type: Option<&str>) -> Option<Box<dyn Shape>> {
        let key = shape_type?;
        match key.parse::<ShapeKind>() {
            Ok(kind) => Some(self.create_kind(kind)),
            Err(err) => {
                debug!(%err, "no shape for key");
                None
            }
        }
    }

    pub fn create_kind(&self, kind: ShapeKind) -> Box<dyn Shape> {
        match kind {
            ShapeKind::Rectangle => Box::new(Rectangle),
            ShapeKind::Square => Box::new(Square),
            ShapeKind::Circle => Box::new(Circle),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kind_of(key: Option<&str>) -> Option<ShapeKind> {
        ShapeFactory.create(key).map(|shape| shape.kind())
    }

    #[test]
    fn test_exact_keys() {
        assert_eq!(kind_of(Some("circle")), Some(ShapeKind::Circle));
        assert_eq!(kind_of(Some("rectangle")), Some(ShapeKind::Rectangle));
        assert_eq!(kind_of(Some("square")), Some(ShapeKind::Square));
    }

    #[test]
    fn test_mixed_case_keys() {
        assert_eq!(kind_of(Some("CIRCLE")), Some(ShapeKind::Circle));
        assert_eq!(kind_of(Some("Circle")), Some(ShapeKind::Circle));
        assert_eq!(kind_of(Some("ReCtAnGlE")), Some(ShapeKind::Rectangle));
        assert_eq!(kind_of(Some("sQUARE")), Some(ShapeKind::Square));
    }

    #[test]
    fn test_missing_and_unknown_keys() {
        assert!(ShapeFactory.create(None).is_none());
        assert!(ShapeFactory.create(Some("triangle")).is_none());
        assert!(ShapeFactory.create(Some("")).is_none());
        assert!(ShapeFactory.create(Some("circl")).is_none());
        assert!(ShapeFactory.create(Some(" circle")).is_none());
    }

    #[test]
    fn test_parse_reports_rejected_key() {
        let err = "triangle".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err.key(), "triangle");
        assert_eq!(err.to_string(), "unknown shape type: 'triangle'");
    }

    #[test]
    fn test_square_draw_line() {
        let shape = ShapeFactory.create(Some("SQUARE")).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Square);
        assert_eq!(shape.render(), "Square class::draw_shape() method.");
    }

    #[test]
    fn test_render_names_variant() {
        for kind in ShapeKind::ALL {
            let shape = ShapeFactory.create_kind(kind);
            assert_eq!(shape.kind(), kind);
            assert!(shape.render().to_lowercase().starts_with(kind.key()));
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>(), Ok(kind));
        }
    }

    fn random_casing(key: &'static str) -> impl Strategy<Value = String> {
        prop::collection::vec(any::<bool>(), key.len()).prop_map(move |upper| {
            key.chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn any_casing_of_circle(key in random_casing("circle")) {
            prop_assert_eq!(kind_of(Some(key.as_str())), Some(ShapeKind::Circle));
        }

        #[test]
        fn any_casing_of_rectangle(key in random_casing("rectangle")) {
            prop_assert_eq!(kind_of(Some(key.as_str())), Some(ShapeKind::Rectangle));
        }

        #[test]
        fn any_casing_of_square(key in random_casing("square")) {
            prop_assert_eq!(kind_of(Some(key.as_str())), Some(ShapeKind::Square));
        }

        #[test]
        fn other_keys_give_nothing(key in "[a-z]{0,12}") {
            prop_assume!(!ShapeKind::ALL.iter().any(|kind| kind.key() == key));
            prop_assert!(ShapeFactory.create(Some(key.as_str())).is_none());
        }
    }
}
