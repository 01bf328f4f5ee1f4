//! Plain geometric value types.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
///
/// The fields are public plain data; [`Rectangle::area`] is derived from
/// them on demand. The type round-trips through the JSON bridge in
/// [`crate::json`], and a value reconstructed from JSON carries the same
/// behavior as one built directly — `area` works on the parsed fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its side lengths.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The enclosed area: `width * height`.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_product_of_sides() {
        let rect = Rectangle::new(10.0, 20.0);
        assert!((rect.width - 10.0).abs() < 0.01);
        assert!((rect.height - 20.0).abs() < 0.01);
        assert!((rect.area() - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_sized_rectangle() {
        assert!(Rectangle::new(0.0, 7.5).area().abs() < 0.01);
    }
}
