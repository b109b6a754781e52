// Catalog geometry: control boxes, the cart indicator and click endpoints
use crate::constants::{
    DEFAULT_BUTTON_HEIGHT, DEFAULT_BUTTON_WIDTH, DEFAULT_CARD_COUNT, DEFAULT_CARD_GAP,
    DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH, DEFAULT_GRID_COLUMNS,
};
use crate::error::{CartTossError, Result};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned on-screen box in pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Where a thrown marker leaves this box: top edge, horizontal centre.
    pub fn launch_point(&self) -> Vector2<f64> {
        Vector2::new(self.left + self.width / 2.0, self.top)
    }

    /// Where a thrown marker lands on this box: its left/top corner.
    pub fn landing_point(&self) -> Vector2<f64> {
        Vector2::new(self.left, self.top)
    }

    fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// Everything a click handler knows at click time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickGeometry {
    pub control: ScreenBox,
    pub cart: ScreenBox,
    pub scroll_y: f64,
}

impl ClickGeometry {
    pub fn new(control: ScreenBox, cart: ScreenBox, scroll_y: f64) -> Self {
        Self { control, cart, scroll_y }
    }

    /// Launch and landing points as `(origin, target)`
    pub fn endpoints(&self) -> Result<(Vector2<f64>, Vector2<f64>)> {
        if !self.control.is_finite() {
            return Err(CartTossError::NonFiniteGeometry("control box"));
        }
        if !self.cart.is_finite() {
            return Err(CartTossError::NonFiniteGeometry("cart box"));
        }
        Ok((self.control.launch_point(), self.cart.landing_point()))
    }
}

/// Product card grid with one "add" control per card and the cart
/// indicator in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLayout {
    pub card_count: usize,
    pub columns: usize,
    pub grid_left: f64,
    pub grid_top: f64,
    pub card_width: f64,
    pub card_height: f64,
    pub gap: f64,
    pub button_width: f64,
    pub button_height: f64,
    pub cart: ScreenBox,
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            columns: DEFAULT_GRID_COLUMNS,
            grid_left: 40.0,
            grid_top: 160.0,
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
            gap: DEFAULT_CARD_GAP,
            button_width: DEFAULT_BUTTON_WIDTH,
            button_height: DEFAULT_BUTTON_HEIGHT,
            cart: ScreenBox::new(880.0, 16.0, 48.0, 48.0),
        }
    }
}

impl CatalogLayout {
    /// Box of the card at `index`, row-major.
    pub fn card_box(&self, index: usize) -> Result<ScreenBox> {
        if index >= self.card_count {
            return Err(CartTossError::CardOutOfRange {
                index,
                count: self.card_count,
            });
        }
        let columns = self.columns.max(1);
        let column = (index % columns) as f64;
        let row = (index / columns) as f64;
        Ok(ScreenBox::new(
            self.grid_left + column * (self.card_width + self.gap),
            self.grid_top + row * (self.card_height + self.gap),
            self.card_width,
            self.card_height,
        ))
    }

    /// The "add" control sits centred at the bottom of its card.
    pub fn control_box(&self, index: usize) -> Result<ScreenBox> {
        let card = self.card_box(index)?;
        Ok(ScreenBox::new(
            card.left + (card.width - self.button_width) / 2.0,
            card.top + card.height - self.button_height - self.gap / 2.0,
            self.button_width,
            self.button_height,
        ))
    }

    pub fn click_geometry(&self, index: usize, scroll_y: f64) -> Result<ClickGeometry> {
        Ok(ClickGeometry::new(self.control_box(index)?, self.cart, scroll_y))
    }

    pub fn control_boxes(&self) -> Vec<ScreenBox> {
        (0..self.card_count)
            .filter_map(|index| self.control_box(index).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_point_is_top_centre() {
        let control = ScreenBox::new(100.0, 300.0, 80.0, 32.0);
        let p = control.launch_point();
        assert_eq!(p.x, 140.0);
        assert_eq!(p.y, 300.0);
    }

    #[test]
    fn test_landing_point_is_corner() {
        let cart = ScreenBox::new(880.0, 16.0, 48.0, 48.0);
        assert_eq!(cart.landing_point(), Vector2::new(880.0, 16.0));
    }

    #[test]
    fn test_default_catalog_has_eight_controls() {
        let layout = CatalogLayout::default();
        assert_eq!(layout.control_boxes().len(), 8);
    }

    #[test]
    fn test_grid_rows_and_columns() {
        let layout = CatalogLayout::default();
        let first = layout.card_box(0).unwrap();
        let second = layout.card_box(1).unwrap();
        let below = layout.card_box(layout.columns).unwrap();
        assert_eq!(second.left - first.left, layout.card_width + layout.gap);
        assert_eq!(below.top - first.top, layout.card_height + layout.gap);
        assert_eq!(below.left, first.left);
    }

    #[test]
    fn test_control_inside_card() {
        let layout = CatalogLayout::default();
        for index in 0..layout.card_count {
            let card = layout.card_box(index).unwrap();
            let control = layout.control_box(index).unwrap();
            assert!(control.left >= card.left);
            assert!(control.left + control.width <= card.left + card.width);
            assert!(control.top + control.height <= card.top + card.height);
        }
    }

    #[test]
    fn test_card_out_of_range() {
        let layout = CatalogLayout::default();
        let err = layout.control_box(8).unwrap_err();
        assert!(matches!(err, CartTossError::CardOutOfRange { index: 8, count: 8 }));
    }

    #[test]
    fn test_non_finite_geometry_rejected() {
        let geometry = ClickGeometry::new(
            ScreenBox::new(f64::NAN, 0.0, 10.0, 10.0),
            ScreenBox::new(0.0, 0.0, 10.0, 10.0),
            0.0,
        );
        assert!(matches!(
            geometry.endpoints(),
            Err(CartTossError::NonFiniteGeometry("control box"))
        ));
    }
}
