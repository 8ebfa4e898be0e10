//! Document geometry in page units (one terminal row is [`LINE_HEIGHT`] units).

/// Page units per rendered terminal row.
pub const LINE_HEIGHT: f32 = 20.0;

/// Visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f32,
    pub height: f32,
}

/// A block of the document, e.g. a section or a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

impl Viewport {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Any overlap at all: region starts above the viewport's bottom edge
    /// and ends below its top edge.
    pub fn is_partially_visible(&self, region: &Region) -> bool {
        region.top < self.bottom() && region.bottom() > self.top
    }

    /// Fraction of `region` inside the viewport, in `[0, 1]`.
    ///
    /// `bottom_margin` grows (positive) or shrinks (negative) the viewport's
    /// bottom edge before intersecting. Zero-height regions count as fully
    /// visible while their position is inside the viewport.
    pub fn intersection_ratio(&self, region: &Region, bottom_margin: f32) -> f32 {
        let bottom = (self.bottom() + bottom_margin).max(self.top);
        if region.height <= 0.0 {
            return if region.top >= self.top && region.top <= bottom {
                1.0
            } else {
                0.0
            };
        }
        let overlap = region.bottom().min(bottom) - region.top.max(self.top);
        (overlap / region.height).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_inside_is_one() {
        let viewport = Viewport::new(0.0, 500.0);
        assert_eq!(viewport.intersection_ratio(&Region::new(100.0, 200.0), 0.0), 1.0);
    }

    #[test]
    fn half_overlap_is_half() {
        let viewport = Viewport::new(0.0, 500.0);
        let region = Region::new(400.0, 200.0);
        assert_eq!(viewport.intersection_ratio(&region, 0.0), 0.5);
    }

    #[test]
    fn negative_margin_shrinks_viewport() {
        let viewport = Viewport::new(0.0, 500.0);
        let region = Region::new(450.0, 100.0);
        assert_eq!(viewport.intersection_ratio(&region, 0.0), 0.5);
        assert_eq!(viewport.intersection_ratio(&region, -50.0), 0.0);
    }

    #[test]
    fn outside_is_zero_and_not_visible() {
        let viewport = Viewport::new(1_000.0, 400.0);
        let above = Region::new(0.0, 1_000.0);
        let below = Region::new(1_400.0, 100.0);
        assert_eq!(viewport.intersection_ratio(&above, 0.0), 0.0);
        assert!(!viewport.is_partially_visible(&above));
        assert!(!viewport.is_partially_visible(&below));
    }

    #[test]
    fn touching_edge_counts_as_partially_visible() {
        let viewport = Viewport::new(100.0, 400.0);
        assert!(viewport.is_partially_visible(&Region::new(0.0, 101.0)));
        assert!(viewport.is_partially_visible(&Region::new(499.0, 50.0)));
    }
}
