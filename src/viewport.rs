//! The region of the complex plane mapped onto the raster.

use crate::{pixel::Complex, screen};

/// Edges of a rectangle on the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Bounds {
    pub fn is_valid(&self) -> bool {
        [self.left, self.right, self.bottom, self.top]
            .iter()
            .all(|edge| edge.is_finite())
            && self.right > self.left
            && self.top > self.bottom
    }
}

/**
Maps raster pixels to plane coordinates and zooms in around clicked pixels.

The viewport is stored as its bottom-left corner plus the plane length of a
single pixel along each axis. Pixel `(0, 0)` maps to `(left, bottom)` and pixel
`(width - 1, height - 1)` maps to `(right, top)` of the initial bounds.

Zooming only ever shrinks the viewport to a sub-rectangle of the current one;
there is no way back out.
*/
#[derive(Clone, Debug)]
pub struct Viewport {
    size: screen::Size,
    left: f64,
    bottom: f64,
    pixel_length_x: f64,
    pixel_length_y: f64,
    zoom_count: u32,
}

impl Viewport {
    /// `size` must be at least 2x2 and `bounds` must be valid; both are checked by
    /// [`crate::config::Config::validate`].
    pub fn new(size: screen::Size, bounds: Bounds) -> Self {
        debug_assert!(size.width >= 2 && size.height >= 2, "{:?}", size);
        debug_assert!(bounds.is_valid(), "{:?}", bounds);

        Self {
            size,
            left: bounds.left,
            bottom: bounds.bottom,
            pixel_length_x: (bounds.right - bounds.left) / (size.width - 1) as f64,
            pixel_length_y: (bounds.top - bounds.bottom) / (size.height - 1) as f64,
            zoom_count: 0,
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn pixel_to_plane(&self, x: u32, y: u32) -> Complex {
        Complex::new(
            self.left + x as f64 * self.pixel_length_x,
            self.bottom + y as f64 * self.pixel_length_y,
        )
    }

    /**
    Zoom in by `zoom_factor` so that the clicked pixel ends up near the middle of the raster.

    The new bottom-left corner is shifted by `click - size / (2 * zoom_factor)` pixels,
    clamped to `[0, size - size / zoom_factor]` on each axis so the new viewport
    stays inside the current one. `zoom_factor` must be greater than 1.
    */
    pub fn zoom_in(&mut self, click_x: f64, click_y: f64, zoom_factor: f64) {
        debug_assert!(zoom_factor > 1.0, "zoom factor {}", zoom_factor);

        let shift_x = zoom_shift(click_x, self.size.width, zoom_factor);
        let shift_y = zoom_shift(click_y, self.size.height, zoom_factor);

        self.left += shift_x * self.pixel_length_x;
        self.bottom += shift_y * self.pixel_length_y;

        self.pixel_length_x /= zoom_factor;
        self.pixel_length_y /= zoom_factor;

        self.zoom_count += 1;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.left,
            right: self.left + (self.size.width - 1) as f64 * self.pixel_length_x,
            bottom: self.bottom,
            top: self.bottom + (self.size.height - 1) as f64 * self.pixel_length_y,
        }
    }

    /// Plane length of one pixel, `(x, y)`.
    pub fn pixel_length(&self) -> (f64, f64) {
        (self.pixel_length_x, self.pixel_length_y)
    }

    pub fn zoom_count(&self) -> u32 {
        self.zoom_count
    }

    /// Whether neighbouring pixels have become too close for `f64` to tell apart.
    pub fn is_precision_exhausted(&self) -> bool {
        let bounds = self.bounds();
        let magnitude_x = bounds.left.abs().max(bounds.right.abs());
        let magnitude_y = bounds.bottom.abs().max(bounds.top.abs());
        self.pixel_length_x <= magnitude_x * f64::EPSILON
            || self.pixel_length_y <= magnitude_y * f64::EPSILON
    }
}

/// Pixel offset of the new bottom-left corner along one axis.
fn zoom_shift(click: f64, dimension: u32, zoom_factor: f64) -> f64 {
    let dimension = dimension as f64;
    let shift = click - dimension / (2.0 * zoom_factor);
    shift.max(0.0).min(dimension - dimension / zoom_factor)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const INITIAL_BOUNDS: Bounds = Bounds {
        left: -2.0,
        right: 1.0,
        bottom: -1.0,
        top: 1.0,
    };

    fn full_size() -> Viewport {
        Viewport::new(screen::Size::new(1800, 1200), INITIAL_BOUNDS)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn corners_map_to_initial_bounds() {
        let viewport = full_size();

        let bottom_left = viewport.pixel_to_plane(0, 0);
        assert_eq!(bottom_left, Complex::new(-2.0, -1.0));

        let top_right = viewport.pixel_to_plane(1799, 1199);
        assert_close(top_right.real, 1.0);
        assert_close(top_right.imaginary, 1.0);

        let bounds = viewport.bounds();
        assert_close(bounds.right, INITIAL_BOUNDS.right);
        assert_close(bounds.top, INITIAL_BOUNDS.top);
    }

    #[test]
    fn pixel_length_spans_the_raster() {
        let (x, y) = full_size().pixel_length();
        assert_eq!(x, 3.0 / 1799.0);
        assert_eq!(y, 2.0 / 1199.0);
    }

    #[test]
    fn centre_click_keeps_the_centre_and_halves_pixel_length() {
        let mut viewport = full_size();
        let centre = viewport.pixel_to_plane(900, 600);
        let (length_x, length_y) = viewport.pixel_length();

        viewport.zoom_in(900.0, 600.0, 2.0);

        let zoomed_centre = viewport.pixel_to_plane(900, 600);
        assert_close(zoomed_centre.real, centre.real);
        assert_close(zoomed_centre.imaginary, centre.imaginary);

        let (zoomed_x, zoomed_y) = viewport.pixel_length();
        assert_eq!(zoomed_x, length_x / 2.0);
        assert_eq!(zoomed_y, length_y / 2.0);
        assert_eq!(viewport.zoom_count(), 1);
    }

    #[test]
    fn click_at_origin_keeps_the_bottom_left_corner() {
        let mut viewport = full_size();
        viewport.zoom_in(0.0, 0.0, 2.0);

        let bounds = viewport.bounds();
        assert_eq!(bounds.left, INITIAL_BOUNDS.left);
        assert_eq!(bounds.bottom, INITIAL_BOUNDS.bottom);
    }

    #[test]
    fn click_at_far_corner_is_clamped() {
        let mut viewport = full_size();
        let (length_x, length_y) = viewport.pixel_length();
        viewport.zoom_in(1799.0, 1199.0, 2.0);

        let bounds = viewport.bounds();
        assert_close(bounds.left, INITIAL_BOUNDS.left + 900.0 * length_x);
        assert_close(bounds.bottom, INITIAL_BOUNDS.bottom + 600.0 * length_y);
    }

    #[test]
    fn zoom_shift_is_clamped_on_both_sides() {
        assert_eq!(zoom_shift(0.0, 1800, 2.0), 0.0);
        assert_eq!(zoom_shift(100.0, 1800, 4.0), 0.0);
        assert_eq!(zoom_shift(1799.0, 1800, 2.0), 900.0);
        assert_eq!(zoom_shift(1000.0, 1800, 2.0), 550.0);
    }

    #[test]
    fn zooms_accumulate() {
        let mut viewport = full_size();
        for _ in 0..3 {
            viewport.zoom_in(900.0, 600.0, 2.0);
        }
        let (length_x, _) = viewport.pixel_length();
        assert_close(length_x, 3.0 / 1799.0 / 8.0);
        assert_eq!(viewport.zoom_count(), 3);
    }

    #[test]
    fn precision_runs_out_after_deep_zoom() {
        let mut viewport = full_size();
        assert!(!viewport.is_precision_exhausted());
        for _ in 0..64 {
            viewport.zoom_in(900.0, 600.0, 2.0);
        }
        assert!(viewport.is_precision_exhausted());
    }

    #[test]
    fn bounds_validity() {
        assert!(INITIAL_BOUNDS.is_valid());
        assert!(!Bounds {
            left: 1.0,
            right: -2.0,
            ..INITIAL_BOUNDS
        }
        .is_valid());
        assert!(!Bounds {
            top: -1.0,
            ..INITIAL_BOUNDS
        }
        .is_valid());
        assert!(!Bounds {
            right: f64::INFINITY,
            ..INITIAL_BOUNDS
        }
        .is_valid());
    }

    proptest! {
        #[test]
        fn pixel_to_plane_is_pure(x in 0u32..1800, y in 0u32..1200) {
            let viewport = full_size();
            prop_assert_eq!(viewport.pixel_to_plane(x, y), viewport.pixel_to_plane(x, y));
        }

        #[test]
        fn zoomed_viewport_stays_inside_the_previous_one(
            click_x in 0.0f64..1800.0,
            click_y in 0.0f64..1200.0,
            zoom_factor in 1.01f64..16.0,
        ) {
            let mut viewport = full_size();
            let before = viewport.bounds();
            let (length_x, length_y) = viewport.pixel_length();

            viewport.zoom_in(click_x, click_y, zoom_factor);
            let after = viewport.bounds();

            let max_shift_x = 1800.0 - 1800.0 / zoom_factor;
            let max_shift_y = 1200.0 - 1200.0 / zoom_factor;
            prop_assert!(after.left >= before.left);
            prop_assert!(after.bottom >= before.bottom);
            prop_assert!(after.left <= before.left + max_shift_x * length_x + 1e-12);
            prop_assert!(after.bottom <= before.bottom + max_shift_y * length_y + 1e-12);
            // The far edges may overshoot by less than one of the previous pixels.
            prop_assert!(after.right < before.right + length_x);
            prop_assert!(after.top < before.top + length_y);
        }

        #[test]
        fn zoom_shift_stays_in_range(
            click in -100.0f64..2000.0,
            dimension in 2u32..4000,
            zoom_factor in 1.01f64..16.0,
        ) {
            let shift = zoom_shift(click, dimension, zoom_factor);
            let dimension = dimension as f64;
            prop_assert!(shift >= 0.0);
            prop_assert!(shift <= dimension - dimension / zoom_factor);
        }
    }
}
