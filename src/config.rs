use std::time::Duration;

use crate::{
    colour::{Colour, DEFAULT_COLOURS},
    error::Error,
    screen,
    viewport::Bounds,
};

/// Settings fixed for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct Config {
    pub title: String,
    /// Raster size, which is also the requested window size.
    pub size: screen::Size,
    pub max_iterations: u32,
    /// How much each click shrinks the visible part of the plane.
    pub zoom_factor: f64,
    pub initial_bounds: Bounds,
    pub palette: Vec<Colour>,
    /// Time the event loop waits between polls when there is nothing to do.
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::from("Mandelbrot Set"),
            size: screen::Size::new(1800, 1200),
            max_iterations: 100,
            zoom_factor: 2.0,
            initial_bounds: Bounds {
                left: -2.0,
                right: 1.0,
                bottom: -1.0,
                top: 1.0,
            },
            palette: DEFAULT_COLOURS.to_vec(),
            poll_interval: Duration::from_millis(30),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.size.width < 2 || self.size.height < 2 {
            return Err(Error::RasterTooSmall {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::ZeroIterationBudget);
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.0) {
            return Err(Error::InvalidZoomFactor(self.zoom_factor));
        }
        if self.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        if !self.initial_bounds.is_valid() {
            return Err(Error::DegenerateBounds(self.initial_bounds));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn single_pixel_rows_are_rejected() {
        let config = Config {
            size: screen::Size::new(1, 10),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::RasterTooSmall {
                width: 1,
                height: 10
            })
        ));
    }

    #[test]
    fn zero_iteration_budget_is_rejected() {
        let config = Config {
            max_iterations: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::ZeroIterationBudget)));
    }

    #[test]
    fn zoom_factor_must_shrink_the_view() {
        for zoom_factor in [1.0, 0.5, -2.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                zoom_factor,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidZoomFactor(_))
            ));
        }
    }

    #[test]
    fn empty_palette_is_rejected() {
        let config = Config {
            palette: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::EmptyPalette)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = Config {
            initial_bounds: Bounds {
                left: 1.0,
                right: -2.0,
                bottom: -1.0,
                top: 1.0,
            },
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::DegenerateBounds(_))));
    }
}
