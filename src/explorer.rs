//! Interactive state: what is on screen and how clicks change it.

use log::{debug, warn};

use crate::{
    colour::Palette, config::Config, error::Error, raster::Raster, viewport::Viewport,
};

pub struct Explorer {
    config: Config,
    viewport: Viewport,
    palette: Palette,
    raster: Raster,
    warned_precision: bool,
}

impl Explorer {
    /// Validate `config` and render the initial view.
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;

        let palette = Palette::new(config.palette.clone()).ok_or(Error::EmptyPalette)?;
        let viewport = Viewport::new(config.size, config.initial_bounds);
        let raster = Raster::new(config.size);

        let mut explorer = Self {
            config,
            viewport,
            palette,
            raster,
            warned_precision: false,
        };
        explorer.render();
        Ok(explorer)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn render(&mut self) {
        self.raster
            .render(&self.viewport, &self.palette, self.config.max_iterations);
    }

    /// Zoom in around a click at raster position `(x, y)` and re-render.
    pub fn click(&mut self, x: f64, y: f64) {
        self.viewport.zoom_in(x, y, self.config.zoom_factor);

        debug!(
            "zoom {} at ({:.1}, {:.1}): {:?}, pixel length {:?}",
            self.viewport.zoom_count(),
            x,
            y,
            self.viewport.bounds(),
            self.viewport.pixel_length()
        );

        if !self.warned_precision && self.viewport.is_precision_exhausted() {
            warn!(
                "zoomed past f64 precision after {} zooms, neighbouring pixels now map to the same point",
                self.viewport.zoom_count()
            );
            self.warned_precision = true;
        }

        self.render();
    }
}
