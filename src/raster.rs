use std::time::Instant;

use log::trace;

use crate::{
    colour::{Colour, Palette},
    escape::escape_time,
    pixel::Pixel,
    screen,
    viewport::Viewport,
};

/// CPU-side image of the fractal, one [`Colour`] per pixel in row-major order.
pub struct Raster {
    size: screen::Size,
    colours: Vec<Colour>,
}

impl Raster {
    pub fn new(size: screen::Size) -> Self {
        Self {
            size,
            colours: vec![Colour::BLACK; size.area()],
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[cfg(test)]
    pub fn get(&self, pixel: Pixel) -> Colour {
        self.colours[self.size.index(pixel)]
    }

    /// Evaluate every pixel of `viewport` and overwrite the raster with its colour.
    pub fn render(&mut self, viewport: &Viewport, palette: &Palette, max_iterations: u32) {
        debug_assert_eq!(viewport.size(), self.size);

        trace!("begin render");
        let started = Instant::now();

        for (pixel, colour) in self.size.pixels().zip(self.colours.iter_mut()) {
            let point = viewport.pixel_to_plane(pixel.x, pixel.y);
            *colour = palette.colour(escape_time(point, max_iterations), max_iterations);
        }

        trace!("end render ({:?})", started.elapsed());
    }
}
