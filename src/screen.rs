use bytemuck::{Pod, Zeroable};

use crate::pixel::Pixel;

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `pixel` into a buffer covering this size.
    pub fn index(self, pixel: Pixel) -> usize {
        pixel.y as usize * self.width as usize + pixel.x as usize
    }

    /// Map a position on a surface of this size to the same relative position on `target`.
    pub fn scale_point(self, x: f64, y: f64, target: Size) -> (f64, f64) {
        (
            x * target.width as f64 / self.width as f64,
            y * target.height as f64 / self.height as f64,
        )
    }

    pub fn pixels(self) -> Pixels {
        Pixels {
            size: self,
            next: Pixel { x: 0, y: 0 },
        }
    }
}

/// Every pixel of a raster in row-major order.
#[derive(Clone, Debug)]
pub struct Pixels {
    size: Size,
    next: Pixel,
}

impl Iterator for Pixels {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.size.width == 0 || self.next.y >= self.size.height {
            return None;
        }

        let pixel = self.next;
        self.next.x += 1;
        if self.next.x >= self.size.width {
            self.next.x = 0;
            self.next.y += 1;
        }
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.size.width == 0 || self.next.y >= self.size.height {
            0
        } else {
            self.size.area() - self.size.index(self.next)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pixels {}
