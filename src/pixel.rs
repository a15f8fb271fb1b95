/// A point on the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    pub fn norm_squared(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }
}

/// A position on the raster. `y` grows downwards, row 0 is the first row uploaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}
