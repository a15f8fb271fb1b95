//! Colouring of escape-time results.

use bytemuck::{Pod, Zeroable};

/// [`bytemuck`]-compatible `Rgba8Unorm` texel for a single pixel.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Points inside the set.
    pub const BLACK: Self = Colour::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Colours cycled through by escape time.
pub const DEFAULT_COLOURS: [Colour; 10] = [
    Colour::rgb(255, 102, 102),
    Colour::rgb(255, 255, 102),
    Colour::rgb(102, 255, 102),
    Colour::rgb(102, 255, 255),
    Colour::rgb(102, 179, 255),
    Colour::rgb(179, 102, 255),
    Colour::rgb(255, 102, 217),
    Colour::rgb(255, 102, 102),
    Colour::rgb(0, 0, 200),
    Colour::rgb(255, 0, 0),
];

/// A fixed palette indexed by escape time, with black reserved for points that never escaped.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Returns `None` when `colours` is empty.
    pub fn new(colours: Vec<Colour>) -> Option<Self> {
        if colours.is_empty() {
            None
        } else {
            Some(Self { colours })
        }
    }

    pub fn colour(&self, iterations: u32, max_iterations: u32) -> Colour {
        if iterations == max_iterations {
            Colour::BLACK
        } else {
            self.colours[iterations as usize % self.colours.len()]
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colours: DEFAULT_COLOURS.to_vec(),
        }
    }
}
