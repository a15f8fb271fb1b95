//! Escape-time evaluation of the Mandelbrot recurrence.

use crate::pixel::Complex;

/// Squared escape radius. A point escapes once `|z|^2` is strictly greater than this.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/**
Count how many applications of `z <- z^2 + c` it takes for `c` to escape.

The orbit starts at `z = c`, so a point already outside the escape radius
returns 0. A point that is still inside after `max_iterations` steps is treated
as a member of the set and returns `max_iterations`.
*/
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;
    for iteration in 0..max_iterations {
        if z.norm_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }

        z = Complex {
            real: z.real * z.real - z.imaginary * z.imaginary + c.real,
            imaginary: 2.0 * z.real * z.imaginary + c.imaginary,
        };
    }
    max_iterations
}
