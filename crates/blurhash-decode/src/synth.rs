//! Image reconstruction: the 2D inverse DCT over the decoded components.
//!
//! Each output pixel is the sum of every component weighted by
//! `cos(PI * x * nx / width) * cos(PI * y * ny / height)`. The basis is
//! separable, so per-axis cosine tables are built once per render and looked
//! up in the pixel loop.

use std::f64::consts::PI;

use log::debug;

use crate::color::Color;
use crate::components::ComponentGrid;
use crate::options::resolve_size;
use crate::pixels::{PixelBuffer, CHANNELS};

/// Cosine table for one axis, laid out `[frequency][position]`.
struct CosineTable {
    len: usize,
    values: Vec<f64>,
}

impl CosineTable {
    fn new(frequencies: u32, len: u32) -> Self {
        let lenf = len as f64;
        let values = (0..frequencies)
            .flat_map(|n| (0..len).map(move |p| (PI * p as f64 * n as f64 / lenf).cos()))
            .collect();
        Self {
            len: len as usize,
            values,
        }
    }

    #[inline]
    fn get(&self, frequency: usize, position: usize) -> f64 {
        self.values[frequency * self.len + position]
    }
}

impl ComponentGrid {
    /// Render the grid into a `width` x `height` RGBA image.
    ///
    /// An empty size (either dimension zero) renders at the default 32x32.
    ///
    /// ```
    /// use blurhash_decode::ComponentGrid;
    /// let grid = ComponentGrid::parse("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 1.0).unwrap();
    /// let small = grid.render(4, 3);
    /// let large = grid.render(64, 48);
    /// assert_eq!(small.pixel(0, 0), large.pixel(0, 0));
    /// ```
    pub fn render(&self, width: u32, height: u32) -> PixelBuffer {
        let (width, height) = resolve_size(width, height);
        let (components_x, components_y) = self.dimensions();
        debug!("rendering {components_x}x{components_y} components at {width}x{height}");

        let cos_x = CosineTable::new(components_x, width);
        let cos_y = CosineTable::new(components_y, height);
        let row_len = width as usize * CHANNELS;
        let mut data = vec![0u8; row_len * height as usize];

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            data.par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| self.render_row(&cos_x, &cos_y, y, row));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (y, row) in data.chunks_mut(row_len).enumerate() {
                self.render_row(&cos_x, &cos_y, y, row);
            }
        }

        PixelBuffer::from_raw(width, height, data)
    }

    fn render_row(&self, cos_x: &CosineTable, cos_y: &CosineTable, y: usize, row: &mut [u8]) {
        let (components_x, components_y) = self.dimensions();
        let colors = self.colors();

        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let mut sum = Color::ZERO;
            for ny in 0..components_y as usize {
                let basis_y = cos_y.get(ny, y);
                for nx in 0..components_x as usize {
                    let basis = cos_x.get(nx, x) * basis_y;
                    sum += colors[nx + ny * components_x as usize] * basis;
                }
            }

            let [r, g, b] = sum.to_srgb();
            px.copy_from_slice(&[r, g, b, u8::MAX]);
        }
    }
}
