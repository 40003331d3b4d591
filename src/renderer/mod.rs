//! Voxel-space software renderer.
//!
//! *The rest of the program never touches a pixel directly.*
//! [`FrameRenderer`] turns one camera pose plus the terrain pair into a
//! fully painted [`FrameBuffer`] of palette indices; expanding indices to
//! RGB and presenting them is the window loop's job.
//!
//! The buffer holds indices rather than colors so a frame costs one byte
//! per pixel and the palette can be swapped without re-rendering.

mod column;
mod frame;
mod frustum;

pub use column::march_column;
pub use frame::{FrameRenderer, SCALE_FACTOR, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use frustum::FrustumCorners;

/// Screen-sized grid of palette indices, row-major, top row first.
///
/// Exclusively written by the renderer during a frame, then loaned out for
/// presentation; there is no partial-frame state to clean up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// (Re)shape for the requested resolution and clear every pixel.
    pub fn reset(&mut self, width: usize, height: usize, background: u8) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.data.resize(width * height, 0);
        }
        self.data.fill(background);
    }

    /// Palette index at `(x, y)`; rows grow downward.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Paint rows `y_top .. y_bot` of column `x` with one index.
    ///
    /// Caller guarantees `y_top <= y_bot <= height` and `x < width`; the
    /// marcher's clamp upholds this for every span it emits.
    #[inline]
    pub fn fill_column_span(&mut self, x: usize, y_top: usize, y_bot: usize, idx: u8) {
        debug_assert!(x < self.width && y_top <= y_bot && y_bot <= self.height);
        for y in y_top..y_bot {
            self.data[y * self.width + x] = idx;
        }
    }

    /// Whole frame as a row-major index slice, for palette expansion.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.data
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_fill_touches_only_its_column() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_column_span(2, 1, 3, 9);
        for y in 0..4 {
            for x in 0..4 {
                let want = if x == 2 && (1..3).contains(&y) { 9 } else { 0 };
                assert_eq!(fb.at(x, y), want, "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn empty_span_writes_nothing() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_column_span(1, 2, 2, 9);
        assert!(fb.indices().iter().all(|&p| p == 0));
    }

    #[test]
    fn reset_reshapes_and_clears() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.fill_column_span(0, 0, 2, 5);
        fb.reset(3, 3, 7);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 3);
        assert!(fb.indices().iter().all(|&p| p == 7));
        assert_eq!(fb.indices().len(), 9);
    }
}
