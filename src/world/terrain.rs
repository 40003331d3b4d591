//! Toroidal 8-bit sample grids and the height/color pair the renderer reads.
//!
//! * A [`MapGrid`] wraps both axes, so every `(x, y)` lookup is total —
//!   there is no out-of-bounds, only wraparound.
//! * [`TerrainMaps`] pairs one elevation grid with one palette-index grid of
//!   the same dimensions; the pairing is validated once at construction so
//!   the render loop never has to.

use thiserror::Error;

/// Errors that can be encountered while assembling terrain grids.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TerrainError {
    /// One of the grid dimensions is zero.
    #[error("grid dimensions must be non-zero, got {0}x{1}")]
    EmptyGrid(usize, usize),

    /// Sample vector length disagrees with the declared dimensions.
    #[error("grid data holds {got} samples, {w}x{h} needs {}", .w * .h)]
    BadLength { w: usize, h: usize, got: usize },

    /// Height and color grids must correlate 1:1 per cell.
    #[error("height grid is {hw}x{hh} but color grid is {cw}x{ch}")]
    DimensionMismatch {
        hw: usize,
        hh: usize,
        cw: usize,
        ch: usize,
    },
}

/// One row-major grid of `u8` samples with wraparound addressing.
#[derive(Clone, Debug)]
pub struct MapGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl MapGrid {
    /// Build a grid from row-major samples, validating the length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, TerrainError> {
        if width == 0 || height == 0 {
            return Err(TerrainError::EmptyGrid(width, height));
        }
        if data.len() != width * height {
            return Err(TerrainError::BadLength {
                w: width,
                h: height,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Uniform grid filled with `value` (handy for tests and flat worlds).
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self, TerrainError> {
        Self::from_raw(width, height, vec![value; width * height])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample with both axes wrapped into bounds.
    ///
    /// `rem_euclid` keeps negative coordinates on the torus too; the classic
    /// power-of-two AND mask is just a special case of this contract.
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> u8 {
        let xi = x.rem_euclid(self.width as i32) as usize;
        let yi = y.rem_euclid(self.height as i32) as usize;
        self.data[yi * self.width + xi]
    }
}

/// Elevation + palette-index grid pair, read-only to the renderer.
#[derive(Clone, Debug)]
pub struct TerrainMaps {
    height: MapGrid,
    color: MapGrid,
}

impl TerrainMaps {
    /// Pair the two grids, rejecting mismatched dimensions up front.
    pub fn new(height: MapGrid, color: MapGrid) -> Result<Self, TerrainError> {
        if height.width != color.width || height.height != color.height {
            return Err(TerrainError::DimensionMismatch {
                hw: height.width,
                hh: height.height,
                cw: color.width,
                ch: color.height,
            });
        }
        Ok(Self { height, color })
    }

    /// Elevation sample at the wrapped `(x, y)` cell.
    #[inline]
    pub fn height_at(&self, x: i32, y: i32) -> u8 {
        self.height.at(x, y)
    }

    /// Palette index at the wrapped `(x, y)` cell.
    #[inline]
    pub fn color_at(&self, x: i32, y: i32) -> u8 {
        self.color.at(x, y)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.height.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.height.height
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
