// 256-entry index → RGB lookup applied once at present time.
// The renderer itself only ever emits indices.

use std::ops::{Index, IndexMut};

/// Palette index 0 is cleared to this sky tone, exactly like the original
/// reprogrammed VGA entry 0 after loading its maps.
pub const SKY_RGB: (u8, u8, u8) = (36, 36, 56);

/// Display colors as packed `0x00RRGGBB`, the format `minifb` wants.
#[derive(Debug)]
pub struct Palette(pub [u32; 256]);

impl Default for Palette {
    /// Grayscale ramp with the sky entry at 0 — usable when the color map
    /// came without palette information.
    fn default() -> Self {
        let mut pal = Palette([0u32; 256]);
        for i in 0..256 {
            let v = i as u8;
            pal[i] = pack(v, v, v);
        }
        pal.set_sky();
        pal
    }
}

impl Index<usize> for Palette {
    type Output = u32;
    fn index(&self, idx: usize) -> &u32 {
        &self.0[idx]
    }
}
impl IndexMut<usize> for Palette {
    fn index_mut(&mut self, idx: usize) -> &mut u32 {
        &mut self.0[idx]
    }
}

#[inline]
fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

impl Palette {
    /// Build from up to 256 RGB triples; missing entries stay black.
    pub fn from_rgb(triples: &[[u8; 3]]) -> Self {
        let mut pal = Palette([0u32; 256]);
        for (i, [r, g, b]) in triples.iter().take(256).enumerate() {
            pal[i] = pack(*r, *g, *b);
        }
        pal
    }

    pub fn set(&mut self, idx: u8, r: u8, g: u8, b: u8) {
        self[idx as usize] = pack(r, g, b);
    }

    /// Force entry 0 to the classic sky color.
    pub fn set_sky(&mut self) {
        let (r, g, b) = SKY_RGB;
        self.set(0, r, g, b);
    }

    /// Expand an index buffer into a packed-RGB buffer of the same length.
    pub fn expand(&self, indices: &[u8], out: &mut [u32]) {
        debug_assert_eq!(indices.len(), out.len());
        for (dst, &idx) in out.iter_mut().zip(indices) {
            *dst = self.0[idx as usize];
        }
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
