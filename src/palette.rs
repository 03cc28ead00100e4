//! Export palette.

use rgb::RGB8;

/// Ordered colour table, indexed by the composed plane value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<RGB8>,
}

impl Palette {
    pub fn new(colors: Vec<RGB8>) -> Self {
        Self { colors }
    }

    /// Build from 12-bit `0x0RGB` hardware colour words. Each 4-bit channel
    /// is expanded to 8 bits (`0xA` becomes `0xAA`).
    pub fn from_rgb12(words: &[u16]) -> Self {
        let expand = |nibble: u16| (nibble & 0xF) as u8 * 17;
        Self {
            colors: words
                .iter()
                .map(|&w| RGB8::new(expand(w >> 8), expand(w >> 4), expand(w)))
                .collect(),
        }
    }

    /// Evenly spaced grey ramp with `2^depth` entries.
    pub fn grayscale(depth: u8) -> Self {
        let count = 1usize << depth.min(8);
        let colors = (0..count)
            .map(|i| {
                let v = if count == 1 { 0 } else { (i * 255 / (count - 1)) as u8 };
                RGB8::new(v, v, v)
            })
            .collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[RGB8] {
        &self.colors
    }
}

impl From<Vec<RGB8>> for Palette {
    fn from(colors: Vec<RGB8>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<RGB8> for Palette {
    fn from_iter<I: IntoIterator<Item = RGB8>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
