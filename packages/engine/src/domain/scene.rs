//! Scene images
//!
//! A scene is a picture of the starting grid: pure white pixels are
//! terrain, pure red pixels are one unit of liquid, everything else is
//! open space. Alpha is ignored.

use crate::error::EngineError;

const WHITE: [u8; 3] = [255, 255, 255];
const RED: [u8; 3] = [255, 0, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneCell {
    Open,
    Solid,
    Liquid(u32),
}

impl SceneCell {
    #[inline]
    pub fn classify(rgb: [u8; 3]) -> Self {
        match rgb {
            WHITE => SceneCell::Solid,
            RED => SceneCell::Liquid(1),
            _ => SceneCell::Open,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    width: u32,
    height: u32,
    cells: Vec<SceneCell>,
}

impl Scene {
    /// Decode an encoded image (PNG)
    pub fn decode(bytes: &[u8]) -> Result<Self, EngineError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.as_raw())
    }

    /// Raw RGBA8 rows, e.g. canvas `ImageData`
    pub fn from_rgba(width: u32, height: u32, pixels: &[u8]) -> Result<Self, EngineError> {
        Self::from_channels(width, height, pixels, 4)
    }

    /// Raw packed RGB8 rows
    pub fn from_rgb(width: u32, height: u32, pixels: &[u8]) -> Result<Self, EngineError> {
        Self::from_channels(width, height, pixels, 3)
    }

    fn from_channels(width: u32, height: u32, pixels: &[u8], channels: usize) -> Result<Self, EngineError> {
        let expected = (width as usize) * (height as usize) * channels;
        if pixels.len() != expected {
            return Err(EngineError::SceneSize {
                width,
                height,
                len: pixels.len(),
            });
        }

        let cells = pixels
            .chunks_exact(channels)
            .map(|p| SceneCell::classify([p[0], p[1], p[2]]))
            .collect();

        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    /// Non-open cells as `(x, y, cell)`
    pub fn features(&self) -> impl Iterator<Item = (i32, i32, SceneCell)> + '_ {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != SceneCell::Open)
            .map(move |(i, c)| ((i % w) as i32, (i / w) as i32, *c))
    }
}
