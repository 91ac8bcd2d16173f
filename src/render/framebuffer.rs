use std::path::Path;

use image::{ImageBuffer, Rgb};

use crate::error::Result;

pub const BYTES_PER_PIXEL: usize = 4;

/// Colour and depth targets of one frame.
///
/// Colour is stored as `B, G, R, X` bytes per pixel, which is the memory
/// layout of an SDL `RGB888` streaming texture. Depth holds NDC `z`, smaller
/// is closer.
pub struct Framebuffer {
    width: usize,
    height: usize,
    color: Vec<u8>,
    depth: Vec<f32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);

        Self {
            width,
            height,
            color: vec![0; width * height * BYTES_PER_PIXEL],
            depth: vec![f32::INFINITY; width * height],
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

    /// Bytes per row.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.color
    }

    pub fn clear(&mut self, background: Rgb<u8>) {
        let [r, g, b] = background.0;
        for c in self.color.chunks_mut(BYTES_PER_PIXEL) {
            c.copy_from_slice(&[b, g, r, 0]);
        }

        for d in self.depth.iter_mut() {
            *d = f32::INFINITY;
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb<u8> {
        let offset = (y * self.width + x) * BYTES_PER_PIXEL;
        let c = &self.color[offset..offset + BYTES_PER_PIXEL];

        Rgb([c[2], c[1], c[0]])
    }

    #[inline]
    pub fn depth(&self, x: usize, y: usize) -> f32 {
        self.depth[y * self.width + x]
    }

    /// Colour and depth buffers, borrowed together for rasterization.
    pub(crate) fn targets_mut(&mut self) -> (&mut [u8], &mut [f32]) {
        (&mut self.color, &mut self.depth)
    }

    /// Writes the colour buffer out as an image, format chosen by extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let image = ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.pixel(x as usize, y as usize)
        });
        image.save(path)?;

        Ok(())
    }
}

#[test]
fn clear_fills_color_and_resets_depth() {
    let mut fb = Framebuffer::new(3, 2);
    fb.depth[4] = 0.5;

    fb.clear(Rgb([10, 20, 30]));

    assert_eq!(Rgb([10, 20, 30]), fb.pixel(2, 1));
    assert_eq!(&[30, 20, 10, 0], &fb.pixels()[..4]);
    assert_eq!(f32::INFINITY, fb.depth(1, 1));
    assert_eq!(12, fb.pitch());
}
