//! Raster export: tight cropping and PNG encoding with DPI metadata.

use crate::domain::errors::ChartError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

const METERS_PER_INCH: f64 = 0.0254;

/// Packed 8-bit RGB pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Inclusive-exclusive pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelBox {
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

impl RasterImage {
    /// A canvas filled with one colour.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[i..i + 3].copy_from_slice(&rgb);
    }

    /// Smallest box holding every pixel that differs from `background`.
    /// `None` for a blank canvas.
    pub fn content_bounds(&self, background: [u8; 3]) -> Option<PixelBox> {
        let mut bounds: Option<PixelBox> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixel(x, y) == background {
                    continue;
                }
                let b = bounds.get_or_insert(PixelBox {
                    x0: x,
                    y0: y,
                    x1: x + 1,
                    y1: y + 1,
                });
                b.x0 = b.x0.min(x);
                b.y0 = b.y0.min(y);
                b.x1 = b.x1.max(x + 1);
                b.y1 = b.y1.max(y + 1);
            }
        }
        bounds
    }

    pub fn crop(&self, area: PixelBox) -> RasterImage {
        let row_bytes = area.width() as usize * 3;
        let mut pixels = Vec::with_capacity(row_bytes * area.height() as usize);
        for y in area.y0..area.y1 {
            let start = (y as usize * self.width as usize + area.x0 as usize) * 3;
            pixels.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        RasterImage {
            width: area.width(),
            height: area.height(),
            pixels,
        }
    }

    /// Crop to the content bounds plus `padding` pixels on every side,
    /// clamped to the canvas. A blank canvas is returned whole.
    pub fn crop_to_content(&self, background: [u8; 3], padding: u32) -> RasterImage {
        let Some(content) = self.content_bounds(background) else {
            return self.clone();
        };
        let area = PixelBox {
            x0: content.x0.saturating_sub(padding),
            y0: content.y0.saturating_sub(padding),
            x1: content.x1.saturating_add(padding).min(self.width),
            y1: content.y1.saturating_add(padding).min(self.height),
        };
        debug!(
            "Tight crop {}x{} -> {}x{}",
            self.width,
            self.height,
            area.width(),
            area.height()
        );
        self.crop(area)
    }
}

pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

/// Encode as 8-bit RGB PNG carrying a `pHYs` chunk for `dpi`.
pub fn encode_png<W: Write>(image: &RasterImage, dpi: u32, writer: W) -> Result<(), ChartError> {
    let ppm = dpi_to_pixels_per_meter(dpi);
    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.pixels)?;
    png_writer.finish()?;
    Ok(())
}

/// Write `image` to `path` as a PNG. The file handle is scoped to this call.
pub fn write_png(image: &RasterImage, dpi: u32, path: &Path) -> Result<(), ChartError> {
    let io_err = |source| ChartError::Io {
        path: path.display().to_string(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    encode_png(image, dpi, &mut out)?;
    out.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 3] = [255, 255, 255];
    const INK: [u8; 3] = [10, 20, 30];

    fn canvas_with_dot(w: u32, h: u32, x: u32, y: u32) -> RasterImage {
        let mut img = RasterImage::filled(w, h, WHITE);
        img.set_pixel(x, y, INK);
        img
    }

    #[test]
    fn test_content_bounds_single_pixel() {
        let img = canvas_with_dot(20, 10, 7, 3);
        assert_eq!(
            img.content_bounds(WHITE),
            Some(PixelBox {
                x0: 7,
                y0: 3,
                x1: 8,
                y1: 4
            })
        );
    }

    #[test]
    fn test_blank_canvas_is_not_cropped() {
        let img = RasterImage::filled(5, 4, WHITE);
        assert_eq!(img.content_bounds(WHITE), None);
        assert_eq!(img.crop_to_content(WHITE, 2), img);
    }

    #[test]
    fn test_padding_is_clamped_to_canvas() {
        let img = canvas_with_dot(20, 10, 1, 8);
        let cropped = img.crop_to_content(WHITE, 3);
        // x: [0, 5), y: [5, 10)
        assert_eq!((cropped.width, cropped.height), (5, 5));
        assert_eq!(cropped.pixel(1, 3), INK);
    }

    #[test]
    fn test_crop_keeps_pixel_contents() {
        let mut img = RasterImage::filled(30, 30, WHITE);
        img.set_pixel(10, 10, INK);
        img.set_pixel(20, 15, [200, 0, 0]);
        let cropped = img.crop_to_content(WHITE, 0);
        assert_eq!((cropped.width, cropped.height), (11, 6));
        assert_eq!(cropped.pixel(0, 0), INK);
        assert_eq!(cropped.pixel(10, 5), [200, 0, 0]);
        assert_eq!(cropped.pixel(5, 2), WHITE);
    }

    #[test]
    fn test_dpi_conversion() {
        assert_eq!(dpi_to_pixels_per_meter(300), 11811);
        assert_eq!(dpi_to_pixels_per_meter(72), 2835);
    }

    #[test]
    fn test_encoded_png_carries_dpi() {
        let img = canvas_with_dot(4, 3, 2, 1);
        let mut bytes = Vec::new();
        encode_png(&img, 300, &mut bytes).unwrap();

        let decoder = png::Decoder::new(bytes.as_slice());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (4, 3));
        let dims = info.pixel_dims.expect("pHYs chunk");
        assert_eq!(dims.xppu, 11811);
        assert_eq!(dims.unit, png::Unit::Meter);
    }
}
