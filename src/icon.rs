//! Circle icon rendering.
//!
//! This module draws a single status icon: a filled circle inscribed in a
//! square, transparent canvas with a margin of 10% of the side length.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::color::Color;
use crate::error::{Error, Result};

/// A rectangle defined in pixel coordinates.
///
/// Used to describe the region of an icon covered by its drawn shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge coordinate (x + width), exclusive.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height), exclusive.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the inclusive bottom-right pixel, or `None` for an empty rectangle.
    pub fn last_pixel(&self) -> Option<(u32, u32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some((self.right() - 1, self.bottom() - 1))
    }

    /// Returns true if the pixel lies inside the inscribed ellipse.
    ///
    /// The rectangle is treated as covering whole pixel cells; a pixel is
    /// inside when its center falls within the ellipse.
    pub fn ellipse_contains(&self, px: u32, py: u32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let rx = self.width as f64 / 2.0;
        let ry = self.height as f64 / 2.0;
        let cx = self.x as f64 + rx;
        let cy = self.y as f64 + ry;

        let dx = (px as f64 + 0.5 - cx) / rx;
        let dy = (py as f64 + 0.5 - cy) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A single status icon to generate: which state, at what size, in what color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub status: String,
    pub size: u32,
    pub color: Color,
}

impl IconSpec {
    pub fn new(status: impl Into<String>, size: u32, color: Color) -> Self {
        Self {
            status: status.into(),
            size,
            color,
        }
    }

    /// Renders this icon in memory.
    pub fn render(&self) -> Result<IconImage> {
        render_circle(self.size, self.color)
    }
}

/// A rendered icon with its associated metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,

    /// The bounding box of the drawn circle.
    pub content_bounds: RectPx,
}

impl IconImage {
    /// Creates a new icon image with the given data and content bounds.
    pub fn new(data: RgbaImage, content_bounds: RectPx) -> Self {
        Self {
            data,
            content_bounds,
        }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Encodes the image as PNG and writes it to `path`, replacing any
    /// existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.data
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| Error::Save {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Returns the margin between the image edge and the circle: `floor(size * 0.1)`.
pub fn padding_for(size: u32) -> u32 {
    size / 10
}

/// Returns the bounding box of the circle for an icon of the given size.
///
/// The box spans `padding..=size - padding - 1` on both axes.
pub fn circle_bounds(size: u32) -> RectPx {
    let padding = padding_for(size);
    let diameter = size.saturating_sub(2 * padding);
    RectPx::new(padding, padding, diameter, diameter)
}

/// Renders a filled circle of `color` on a transparent `size x size` canvas.
///
/// Pixels outside the circle stay `(0, 0, 0, 0)`. No anti-aliasing is applied.
pub fn render_circle(size: u32, color: Color) -> Result<IconImage> {
    if size == 0 {
        return Err(Error::InvalidSize);
    }

    let bounds = circle_bounds(size);
    let fill = color.to_pixel();
    let mut data = RgbaImage::from_pixel(size, size, Color::TRANSPARENT.to_pixel());

    for (x, y, pixel) in data.enumerate_pixels_mut() {
        if bounds.ellipse_contains(x, y) {
            *pixel = fill;
        }
    }

    Ok(IconImage::new(data, bounds))
}

/// Renders a circle icon and writes it as PNG to `destination`.
pub fn render_icon(size: u32, color: Color, destination: &Path) -> Result<()> {
    let icon = render_circle(size, color)?;
    icon.save(destination)?;
    tracing::info!(event = "icon_saved", path = %destination.display(), size, color = %color);
    Ok(())
}
