use tracing::debug;

use super::Bitmap;
use crate::color::Color;
use crate::error::{Error, Result};

/// Header token of a plain RGB pixmap.
pub const PIXMAP_MAGIC: &str = "P3";
pub const MAX_CHANNEL_VALUE: u8 = 255;
/// Default modulus of the pixel line-break rule.
pub const DEFAULT_WRAP_PERIOD: usize = 70;

// "RRR GGG BBB " per pixel.
const PIXEL_TEXT_LEN: usize = 12;

/// Encodes the resolved color of every pixel as plain `P3` text.
///
/// Pixels are written row-major. A line break follows pixel `(x, y)` when
/// `(x * y + x + 1) % wrap_period == 0`, and every image row ends with one
/// more line break.
pub fn encode(bitmap: &Bitmap, wrap_period: usize) -> Result<String> {
    if wrap_period == 0 {
        return Err(Error::PreconditionViolation(
            "wrap period must be greater than zero".to_string(),
        ));
    }

    let (width, height) = (bitmap.width(), bitmap.height());
    let mut out = format!("{PIXMAP_MAGIC}\n{width} {height}\n{MAX_CHANNEL_VALUE}\n");
    out.reserve(width * height * PIXEL_TEXT_LEN + height);

    let mut breaks = 0usize;
    for y in 0..height {
        for x in 0..width {
            let color = bitmap.resolved_color(bitmap.grid()[(x, y)])?;
            push_color(&mut out, color);

            if (x * y + x + 1) % wrap_period == 0 {
                out.push('\n');
                breaks += 1;
            }
        }
        out.push('\n');
    }

    debug!(width, height, breaks, bytes = out.len(), "Encoded pixmap");
    Ok(out)
}

/// Encodes the resolved colors as an RGBA byte buffer, row-major, alpha 255.
pub fn encode_rgba(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bitmap.grid().len() * 4);
    for &element in bitmap.grid() {
        out.extend_from_slice(&bitmap.resolved_color(element)?.to_rgba());
    }
    Ok(out)
}

fn push_color(out: &mut String, color: Color) {
    for value in <[u8; 3]>::from(color) {
        push_padded(out, value);
        out.push(' ');
    }
}

fn push_padded(out: &mut String, value: u8) {
    out.push(char::from(b'0' + value / 100));
    out.push(char::from(b'0' + value / 10 % 10));
    out.push(char::from(b'0' + value % 10));
}
