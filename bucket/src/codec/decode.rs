use common::Grid;
use rand::Rng;
use tracing::{debug, warn};

use super::Bitmap;
use crate::cell::Cell;
use crate::color::Color;
use crate::disjoint::DisjointForest;
use crate::error::{Error, Result};

/// Header token of a plain monochrome bitmap.
pub const BITMAP_MAGIC: &str = "P1";

/// Decodes a plain `P1` bitmap.
///
/// A magic token mismatch is logged and decoding continues. Digit `1` is
/// black; any other non-whitespace character is white.
pub fn decode(text: &str) -> Result<Bitmap> {
    decode_lines(text.lines())
}

/// Same as [`decode`], for input already split into lines.
pub fn decode_lines<I, S>(lines: I) -> Result<Bitmap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut header: Vec<String> = Vec::with_capacity(2);
    let mut pixels: Vec<bool> = Vec::new();

    for line in lines {
        let content = strip_comment(line.as_ref()).trim();
        if content.is_empty() {
            continue;
        }
        if header.len() < 2 {
            header.push(content.to_string());
            continue;
        }
        pixels.extend(
            content
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c == '1'),
        );
    }

    let magic = header.first().map(String::as_str).unwrap_or_default();
    let magic_matched = magic == BITMAP_MAGIC;
    if !magic_matched {
        warn!(
            found = magic,
            "P1 magic number not found, image parsing might fail"
        );
    }

    let size_line = header
        .get(1)
        .ok_or_else(|| Error::MalformedHeader("missing image size line".to_string()))?;
    let (width, height) = parse_dimensions(size_line)?;

    build(width, height, &pixels, magic_matched)
}

/// Builds a random bitmap where each pixel is black with probability `prob_black`.
///
/// The image goes through the regular decode path.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    prob_black: f64,
    rng: &mut R,
) -> Result<Bitmap> {
    let mut lines = Vec::with_capacity(height + 2);
    lines.push(BITMAP_MAGIC.to_string());
    lines.push(format!("{width} {height}"));
    for _ in 0..height {
        let row: String = (0..width)
            .map(|_| {
                if rng.random::<f64>() < prob_black {
                    '1'
                } else {
                    '0'
                }
            })
            .collect();
        lines.push(row);
    }

    decode_lines(lines)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_dimensions(line: &str) -> Result<(usize, usize)> {
    let malformed =
        || Error::MalformedHeader(format!("image size is not defined by two numbers: {line:?}"));

    let mut tokens = line.split_whitespace();
    let width = tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    let height = tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(malformed)?;

    let extra = tokens.count();
    if extra > 0 {
        warn!(extra, "ignoring trailing tokens after image size");
    }

    Ok((width, height))
}

fn build(width: usize, height: usize, pixels: &[bool], magic_matched: bool) -> Result<Bitmap> {
    let expected = width.checked_mul(height).ok_or_else(|| {
        Error::MalformedHeader(format!("image size {width}x{height} is too large"))
    })?;

    if pixels.len() < expected {
        return Err(Error::CorruptData {
            index: pixels.len(),
            expected,
        });
    }
    if pixels.len() > expected {
        debug!(
            surplus = pixels.len() - expected,
            "ignoring digits beyond width * height"
        );
    }

    let mut forest = DisjointForest::with_capacity(expected);
    let mut whites = Vec::new();

    let grid = Grid::from_fn(width, height, |x, y| {
        let black = pixels[y * width + x];
        let color = if black { Color::BLACK } else { Color::WHITE };
        let element = forest.insert(Cell::new(color, x, y));
        if !black {
            whites.push(element);
        }
        element
    });

    debug!(width, height, whites = whites.len(), "Decoded bitmap");

    Ok(Bitmap {
        forest,
        grid,
        whites,
        magic_matched,
    })
}
