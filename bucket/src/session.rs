//! End-to-end pipeline: decode, link, colorize and encode one image.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::codec::{self, Bitmap};
use crate::colorizer::{link, Colorizer};
use crate::config::Config;
use crate::error::{Error, Result};

/// Outputs of one rendered image. Absent outputs were disabled in [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub width: usize,
    pub height: usize,
    /// Connected components after linking.
    pub components: usize,
    /// Encoded `P3` pixmap.
    pub text: Option<String>,
    /// Row-major RGBA display buffer.
    pub rgba: Option<Vec<u8>>,
}

/// Runs the pipeline phases in order with one colorizer.
///
/// Colors drawn for one image advance the colorizer's generator, so two
/// images processed by the same session get different colors even when the
/// session is seeded.
#[derive(Debug)]
pub struct Session {
    config: Config,
    colorizer: Colorizer,
}

impl Session {
    /// # Panics
    /// Panics if `config` fails [`Config::validate`].
    pub fn from_config(config: Config) -> Self {
        config.validate();
        let colorizer = Colorizer::new(config.seed);
        Self { config, colorizer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decodes `text` and links its white components.
    pub fn decode(&self, text: &str) -> Result<Bitmap> {
        let start = Instant::now();
        let mut bitmap = codec::decode(text)?;
        let unions = link(&mut bitmap)?;
        info!(
            width = bitmap.width(),
            height = bitmap.height(),
            unions,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Parsed image"
        );
        Ok(bitmap)
    }

    /// Colorizes a linked bitmap and produces the enabled outputs.
    pub fn render(&mut self, bitmap: &mut Bitmap) -> Result<Rendered> {
        let start = Instant::now();
        let colored = self.colorizer.colorize(bitmap)?;
        info!(
            colored,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Added colors"
        );

        let start = Instant::now();
        let rgba = if self.config.emit_rgba {
            Some(codec::encode_rgba(bitmap)?)
        } else {
            None
        };
        let text = if self.config.emit_text {
            Some(codec::encode(bitmap, self.config.wrap_period)?)
        } else {
            None
        };
        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Drew image"
        );

        Ok(Rendered {
            width: bitmap.width(),
            height: bitmap.height(),
            components: bitmap.component_count(),
            text,
            rgba,
        })
    }

    /// Decodes and renders `text` in one call.
    pub fn process(&mut self, text: &str) -> Result<Rendered> {
        let mut bitmap = self.decode(text)?;
        self.render(&mut bitmap)
    }

    /// Reads a `P1` bitmap from `input` and writes the `P3` text to `output`.
    ///
    /// Nothing is written when text output is disabled.
    pub fn process_file(&mut self, input: &Path, output: &Path) -> Result<Rendered> {
        let text = fs::read_to_string(input).map_err(|source| Error::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let rendered = self.process(&text)?;

        if let Some(encoded) = &rendered.text {
            fs::write(output, encoded).map_err(|source| Error::Write {
                path: output.to_path_buf(),
                source,
            })?;
            info!(path = %output.display(), bytes = encoded.len(), "Wrote pixmap");
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_utils::{test_output_path, write_test_file};

    const LINE: &str = "P1\n# vertical line\n4 3\n0100\n0100\n0100\n";

    fn seeded(config: Config) -> Session {
        Session::from_config(config.with_seed(21))
    }

    #[test]
    fn test_process_produces_both_outputs() {
        let mut session = seeded(Config::default());
        let rendered = session.process(LINE).unwrap();

        assert_eq!((rendered.width, rendered.height), (4, 3));
        // Left column, right block, three black pixels.
        assert_eq!(rendered.components, 5);

        let rgba = rendered.rgba.unwrap();
        assert_eq!(rgba.len(), 4 * 3 * 4);
        assert!(rgba.chunks(4).all(|px| px[3] == 255));
        assert_eq!(&rgba[4..8], &[0, 0, 0, 255]);

        let text = rendered.text.unwrap();
        assert!(text.starts_with("P3\n4 3\n255\n"));
        assert_eq!(text.lines().count(), 3 + 3);
        assert!(!text.contains("255 255 255 "));
    }

    #[test]
    fn test_outputs_follow_config() {
        let mut session = seeded(Config::text_only());
        let rendered = session.process(LINE).unwrap();
        assert!(rendered.rgba.is_none());
        assert!(rendered.text.is_some());

        let mut session = seeded(Config {
            emit_text: false,
            ..Config::default()
        });
        let rendered = session.process(LINE).unwrap();
        assert!(rendered.rgba.is_some());
        assert!(rendered.text.is_none());
    }

    #[test]
    fn test_component_pixels_share_color() {
        let mut session = seeded(Config::default());
        let rgba = session.process(LINE).unwrap().rgba.unwrap();
        let pixel = |x: usize, y: usize| &rgba[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];

        assert_eq!(pixel(0, 0), pixel(0, 2));
        assert_eq!(pixel(2, 0), pixel(3, 2));
        assert_eq!(pixel(1, 1), &[0, 0, 0, 255]);
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = seeded(Config::default()).process(LINE).unwrap();
        let b = seeded(Config::default()).process(LINE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_error_propagates() {
        let mut session = seeded(Config::default());
        assert!(matches!(
            session.process("P1\n2 2\n01\n"),
            Err(Error::CorruptData { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "wrap_period must be positive")]
    fn test_invalid_config_panics() {
        Session::from_config(Config {
            wrap_period: 0,
            ..Config::default()
        });
    }

    #[test]
    fn test_process_file_writes_pixmap() {
        let input = write_test_file("session_line.pbm", LINE);
        let output = test_output_path("session_line.ppm");

        let mut session = seeded(Config::text_only());
        let rendered = session.process_file(&input, &output).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(Some(written), rendered.text);
    }

    #[test]
    fn test_process_file_missing_input() {
        let input = test_output_path("session_does_not_exist.pbm");
        let output = test_output_path("session_unused.ppm");

        let mut session = seeded(Config::default());
        assert!(matches!(
            session.process_file(&input, &output),
            Err(Error::Read { .. })
        ));
    }
}
