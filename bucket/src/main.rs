use std::env;
use std::path::Path;

use anyhow::{bail, Context};
use tracing::{info, warn};

use bucket::{Config, Session};
use common::log_setup::{setup_logging, LogOptions};

const USAGE: &str = "usage: bucket <input.pbm> <output.ppm> [config.yaml|config.json]\n\
                     The pixmap file is always written; emit_rgba and emit_text are ignored.";

/// Forces text output on and the display buffer off; there is no display here.
fn file_only(config: Config) -> Config {
    if config.emit_rgba || !config.emit_text {
        warn!(
            emit_rgba = config.emit_rgba,
            emit_text = config.emit_text,
            "Output selection is ignored on the command line, writing the pixmap file only"
        );
    }
    Config {
        emit_rgba: false,
        emit_text: true,
        ..config
    }
}

fn main() -> anyhow::Result<()> {
    setup_logging(&LogOptions::new("bucket"));

    let args: Vec<String> = env::args().skip(1).collect();
    let (input, output, config) = match args.as_slice() {
        [input, output] => (input, output, Config::text_only()),
        [input, output, config] => (input, output, file_only(Config::from_file(config)?)),
        _ => bail!(USAGE),
    };

    let mut session = Session::from_config(config);

    let rendered = session
        .process_file(Path::new(input), Path::new(output))
        .with_context(|| format!("Failed to colorize {input}"))?;

    info!(
        width = rendered.width,
        height = rendered.height,
        components = rendered.components,
        "Done"
    );
    Ok(())
}
