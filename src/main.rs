//! Kanji Colorize CLI
//!
//! Usage:
//!   kanji-colorize [OPTIONS] [INPUT]
//!
//! Without INPUT, colorizes KanjiVG diagrams from the source directory into
//! the output directory. With INPUT, colorizes that one SVG file and prints
//! the result.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use kanji_colorize::{
    transform, ColorMode, Colorizer, ColorizerConfig, FilenameMode, KanjiVgSource,
    OutputDirectory,
};

#[derive(Parser)]
#[command(name = "kanji-colorize", version)]
#[command(about = "Create a set of colored stroke order SVGs")]
struct Cli {
    /// Colorize this SVG file and print it instead of writing a set
    input: Option<PathBuf>,

    /// TOML file with default settings; flags given here override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// spectrum: color progresses evenly through the spectrum; nice for seeing
    /// the way the kanji is put together at a glance, but consecutive strokes
    /// get similar colors. contrast: maximizes contrast among any group of
    /// consecutive strokes using the golden ratio, with the same sequence for
    /// every kanji. [default: spectrum]
    #[arg(long, value_enum)]
    mode: Option<ColorMode>,

    /// Saturation where 0 is white/gray/black and 1 is completely colorful [default: 0.95]
    #[arg(long)]
    saturation: Option<f64>,

    /// Value where 0 is black and 1 is colored or white [default: 0.75]
    #[arg(long)]
    value: Option<f64>,

    /// Image size in pixels; images are square [default: 327]
    #[arg(long)]
    image_size: Option<u32>,

    /// Color kanji groups instead of stroke by stroke
    #[arg(long)]
    group_mode: bool,

    /// Characters to include, without spaces; `X-Variant` entries may be
    /// separated by commas. When omitted, every diagram is included
    #[arg(long)]
    characters: Option<String>,

    /// character: name files after the character. code: keep the code point name
    #[arg(long, value_enum, default_value_t = FilenameMode::Character)]
    filename_mode: FilenameMode,

    /// Directory the colorized diagrams are written to
    #[arg(short, long, default_value = "colorized-kanji")]
    output_directory: PathBuf,

    /// Directory holding the KanjiVG source diagrams
    #[arg(long, default_value = "kanjivg/kanji")]
    source_directory: PathBuf,

    /// Draw a dashed guide grid under the strokes
    #[arg(long)]
    enable_grid: bool,

    /// Guide grid color [default: #c4c4c4]
    #[arg(long)]
    grid_color: Option<String>,

    /// Guide grid inset from the border [default: 1]
    #[arg(long)]
    grid_offset: Option<i32>,

    /// Log what is being done to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer the flags given on the command line over `config`
    fn apply(&self, mut config: ColorizerConfig) -> ColorizerConfig {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(saturation) = self.saturation {
            config.saturation = saturation;
        }
        if let Some(value) = self.value {
            config.value = value;
        }
        if let Some(size) = self.image_size {
            config.image_size = size;
        }
        if self.group_mode {
            config.group_mode = true;
        }
        if self.enable_grid {
            config.enable_grid = true;
        }
        if let Some(color) = &self.grid_color {
            config.grid_color = color.clone();
        }
        if let Some(offset) = self.grid_offset {
            config.grid_offset = offset;
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // Load config file
    let base = match &cli.config {
        Some(path) => match ColorizerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ColorizerConfig::default(),
    };
    let config = cli.apply(base);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Single file mode
    if let Some(path) = &cli.input {
        let source = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        match transform(&source, &config) {
            Ok(svg) => print!("{}", svg),
            Err(e) => {
                eprintln!("{}", e.format(&source, &path.display().to_string()));
                std::process::exit(1);
            }
        }
        return;
    }

    let colorizer = Colorizer::new(config, KanjiVgSource::new(&cli.source_directory))
        .with_filename_mode(cli.filename_mode);
    let output = OutputDirectory::new(&cli.output_directory);
    if let Err(e) = colorizer.write_all(cli.characters.as_deref(), &output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "kanji-colorize",
            "--mode",
            "contrast",
            "--image-size",
            "100",
            "--enable-grid",
        ]);
        let base = ColorizerConfig::default()
            .with_saturation(0.5)
            .with_image_size(500);
        let config = cli.apply(base);
        assert_eq!(config.mode, ColorMode::Contrast);
        assert_eq!(config.image_size, 100);
        assert_eq!(config.saturation, 0.5);
        assert!(config.enable_grid);
        assert!(!config.group_mode);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["kanji-colorize"]);
        assert_eq!(cli.output_directory, PathBuf::from("colorized-kanji"));
        assert_eq!(cli.filename_mode, FilenameMode::Character);
        assert_eq!(cli.apply(ColorizerConfig::default()), ColorizerConfig::default());
    }
}
