//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use postdoc_render::{DEFAULT_THEME, DEFAULT_THEMES_DIR};

#[derive(Parser, Debug, Clone)]
#[command(name = "postdoc")]
#[command(about = "Generate documentation for an API collection using a theme")]
#[command(version)]
pub struct Args {
    #[arg(help = "Path to the collection JSON export")]
    pub collection: Option<PathBuf>,

    #[arg(
        short,
        long,
        env = "POSTDOC_THEME",
        default_value = DEFAULT_THEME,
        help = "Theme to render with"
    )]
    pub theme: String,

    #[arg(short, long, help = "Output file [default: stdout]")]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        env = "POSTDOC_THEMES_DIR",
        default_value = DEFAULT_THEMES_DIR,
        help = "Directory holding one sub-directory per theme"
    )]
    pub themes_dir: PathBuf,

    #[arg(long, help = "List available themes and exit")]
    pub list_themes: bool,

    #[arg(long, help = "Seed for generated element ids, for reproducible output")]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}
