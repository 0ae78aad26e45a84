//! Command-line interface.

use std::path::PathBuf;

use argh::FromArgs;

/// StickyPages - stick webpages to your desktop like post-it notes.
#[derive(FromArgs, Debug, Default, Clone, PartialEq)]
pub struct Cli {
    /// specify URL of the webpage rendered
    #[argh(option, short = 'u')]
    pub url: Option<String>,

    /// path to the settings file (default: config.json)
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,

    /// print the effective configuration as JSON and exit
    #[argh(switch)]
    pub dry_run: bool,
}
