use std::path::PathBuf;

use crate::application::data::ColorMode;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub include_files: bool,
    pub color: ColorMode,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            include_files: cli.include_files(),
            root: cli.path,
            color: cli.color,
        }
    }
}
