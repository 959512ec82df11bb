use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorMode, LogLevel};

/// Token that switches on file listing when given after the path.
pub const FILES_FLAG: &str = "-f";

/// Print the directory hierarchy below a path as a tree.
///
/// Options go before the path, everything after it is read positionally.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Root directory to scan
    pub path: PathBuf,

    /// Pass `-f` to list files with their sizes
    #[clap(allow_hyphen_values = true, value_name = "-f")]
    pub mode: Option<String>,

    #[clap(long, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    #[clap(long, default_value = "never", value_enum)]
    pub color: ColorMode,
}

impl Cli {
    pub fn include_files(&self) -> bool {
        self.mode.as_deref() == Some(FILES_FLAG)
    }
}
