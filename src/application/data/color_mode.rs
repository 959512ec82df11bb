use clap::ValueEnum;
use supports_color::Stream;

/// When to paint directory labels.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Never,
    Auto,
    Always,
}

impl ColorMode {
    /// Resolves the mode against the capabilities of stdout.
    pub fn enabled_for_stdout(self) -> bool {
        match self {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => supports_color::on(Stream::Stdout).is_some(),
        }
    }
}
