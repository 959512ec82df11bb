use std::io::{self, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::filesystem::{self, TreeBuildError};
use crate::render::{RenderError, TreeRenderer};

pub struct Application;

impl Application {
    /// Builds the tree for the configured root and prints it to stdout.
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let paint = app_config.color.enabled_for_stdout();
        if paint {
            colored::control::set_override(true);
        }

        Self::run_with_writer(&app_config, io::stdout().lock(), paint)
    }

    pub fn run_with_writer(
        app_config: &RuntimeConfig,
        out: impl Write,
        paint: bool,
    ) -> Result<(), ApplicationError> {
        debug!("Running with config: {:?}", app_config);

        let nodes = filesystem::build(&app_config.root, app_config.include_files)
            .context(TreeBuildSnafu)?;
        info!("Built tree with {} top level entries", nodes.len());

        TreeRenderer::new(out)
            .with_color(paint)
            .render(&nodes)
            .context(RenderSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while scanning the directory tree"))]
    TreeBuildError { source: TreeBuildError },
    #[snafu(display("Critical failure encountered while printing the directory tree"))]
    RenderError { source: RenderError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data::ColorMode;
    use rstest::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config(root: &Path, include_files: bool) -> RuntimeConfig {
        RuntimeConfig {
            root: root.to_path_buf(),
            include_files,
            color: ColorMode::Never,
        }
    }

    fn run_to_string(root: &Path, include_files: bool) -> String {
        let mut out = Vec::new();
        Application::run_with_writer(&config(root, include_files), &mut out, false)
            .expect("Application run failed");
        String::from_utf8(out).expect("Output should be valid UTF-8")
    }

    #[fixture]
    fn proj() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        fs::create_dir(root.join("docs")).expect("Failed to create docs");
        fs::write(root.join("docs/readme.txt"), vec![b'r'; 120]).expect("Failed to write readme");
        fs::write(root.join("main.go"), b"").expect("Failed to write main.go");
        temp_dir
    }

    #[rstest]
    fn test_directories_only(proj: TempDir) {
        assert_eq!(run_to_string(proj.path(), false), "└───docs\n");
    }

    #[rstest]
    fn test_with_files(proj: TempDir) {
        assert_eq!(
            run_to_string(proj.path(), true),
            "├───docs\n│\t└───readme.txt (120b)\n└───main.go (empty)\n"
        );
    }

    #[rstest]
    fn test_output_is_idempotent(proj: TempDir) {
        assert_eq!(
            run_to_string(proj.path(), true),
            run_to_string(proj.path(), true)
        );
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn test_empty_root_prints_nothing(#[case] include_files: bool) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        assert_eq!(run_to_string(temp_dir.path(), include_files), "");
    }

    #[test]
    fn test_unreadable_root_fails_without_output() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("missing");
        let mut out = Vec::new();

        let result = Application::run_with_writer(&config(&missing, true), &mut out, false);

        assert!(matches!(
            result,
            Err(ApplicationError::TreeBuildError { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_display() {
        let error = ApplicationError::RenderError {
            source: RenderError::WriteError {
                source: io::Error::new(io::ErrorKind::BrokenPipe, "closed"),
            },
        };

        assert!(error.to_string().contains("printing the directory tree"));
    }
}
