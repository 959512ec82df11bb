use std::ffi::OsString;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::filesystem::Node;

/// Builds the ordered tree below `root`.
///
/// The root itself is not part of the result, only its children are.
/// Failing to list `root` is an error, while unreadable subdirectories
/// are kept as empty directory nodes.
pub fn build(root: &Path, include_files: bool) -> Result<Vec<Node>, TreeBuildError> {
    debug!(
        "Building tree for {} (include files: {include_files})",
        root.display()
    );
    scan_level(root, include_files)
}

fn scan_level(path: &Path, include_files: bool) -> Result<Vec<Node>, TreeBuildError> {
    let entries = read_sorted_entries(path)?;

    let mut nodes = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.name.to_string_lossy().into_owned();
        if entry.is_dir {
            let children = scan_subtree(&path.join(&entry.name), include_files);
            nodes.push(Node::directory(name, children));
        } else if include_files {
            nodes.push(Node::file(name, entry.size));
        }
    }

    Ok(nodes)
}

/// Children of a non-root directory. A directory that cannot be listed
/// has no children.
fn scan_subtree(path: &Path, include_files: bool) -> Vec<Node> {
    scan_level(path, include_files).unwrap_or_default()
}

struct EntryInfo {
    name: OsString,
    is_dir: bool,
    size: u64,
}

impl TryFrom<DirEntry> for EntryInfo {
    type Error = io::Error;

    fn try_from(entry: DirEntry) -> Result<Self, Self::Error> {
        // Does not follow symlinks, a link is listed as a file
        let metadata = entry.metadata()?;
        Ok(EntryInfo {
            name: entry.file_name(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
        })
    }
}

/// Lists a single directory level sorted by name.
///
/// The directory handle is dropped before returning on every path.
fn read_sorted_entries(path: &Path) -> Result<Vec<EntryInfo>, TreeBuildError> {
    let read_dir = fs::read_dir(path).context(OpenSnafu { path })?;

    let mut entries = collect_entries(read_dir, |entry| {
        skip_vanished(EntryInfo::try_from(entry))
    })
    .context(ReadSnafu { path })?;

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Drains a directory listing, keeping only the first error.
///
/// A listing error ends the scan. A conversion error is recorded and the
/// scan goes on, later errors are dropped.
fn collect_entries<E, T>(
    listing: impl IntoIterator<Item = io::Result<E>>,
    mut convert: impl FnMut(E) -> io::Result<Option<T>>,
) -> io::Result<Vec<T>> {
    let mut pending: Option<io::Error> = None;
    let mut entries = Vec::new();
    for entry in listing {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                pending.get_or_insert(err);
                break;
            }
        };
        match convert(entry) {
            Ok(Some(item)) => entries.push(item),
            Ok(None) => {}
            Err(err) => {
                pending.get_or_insert(err);
            }
        }
    }

    match pending {
        Some(err) => Err(err),
        None => Ok(entries),
    }
}

/// Entries removed between listing and stat are left out.
fn skip_vanished<T>(result: io::Result<T>) -> io::Result<Option<T>> {
    match result {
        Ok(item) => Ok(Some(item)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[derive(Debug, Snafu)]
pub enum TreeBuildError {
    #[snafu(display("Failed to open directory {}", path.display()))]
    OpenError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to read entries of directory {}", path.display()))]
    ReadError { path: PathBuf, source: io::Error },
}
