use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;

/// The immediate contents of one directory, split into file and directory
/// names and snapshotted into owned lists before any move touches the
/// directory. The listing is never iterated while it is being mutated.
#[derive(Debug, Clone)]
pub struct DirSnapshot {
    pub path: PathBuf,
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}

impl DirSnapshot {
    pub fn read(path: &Path) -> Result<Self, ConvertError> {
        let entries = fs::read_dir(path).context(ReadDirSnafu { path })?;

        let mut files = Vec::new();
        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.context(ReadDirSnafu { path })?;
            let file_type = entry.file_type().context(ReadDirSnafu { path })?;
            let name = entry.file_name().to_string_lossy().to_string();
            if file_type.is_dir() {
                dirs.push(name);
            } else {
                files.push(name);
            }
        }

        Ok(DirSnapshot {
            path: path.to_path_buf(),
            files,
            dirs,
        })
    }
}

/// Visits `root` and every directory below it in pre-order. Each directory is
/// snapshotted and handed to `visit` before its subdirectories are descended
/// into, so moves performed by the visitor are observed by later visits.
pub fn walk_dirs<F>(root: &Path, visit: &mut F) -> Result<(), ConvertError>
where
    F: FnMut(&DirSnapshot) -> Result<(), ConvertError>,
{
    debug!("Visiting directory {}", root.best_effort_path_display());
    let snapshot = DirSnapshot::read(root)?;
    visit(&snapshot)?;

    for dir in &snapshot.dirs {
        walk_dirs(&snapshot.path.join(dir), visit)?;
    }

    Ok(())
}

/// Moves `from` to `to` with the host rename primitive. An existing file at
/// `to` is silently overwritten; the move is not atomic across devices.
pub fn move_file(from: &Path, to: &Path) -> Result<(), ConvertError> {
    debug!(
        "Moving {} to {}",
        from.best_effort_path_display(),
        to.best_effort_path_display()
    );
    fs::rename(from, to).context(MoveSnafu { from, to })
}

#[derive(Debug, Snafu)]
pub enum ConvertError {
    #[snafu(display("Failed to read directory '{}'", path.display()))]
    ReadDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to move '{}' to '{}'", from.display(), to.display()))]
    MoveError {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}
