use std::path::Path;

use tracing::info;

use super::walk::{ConvertError, DirSnapshot, move_file, walk_dirs};
use super::MOD_FILE_NAME;

/// Converts a 2018-style tree to the 2015-style layout.
///
/// Every file whose base name equals the name of a sibling directory is moved
/// into that directory as `mod.rs`. Matching is sibling-level only: files are
/// compared against the directories listed beside them at visit time. An
/// existing `mod.rs` in the target directory is overwritten.
pub fn nest_module_files(root: &Path) -> Result<(), ConvertError> {
    walk_dirs(root, &mut nest_in_dir)
}

fn nest_in_dir(snapshot: &DirSnapshot) -> Result<(), ConvertError> {
    let pairs = snapshot
        .files
        .iter()
        .filter_map(|file| {
            let base = base_name(file);
            snapshot
                .dirs
                .iter()
                .find(|dir| dir.as_str() == base)
                .map(|dir| (file, dir))
        })
        .collect::<Vec<_>>();

    // Two files reducing to the same base name target the same mod.rs; the
    // one processed last wins.
    for (file, dir) in pairs {
        println!("move {file}");
        let from = snapshot.path.join(file);
        let to = snapshot.path.join(dir).join(MOD_FILE_NAME);
        move_file(&from, &to)?;
        info!("Nested '{file}' into '{dir}'");
    }

    Ok(())
}

/// Text before the first `.` in a file name. Multi-dot names reduce to their
/// first segment, so `a.b.rs` has base name `a`.
fn base_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}
