use std::path::Path;

use tracing::info;

use super::walk::{ConvertError, DirSnapshot, move_file, walk_dirs};
use super::{MOD_FILE_NAME, MODULE_EXTENSION};

/// Converts a 2015-style tree to the 2018-style layout.
///
/// For every directory `X` holding a file literally named `mod.rs`, that file
/// is moved out beside `X` and renamed to `X.rs`. Only the exact sentinel name
/// qualifies; case variants are never touched. An existing `X.rs` beside the
/// directory is overwritten.
pub fn flatten_module_files(root: &Path) -> Result<(), ConvertError> {
    walk_dirs(root, &mut flatten_in_dir)
}

fn flatten_in_dir(snapshot: &DirSnapshot) -> Result<(), ConvertError> {
    for dir in &snapshot.dirs {
        let dir_path = snapshot.path.join(dir);
        let contents = DirSnapshot::read(&dir_path)?;

        if contents.files.iter().any(|file| file == MOD_FILE_NAME) {
            let from = dir_path.join(MOD_FILE_NAME);
            println!("move {}", from.display());
            let to = snapshot.path.join(format!("{dir}.{MODULE_EXTENSION}"));
            move_file(&from, &to)?;
            info!("Flattened '{dir}/{MOD_FILE_NAME}' to '{dir}.{MODULE_EXTENSION}'");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn moves_sentinel_file_out_beside_its_directory() {
        let root = tempfile::tempdir().unwrap();
        let foo = root.path().join("foo");
        fs::create_dir_all(foo.join("bar")).unwrap();
        fs::write(foo.join("bar").join("mod.rs"), b"pub fn answer() {}").unwrap();

        flatten_module_files(root.path()).unwrap();

        assert!(!foo.join("bar").join("mod.rs").exists());
        assert_eq!(fs::read(foo.join("bar.rs")).unwrap(), b"pub fn answer() {}");
    }

    #[test]
    fn ignores_case_variants_of_the_sentinel_name() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("bar")).unwrap();
        fs::write(root.path().join("bar").join("Mod.rs"), b"").unwrap();

        flatten_module_files(root.path()).unwrap();

        assert!(root.path().join("bar").join("Mod.rs").exists());
        assert!(!root.path().join("bar.rs").exists());
    }

    #[test]
    fn ignores_other_files_inside_the_directory() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("bar")).unwrap();
        fs::write(root.path().join("bar").join("lexer.rs"), b"").unwrap();

        flatten_module_files(root.path()).unwrap();

        assert!(root.path().join("bar").join("lexer.rs").exists());
        assert!(!root.path().join("bar.rs").exists());
    }

    #[test]
    fn overwrites_existing_destination_file() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("bar")).unwrap();
        fs::write(root.path().join("bar").join("mod.rs"), b"nested").unwrap();
        fs::write(root.path().join("bar.rs"), b"stale").unwrap();

        flatten_module_files(root.path()).unwrap();

        assert_eq!(fs::read(root.path().join("bar.rs")).unwrap(), b"nested");
    }

    #[test]
    fn flattens_every_level_of_a_nested_tree() {
        let root = tempfile::tempdir().unwrap();
        let inner = root.path().join("outer").join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(root.path().join("outer").join("mod.rs"), b"outer").unwrap();
        fs::write(inner.join("mod.rs"), b"inner").unwrap();

        flatten_module_files(root.path()).unwrap();

        assert_eq!(fs::read(root.path().join("outer.rs")).unwrap(), b"outer");
        assert_eq!(
            fs::read(root.path().join("outer").join("inner.rs")).unwrap(),
            b"inner"
        );
    }
}
