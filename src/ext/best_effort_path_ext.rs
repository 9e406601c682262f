use std::path::{Component, Path, PathBuf};

/// Renders a path for log output, preferring the canonical form and falling
/// back to a normalized absolute path when the target does not exist yet.
pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl<P: AsRef<Path>> BestEffortPathExt for P {
    fn best_effort_path_display(&self) -> String {
        let path = self.as_ref();
        if let Ok(canonical) = path.canonicalize() {
            return canonical.display().to_string();
        }

        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        };
        normalize(&absolute).display().to_string()
    }
}

/// Resolves `.` and `..` components lexically, without touching the
/// filesystem.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .fold(Vec::new(), |mut parts, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !matches!(parts.last(), None | Some(Component::RootDir)) {
                        parts.pop();
                    }
                }
                _ => parts.push(component),
            }
            parts
        })
        .iter()
        .collect()
}
