//! Lexical path arithmetic used to derive status entry paths.
//! Nothing here touches the filesystem.

use log::debug;
use std::path::{Component, Path, PathBuf};

/// Join a forward-slash relative path onto `base`, using the host separator
pub fn join(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}

/// Resolve `.` and `..` components without consulting the filesystem.
/// `..` never climbs above a root or prefix.
pub fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => result.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => result.push(".."),
            },
            Component::Normal(name) => result.push(name),
        }
    }

    result
}

/// Relative path that leads from `base` to `path`, with `..` segments when
/// `path` is not below `base`
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    match pathdiff::diff_paths(path, base) {
        Some(relative) => relative,
        None => {
            debug!("No relative form of {path:?} from {base:?}, keeping it as is");
            path.to_path_buf()
        }
    }
}

/// Render a path with `/` separators. An empty path renders as `.`,
/// an absolute path keeps a single leading `/` after any prefix
pub fn to_slash(path: &Path) -> String {
    let mut rendered = String::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                rendered.push_str(&prefix.as_os_str().to_string_lossy());
            }
            Component::RootDir => rendered.push('/'),
            _ => {
                if !rendered.is_empty() && !rendered.ends_with('/') {
                    rendered.push('/');
                }
                rendered.push_str(&component.as_os_str().to_string_lossy());
            }
        }
    }

    if rendered.is_empty() {
        ".".to_string()
    } else {
        rendered
    }
}
