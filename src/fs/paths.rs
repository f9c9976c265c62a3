//! Path resolution utilities for priorauth

use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = "priorauth.json";

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the default config file in a directory.
pub fn get_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cwd_override() {
        let path = Path::new("/tmp/somewhere");
        assert_eq!(resolve_cwd(Some(path)), PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn test_resolve_cwd_default() {
        assert!(!resolve_cwd(None).as_os_str().is_empty());
    }

    #[test]
    fn test_get_config_path() {
        assert_eq!(
            get_config_path(Path::new("/work")),
            PathBuf::from("/work/priorauth.json")
        );
    }
}
