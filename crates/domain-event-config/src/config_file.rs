use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".domain-event-console.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.domain-event-console.toml` in the current working directory
/// 2. `~/.domain-event-console.toml`
/// 3. `config.toml` in the application config directory
///
/// Returns the path and content of the first file found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    candidate_paths()
        .into_iter()
        .find_map(|path| match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some((path, content))
            }
            Err(_) => None,
        })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home_config) = get_home_config_path() {
        paths.push(home_config);
    }
    if let Ok(global) = crate::paths::display_config_path() {
        paths.push(global);
    }
    paths
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.domain-event-console.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
