use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable consulted when no explicit edge-list path is given.
pub const GRAPH_PATH_ENV: &str = "GRIDROUTE_GRAPH";

/// Edge-list file looked up in the working directory as a last resort.
pub const DEFAULT_GRAPH_FILENAME: &str = "data.txt";

/// Resolve which edge-list file to load.
///
/// Precedence: the explicit `override_path`, then `GRIDROUTE_GRAPH`, then
/// `data.txt` in the current directory. The file is not checked for
/// existence here; loading reports a missing source.
pub fn resolve_graph_path(override_path: Option<&Path>) -> PathBuf {
    resolve_graph_path_with(override_path, env::var_os(GRAPH_PATH_ENV).map(PathBuf::from))
}

fn resolve_graph_path_with(override_path: Option<&Path>, from_env: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        debug!(path = %path.display(), "using edge list from command line");
        return path.to_path_buf();
    }

    if let Some(path) = from_env.filter(|path| !path.as_os_str().is_empty()) {
        debug!(path = %path.display(), "using edge list from {}", GRAPH_PATH_ENV);
        return path;
    }

    debug!("falling back to {} in the working directory", DEFAULT_GRAPH_FILENAME);
    PathBuf::from(DEFAULT_GRAPH_FILENAME)
}
