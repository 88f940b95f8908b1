use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming a default stop-word list
pub const STOPWORDS_ENV: &str = "CHATLOG_STOPWORDS";

const APP_DIR: &str = "chatlog-analyzer";
const STOPWORDS_FILE: &str = "stopwords.txt";

/// Locate the stop-word list to use
///
/// Precedence: the explicit path, then `$CHATLOG_STOPWORDS`, then
/// `<config dir>/chatlog-analyzer/stopwords.txt` if that file exists. Returns `None` when
/// nothing is configured, in which case no words are filtered.
pub fn resolve_stopwords_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_stopwords_path_internal(explicit, env::var_os(STOPWORDS_ENV), dirs::config_dir())
}

pub(crate) fn resolve_stopwords_path_internal(
    explicit: Option<&Path>,
    from_env: Option<std::ffi::OsString>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(value) = from_env.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value));
    }

    config_dir.map(|dir| dir.join(APP_DIR).join(STOPWORDS_FILE)).filter(|path| path.is_file())
}
