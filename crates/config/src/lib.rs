pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::PathBuf;
use std::env;

pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory from `env_key`, then from the app strategy, and
/// finally from a per-app folder under the system temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Runtime directory from `RUNTIME_DIRECTORY`, the app strategy, or the temp dir.
pub fn default_runtime_dir() -> PathBuf {
    match create_strategy() {
        Ok(strategy) => resolve_dir("RUNTIME_DIRECTORY", &strategy, |s| s.runtime_dir()),
        Err(_) => env::var_os("RUNTIME_DIRECTORY")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME)),
    }
}

/// Path of the unix socket the content-search server listens on.
pub fn socket_path(runtime_dir: &std::path::Path) -> PathBuf {
    runtime_dir.join(constants::UNIX_SOCKET_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_path_lives_in_runtime_dir() {
        let path = socket_path(std::path::Path::new("/run/user/1000/querywise-site"));
        assert_eq!(
            path,
            PathBuf::from("/run/user/1000/querywise-site/content-search.sock")
        );
    }

    #[test]
    fn env_override_wins() {
        let strategy = create_strategy().unwrap();
        // SAFETY: test-local variable name, not read by any other test.
        unsafe { env::set_var("QUERYWISE_TEST_RESOLVE_DIR", "/tmp/qw-override") };
        let dir = resolve_dir("QUERYWISE_TEST_RESOLVE_DIR", &strategy, |s| Some(s.cache_dir()));
        assert_eq!(dir, PathBuf::from("/tmp/qw-override"));
    }
}
