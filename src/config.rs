//! Config handling

use tracing::log::LevelFilter;

use crate::constants::API_KEY_ENV_VARS;

/// Sets up logging based on the debug flag
pub fn setup_logging(debug: bool) -> Result<(), Box<std::io::Error>> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut logger = simple_logger::SimpleLogger::new().with_level(level);
    if !debug {
        logger = logger
            .with_module_level("tracing", LevelFilter::Warn)
            .with_module_level("reqwest", LevelFilter::Info)
            .with_module_level("rustls", LevelFilter::Info)
            .with_module_level("hyper_util", LevelFilter::Info)
            .with_module_level("h2", LevelFilter::Info);
    }
    logger.init().map_err(|err| {
        eprintln!("Failed to initialize logger: {}", err);
        Box::new(std::io::Error::other(err))
    })
}

/// Picks the API key: an explicit value first, then the environment.
///
/// Empty values are treated as unset.
pub fn resolve_api_key(explicit: Option<&str>) -> Option<String> {
    resolve_api_key_with(explicit, |name| std::env::var(name).ok())
}

/// [`resolve_api_key`] with a custom environment lookup.
pub fn resolve_api_key_with<F>(explicit: Option<&str>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(API_KEY_ENV_VARS.iter().filter_map(|name| lookup(name)))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn google_key_wins_over_gemini_key() {
        let vars = env(&[("GOOGLE_API_KEY", "google"), ("GEMINI_API_KEY", "gemini")]);
        let key = resolve_api_key_with(None, |name| vars.get(name).cloned());
        assert_eq!(key.as_deref(), Some("google"));
    }

    #[test]
    fn falls_back_to_gemini_key() {
        let vars = env(&[("GOOGLE_API_KEY", ""), ("GEMINI_API_KEY", "gemini")]);
        let key = resolve_api_key_with(None, |name| vars.get(name).cloned());
        assert_eq!(key.as_deref(), Some("gemini"));
    }

    #[test]
    fn explicit_key_wins() {
        let vars = env(&[("GOOGLE_API_KEY", "google")]);
        let key = resolve_api_key_with(Some("flag"), |name| vars.get(name).cloned());
        assert_eq!(key.as_deref(), Some("flag"));
    }

    #[test]
    fn no_key_anywhere() {
        assert_eq!(resolve_api_key_with(None, |_| None), None);
    }
}
