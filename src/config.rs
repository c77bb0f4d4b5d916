use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::env;

/// Defaults compiled into every build; anything set at runtime or build time wins.
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const API_URL_VAR: &str = "TODO_API_URL";
pub const USER_ID_VAR: &str = "TODO_USER_ID";

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_USER_ID: &str = "test-user-123";

/// Where the chat backend lives and which user the client speaks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub user_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolves the config from, in order: the process environment (native
    /// targets only), variables present when the crate was compiled, and
    /// [`BUNDLED_CONFIG`].
    ///
    /// Never writes to the process environment, which panics on wasm32.
    pub fn from_env() -> Self {
        Self::from_sources(
            |key| runtime_var(key).or_else(|| build_time_var(key)),
            BUNDLED_CONFIG,
        )
    }

    /// Resolves through `lookup`, falling back to the `KEY=VALUE` pairs in `bundled`.
    pub fn from_sources(lookup: impl Fn(&str) -> Option<String>, bundled: &str) -> Self {
        let bundled = parse_bundled(bundled);
        Self::from_lookup(|key| lookup(key).or_else(|| bundled.get(key).cloned()))
    }

    /// Resolves the config through `lookup`; blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_url = read(API_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let user_id = read(USER_ID_VAR).unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        Self { api_url, user_id }
    }

    pub fn chat_endpoint(&self) -> String {
        format!("{}/api/{}/chat", self.api_url, self.user_id)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_key: &str) -> Option<String> {
    None
}

fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        API_URL_VAR => option_env!("TODO_API_URL"),
        USER_ID_VAR => option_env!("TODO_USER_ID"),
        _ => None,
    };
    value.map(str::to_string)
}

fn parse_bundled(contents: &str) -> HashMap<String, String> {
    dotenvy::from_read_iter(contents.as_bytes())
        .filter_map(|item| match item {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed bundled config line");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(
            config.chat_endpoint(),
            "http://localhost:8000/api/test-user-123/chat"
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "  "), (USER_ID_VAR, "")]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://todo.example.com/"),
            (USER_ID_VAR, "alice"),
        ]));
        assert_eq!(config.api_url, "https://todo.example.com");
        assert_eq!(
            config.chat_endpoint(),
            "https://todo.example.com/api/alice/chat"
        );
    }

    #[test]
    fn bundled_file_resolves_to_defaults() {
        let config = ClientConfig::from_sources(lookup(&[]), BUNDLED_CONFIG);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn bundled_pairs_fill_missing_values() {
        let bundled = "# staging\nTODO_API_URL=http://todo.staging:9000/\nTODO_USER_ID=carol\n";
        let config = ClientConfig::from_sources(lookup(&[]), bundled);
        assert_eq!(config.api_url, "http://todo.staging:9000");
        assert_eq!(config.user_id, "carol");
    }

    #[test]
    fn lookup_wins_over_bundled_pairs() {
        let bundled = "TODO_API_URL=http://todo.staging:9000\nTODO_USER_ID=carol\n";
        let config = ClientConfig::from_sources(lookup(&[(USER_ID_VAR, "dave")]), bundled);
        assert_eq!(config.api_url, "http://todo.staging:9000");
        assert_eq!(config.user_id, "dave");
    }
}
