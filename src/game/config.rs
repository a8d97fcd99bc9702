//! Game configuration

use super::hints::HintPolicy;

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Public page that share links point at
pub const DEFAULT_SHARE_URL: &str = "https://gisenberg.github.io/urdle/";

/// Tunables for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub share_base_url: String,
    pub hints: HintPolicy,
}

impl GameConfig {
    #[must_use]
    pub fn new(share_base_url: impl Into<String>) -> Self {
        Self {
            share_base_url: share_base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            share_base_url: DEFAULT_SHARE_URL.to_string(),
            hints: HintPolicy::default(),
        }
    }
}
