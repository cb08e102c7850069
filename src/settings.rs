//! Game settings
//!
//! The menu page writes the time limit and target score to LocalStorage;
//! the game only ever reads them. Missing or unparseable values silently
//! fall back to the defaults so a bad setting can never fail a session.

use crate::consts::{DEFAULT_TARGET_SCORE, DEFAULT_TIME_LIMIT};

/// Per-session configuration supplied by the menu page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Session length in seconds
    pub time_limit: u32,
    /// Score that wins the session
    pub target_score: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl GameSettings {
    /// LocalStorage keys (used only in wasm32)
    #[allow(dead_code)]
    const TIME_LIMIT_KEY: &'static str = "timeLimit";
    #[allow(dead_code)]
    const TARGET_SCORE_KEY: &'static str = "targetScore";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, using default settings");
            return Self::default();
        };

        let read = |key: &str| storage.get_item(key).ok().flatten();
        let settings = Self {
            time_limit: parse_or(read(Self::TIME_LIMIT_KEY), DEFAULT_TIME_LIMIT),
            target_score: parse_or(read(Self::TARGET_SCORE_KEY), DEFAULT_TARGET_SCORE),
        };
        log::info!(
            "Settings: {} points in {}s",
            settings.target_score,
            settings.time_limit
        );
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Parse a stored integer, falling back on anything malformed.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn parse_or(raw: Option<String>, default: u32) -> u32 {
    match raw {
        Some(s) => s.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparseable setting {:?}", s);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_accepts_integers() {
        assert_eq!(parse_or(Some("120".into()), 100), 120);
        assert_eq!(parse_or(Some(" 500 ".into()), 1000), 500);
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or(None, 100), 100);
        assert_eq!(parse_or(Some("".into()), 100), 100);
        assert_eq!(parse_or(Some("fast".into()), 100), 100);
        assert_eq!(parse_or(Some("-5".into()), 100), 100);
    }

    #[test]
    fn test_defaults() {
        let s = GameSettings::default();
        assert_eq!(s.time_limit, 100);
        assert_eq!(s.target_score, 1000);
    }
}
