//! Runtime configuration for the binary, read from environment variables.

use std::path::PathBuf;

use crate::types::{DEFAULT_FOV_DEG, TICK_MS};

pub const ENV_LOG_PATH: &str = "TICTACTOE_LOG_PATH";
pub const ENV_FOV_DEG: &str = "TICTACTOE_FOV_DEG";
pub const ENV_FRAME_MS: &str = "TICTACTOE_FRAME_MS";

pub const MIN_FOV_DEG: f32 = 20.0;
pub const MAX_FOV_DEG: f32 = 120.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Log file; logging is off when `None`
    pub log_path: Option<PathBuf>,
    /// Camera vertical field of view, degrees
    pub fov_deg: f32,
    /// Event poll timeout per frame, milliseconds
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            fov_deg: DEFAULT_FOV_DEG,
            frame_ms: u64::from(TICK_MS),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let fov_deg = lookup(ENV_FOV_DEG)
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(MIN_FOV_DEG, MAX_FOV_DEG))
            .unwrap_or(defaults.fov_deg);

        let frame_ms = lookup(ENV_FRAME_MS)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|v| v.max(1))
            .unwrap_or(defaults.frame_ms);

        Self {
            log_path,
            fov_deg,
            frame_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> GameConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.fov_deg, 60.0);
        assert_eq!(config.frame_ms, 16);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn values_are_parsed_and_trimmed() {
        let config = config_from(&[
            (ENV_LOG_PATH, " /tmp/ttt.log "),
            (ENV_FOV_DEG, "75"),
            (ENV_FRAME_MS, " 33"),
        ]);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/ttt.log")));
        assert_eq!(config.fov_deg, 75.0);
        assert_eq!(config.frame_ms, 33);
    }

    #[test]
    fn blank_log_path_disables_logging() {
        assert!(config_from(&[(ENV_LOG_PATH, "   ")]).log_path.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(config_from(&[(ENV_FOV_DEG, "5")]).fov_deg, MIN_FOV_DEG);
        assert_eq!(config_from(&[(ENV_FOV_DEG, "170")]).fov_deg, MAX_FOV_DEG);
        assert_eq!(config_from(&[(ENV_FRAME_MS, "0")]).frame_ms, 1);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = config_from(&[(ENV_FOV_DEG, "wide"), (ENV_FRAME_MS, "-3")]);
        assert_eq!(config.fov_deg, DEFAULT_FOV_DEG);
        assert_eq!(config.frame_ms, u64::from(TICK_MS));
        assert_eq!(config_from(&[(ENV_FOV_DEG, "NaN")]).fov_deg, DEFAULT_FOV_DEG);
    }
}
