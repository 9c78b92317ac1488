//! Environment configuration.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `RUST_LOG` | log filter (read by the logger) |
//! | `TICKWATCH_LOG_FILE` | write logs to this file instead of stderr |
//! | `TICKWATCH_FPS` | redraw rate; `0` or `off` redraws only on input and timers (1 s while stopped) |
//! | `TICKWATCH_RESET` | `stop` (default) or `always`: what Reset does while running |
//!
//! Invalid values are logged and replaced by the default.

use std::path::PathBuf;

use tickwatch_core::ResetPolicy;

pub const DEFAULT_FPS: u32 = 60;
const MAX_FPS: u32 = 240;

const LOG_FILE_VAR: &str = "TICKWATCH_LOG_FILE";

/// Log file path from `TICKWATCH_LOG_FILE`; blank values mean "no file".
///
/// Read apart from [`AppConfig`] because the logger has to be running before
/// the rest of the configuration is parsed.
pub fn log_file_from(var: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    var(LOG_FILE_VAR)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub frame_rate: Option<u32>,
    pub reset_policy: ResetPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_rate: Some(DEFAULT_FPS),
            reset_policy: ResetPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = var("TICKWATCH_FPS") {
            match parse_frame_rate(&raw) {
                Some(rate) => config.frame_rate = rate,
                None => log::warn!("ignoring TICKWATCH_FPS={raw:?}; expected 0..={MAX_FPS} or 'off'"),
            }
        }
        if let Some(raw) = var("TICKWATCH_RESET") {
            match parse_reset_policy(&raw) {
                Some(policy) => config.reset_policy = policy,
                None => log::warn!("ignoring TICKWATCH_RESET={raw:?}; expected 'stop' or 'always'"),
            }
        }
        config
    }
}

/// `Some(None)` turns continuous redraw off; `None` means the value is invalid.
fn parse_frame_rate(raw: &str) -> Option<Option<u32>> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("off") {
        return Some(None);
    }
    match raw.parse::<u32>() {
        Ok(0) => Some(None),
        Ok(fps) if fps <= MAX_FPS => Some(Some(fps)),
        _ => None,
    }
}

fn parse_reset_policy(raw: &str) -> Option<ResetPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "stop" | "stop-only" | "stop_only" => Some(ResetPolicy::StopOnly),
        "always" => Some(ResetPolicy::Always),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().frame_rate, Some(DEFAULT_FPS));
    }

    fn log_file(value: Option<&str>) -> Option<PathBuf> {
        log_file_from(|k| (k == LOG_FILE_VAR).then(|| value.map(str::to_string)).flatten())
    }

    #[test]
    fn log_file_path() {
        assert_eq!(log_file(Some("/tmp/tickwatch.log")), Some(PathBuf::from("/tmp/tickwatch.log")));
        assert_eq!(log_file(None), None);
    }

    #[test]
    fn blank_log_file_means_no_file() {
        for blank in ["", "  ", "\t"] {
            assert_eq!(log_file(Some(blank)), None, "{blank:?}");
        }
    }

    #[test]
    fn frame_rate_values() {
        assert_eq!(config(&[("TICKWATCH_FPS", "30")]).frame_rate, Some(30));
        assert_eq!(config(&[("TICKWATCH_FPS", " 0 ")]).frame_rate, None);
        assert_eq!(config(&[("TICKWATCH_FPS", "OFF")]).frame_rate, None);
    }

    #[test]
    fn invalid_frame_rate_keeps_default() {
        for bad in ["fast", "-1", "1000", ""] {
            assert_eq!(config(&[("TICKWATCH_FPS", bad)]).frame_rate, Some(DEFAULT_FPS), "{bad}");
        }
    }

    #[test]
    fn reset_policy_values() {
        assert_eq!(config(&[("TICKWATCH_RESET", "Always")]).reset_policy, ResetPolicy::Always);
        assert_eq!(config(&[("TICKWATCH_RESET", "stop")]).reset_policy, ResetPolicy::StopOnly);
        assert_eq!(config(&[("TICKWATCH_RESET", "never")]).reset_policy, ResetPolicy::StopOnly);
    }
}
