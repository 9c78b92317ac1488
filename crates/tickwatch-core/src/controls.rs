use std::fmt;

/// The two user actions on the stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Single toggle button; its label follows the running state.
    StartStop,
    Reset,
}

impl Control {
    /// Stable identifier used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Control::StartStop => "start_stop",
            Control::Reset => "reset",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the Reset button does while the stopwatch is running.
///
/// `Stopwatch::reset` itself is unconditional; the policy only shapes the
/// button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Running: stop and keep the total. Stopped: clear to zero.
    #[default]
    StopOnly,
    /// Always stop and clear.
    Always,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_stable_names() {
        assert_eq!(Control::StartStop.to_string(), "start_stop");
        assert_eq!(Control::Reset.to_string(), "reset");
    }

    #[test]
    fn default_policy_preserves_stop_only_reset() {
        assert_eq!(ResetPolicy::default(), ResetPolicy::StopOnly);
    }
}
