//! Severity enum shared by the alert feed and the notifier contract.

/// How urgent a notification or alert is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Human-readable label, useful for log fields and console output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info    => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error   => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
