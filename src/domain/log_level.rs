/// Verbosity levels offered by the debug view
///
/// Numeric values follow the classic logging scale so that "suppress
/// anything below L" is a plain integer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    /// Levels in selector order
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARNING" | "WARN" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            "CRITICAL" => Some(LogLevel::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    pub fn severity(&self) -> u8 {
        *self as u8
    }

    /// Inverse of [`LogLevel::severity`]. Values between the named levels
    /// round down.
    pub fn from_severity(value: u8) -> Self {
        match value {
            v if v >= 50 => LogLevel::Critical,
            v if v >= 40 => LogLevel::Error,
            v if v >= 30 => LogLevel::Warning,
            v if v >= 20 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        let mut sorted = LogLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, LogLevel::ALL);
        assert!(LogLevel::Warning > LogLevel::Info);
    }

    #[test]
    fn test_from_str_accepts_warn_alias() {
        assert_eq!(LogLevel::from_str("warn"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_str("Critical"), Some(LogLevel::Critical));
        assert_eq!(LogLevel::from_str("trace"), None);
    }

    #[test]
    fn test_severity_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_severity(level.severity()), level);
        }
        assert_eq!(LogLevel::from_severity(5), LogLevel::Debug);
    }
}
