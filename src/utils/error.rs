use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("failed to launch {executable}: {source}")]
    BridgeSpawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{executable} exited with code {}{}", code_label(.code), stderr_suffix(.stderr))]
    BridgeExit {
        executable: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn code_label(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string())
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Bridge,
    Io,
    Runtime,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PanelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PanelError::BridgeSpawn { .. } | PanelError::BridgeExit { .. } => ErrorCategory::Bridge,
            PanelError::IoError(_) => ErrorCategory::Io,
            PanelError::TaskJoin(_) | PanelError::SerializationError(_) => ErrorCategory::Runtime,
            PanelError::TomlError(_)
            | PanelError::ConfigError { .. }
            | PanelError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // a device fetch can always be retried with a fresh refresh
            ErrorCategory::Bridge => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Runtime => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PanelError::BridgeSpawn { executable, .. } => {
                format!("Could not start the device bridge ({executable})")
            }
            PanelError::BridgeExit { executable, .. } => {
                format!("The device bridge ({executable}) reported an error")
            }
            PanelError::IoError(e) => format!("File or process I/O failed: {e}"),
            PanelError::TaskJoin(_) => "The background device fetch stopped unexpectedly".to_string(),
            PanelError::SerializationError(e) => format!("Could not encode output: {e}"),
            PanelError::TomlError(e) => format!("The configuration file is not valid TOML: {e}"),
            PanelError::ConfigError { message } => message.clone(),
            PanelError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{field}' is invalid: {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Bridge => {
                "Set ANDROID_HOME or ANDROID_SDK_ROOT to your SDK, or put adb on PATH, then refresh"
            }
            ErrorCategory::Io => "Check file permissions and try again",
            ErrorCategory::Configuration => "Fix the configuration file and run again",
            ErrorCategory::Runtime => "Run again with --verbose and report the log",
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
