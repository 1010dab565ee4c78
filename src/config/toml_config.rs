use crate::domain::ports::BridgeSettings;
use crate::utils::error::{PanelError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SDK_ROOT_VARS: [&str; 2] = ["ANDROID_HOME", "ANDROID_SDK_ROOT"];
pub const DEFAULT_TOOLS_DIR: &str = "platform-tools";
pub const DEFAULT_EXECUTABLE: &str = "adb";
pub const DEFAULT_SUBCOMMAND: &str = "devices";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub bridge: BridgeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub sdk_root_vars: Vec<String>,
    pub tools_dir: String,
    pub executable: String,
    pub subcommand: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            sdk_root_vars: DEFAULT_SDK_ROOT_VARS.iter().map(|v| v.to_string()).collect(),
            tools_dir: DEFAULT_TOOLS_DIR.to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
            subcommand: DEFAULT_SUBCOMMAND.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PanelError::ConfigError {
            message: format!("invalid substitution pattern: {e}"),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.bridge.validate()
    }
}

impl Validate for BridgeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("bridge.executable", &self.executable)?;
        validation::validate_path("bridge.tools_dir", &self.tools_dir)?;
        validation::validate_single_argument("bridge.subcommand", &self.subcommand)?;
        for var in &self.sdk_root_vars {
            validation::validate_env_var_name("bridge.sdk_root_vars", var)?;
        }
        Ok(())
    }
}

impl BridgeSettings for BridgeConfig {
    fn sdk_root_vars(&self) -> &[String] {
        &self.sdk_root_vars
    }

    fn tools_dir(&self) -> &str {
        &self.tools_dir
    }

    fn executable(&self) -> &str {
        &self.executable
    }

    fn subcommand(&self) -> &str {
        &self.subcommand
    }
}
