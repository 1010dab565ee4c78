//! Device-bridge (`adb`) invocation and output parsing.
//!
//! The bridge is located through the SDK-root environment variables, run
//! once with its device-list subcommand, and its tab-separated table is
//! turned into [`DeviceRecord`]s. Running it blocks, so [`AdbBridge`] moves
//! the call onto tokio's blocking pool.

use crate::domain::model::DeviceRecord;
use crate::domain::ports::{BridgeSettings, DeviceSource};
use crate::utils::error::{PanelError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;

/// Resolves the bridge executable from the process environment.
pub fn resolve_bridge_path<S: BridgeSettings + ?Sized>(settings: &S) -> PathBuf {
    resolve_bridge_path_with(settings, |name| std::env::var(name).ok())
}

/// Same as [`resolve_bridge_path`] with an explicit variable lookup.
///
/// The first SDK-root variable with a non-empty value decides: if the
/// executable exists under its tools directory that absolute path is used,
/// otherwise the bare executable name is returned for a PATH lookup at
/// launch. Later variables are not consulted once one is set.
pub fn resolve_bridge_path_with<S, F>(settings: &S, lookup: F) -> PathBuf
where
    S: BridgeSettings + ?Sized,
    F: Fn(&str) -> Option<String>,
{
    let fallback = PathBuf::from(settings.executable());

    let sdk_root = settings
        .sdk_root_vars()
        .iter()
        .find_map(|var| lookup(var.as_str()).filter(|value| !value.is_empty()).map(|value| (var, value)));

    let Some((var, root)) = sdk_root else {
        tracing::debug!("No SDK root set, using {} from PATH", settings.executable());
        return fallback;
    };

    let candidate = Path::new(&root)
        .join(settings.tools_dir())
        .join(executable_file_name(settings.executable()));

    if candidate.exists() {
        let resolved = std::path::absolute(&candidate).unwrap_or(candidate);
        tracing::debug!("Resolved bridge via {}: {}", var, resolved.display());
        resolved
    } else {
        tracing::debug!(
            "{} not found under {}={}, using {} from PATH",
            candidate.display(),
            var,
            root,
            settings.executable()
        );
        fallback
    }
}

fn executable_file_name(executable: &str) -> String {
    if Path::new(executable).extension().is_some() {
        executable.to_string()
    } else {
        format!("{}{}", executable, std::env::consts::EXE_SUFFIX)
    }
}

/// Parses the bridge's device table.
///
/// The first line is a header and is always dropped. Blank lines and rows
/// without both a serial and a state column are skipped.
pub fn parse_device_list(output: &str) -> Vec<DeviceRecord> {
    output
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = parse_device_line(line);
            if record.is_none() {
                tracing::trace!("Skipping device row {:?}", line);
            }
            record
        })
        .collect()
}

fn parse_device_line(line: &str) -> Option<DeviceRecord> {
    let mut fields = line.split('\t');
    let serial = fields.next()?.trim();
    let state = fields.next()?.trim();

    if serial.is_empty() || state.is_empty() {
        return None;
    }

    Some(DeviceRecord {
        serial: serial.to_string(),
        state: state.to_string(),
    })
}

/// Runs the bridge and parses its output. Blocks until the process exits.
pub fn list_devices_blocking<S: BridgeSettings + ?Sized>(settings: &S) -> Result<Vec<DeviceRecord>> {
    let executable = resolve_bridge_path(settings);
    run_bridge(&executable, settings.subcommand())
}

/// Runs `executable subcommand` with stdin closed and collects its devices.
///
/// A non-zero exit is only an error when stdout held no device rows.
pub fn run_bridge(executable: &Path, subcommand: &str) -> Result<Vec<DeviceRecord>> {
    tracing::debug!("Running {} {}", executable.display(), subcommand);

    let output = Command::new(executable)
        .arg(subcommand)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| PanelError::BridgeSpawn {
            executable: executable.display().to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let records = parse_device_list(&stdout);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if records.is_empty() {
            return Err(PanelError::BridgeExit {
                executable: executable.display().to_string(),
                code: output.status.code(),
                stderr,
            });
        }
        tracing::warn!(
            "{} exited with {} but listed {} device(s)",
            executable.display(),
            output.status,
            records.len()
        );
    }

    tracing::debug!("Bridge listed {} device(s)", records.len());
    Ok(records)
}

/// [`DeviceSource`] backed by the real bridge executable.
pub struct AdbBridge<C: BridgeSettings> {
    settings: Arc<C>,
}

impl<C: BridgeSettings> AdbBridge<C> {
    pub fn new(settings: C) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &C {
        &self.settings
    }

    pub fn resolved_path(&self) -> PathBuf {
        resolve_bridge_path(self.settings.as_ref())
    }
}

#[async_trait]
impl<C: BridgeSettings + 'static> DeviceSource for AdbBridge<C> {
    async fn list_devices(&self) -> Result<Vec<DeviceRecord>> {
        let settings = Arc::clone(&self.settings);
        tokio::task::spawn_blocking(move || list_devices_blocking(settings.as_ref())).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BridgeConfig;
    use std::collections::HashMap;

    fn record(serial: &str, state: &str) -> DeviceRecord {
        DeviceRecord {
            serial: serial.to_string(),
            state: state.to_string(),
        }
    }

    #[test]
    fn test_parse_two_devices_in_order() {
        let output = "List of devices attached\nABC123\tdevice\n\nXYZ999\toffline\n";
        assert_eq!(
            parse_device_list(output),
            vec![record("ABC123", "device"), record("XYZ999", "offline")]
        );
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse_device_list("List of devices attached\n").is_empty());
        assert!(parse_device_list("List of devices attached\n\n").is_empty());
        assert!(parse_device_list("").is_empty());
    }

    #[test]
    fn test_parse_drops_rows_without_state() {
        assert!(parse_device_list("List of devices attached\nABC123\n").is_empty());
        assert_eq!(
            parse_device_list("List of devices attached\nABC123\nemulator-5554\tdevice\n"),
            vec![record("emulator-5554", "device")]
        );
    }

    #[test]
    fn test_parse_header_is_dropped_even_if_it_looks_like_data() {
        assert_eq!(
            parse_device_list("HEAD\tdevice\nR58M\tunauthorized\n"),
            vec![record("R58M", "unauthorized")]
        );
    }

    #[test]
    fn test_parse_trims_and_ignores_extra_fields() {
        let output = "List of devices attached\r\n  ABC123 \t device \tusb:1-1\r\n";
        assert_eq!(parse_device_list(output), vec![record("ABC123", "device")]);
    }

    #[test]
    fn test_parse_drops_empty_columns() {
        assert!(parse_device_list("List of devices attached\n\tdevice\nABC\t \n").is_empty());
    }

    #[test]
    fn test_resolve_without_sdk_root_uses_bare_name() {
        let config = BridgeConfig::default();
        let path = resolve_bridge_path_with(&config, |_| None);
        assert_eq!(path, PathBuf::from("adb"));
    }

    #[test]
    fn test_resolve_skips_empty_variables() {
        let config = BridgeConfig::default();
        let env: HashMap<&str, &str> = [("ANDROID_HOME", ""), ("ANDROID_SDK_ROOT", "/no/such/sdk")].into();
        let path = resolve_bridge_path_with(&config, |name| env.get(name).map(|v| v.to_string()));
        assert_eq!(path, PathBuf::from("adb"));
    }

    #[test]
    fn test_resolve_prefers_existing_executable_under_sdk_root() {
        let sdk = tempfile::TempDir::new().unwrap();
        let tools = sdk.path().join("platform-tools");
        std::fs::create_dir_all(&tools).unwrap();
        let adb = tools.join(executable_file_name("adb"));
        std::fs::write(&adb, b"").unwrap();

        let config = BridgeConfig::default();
        let root = sdk.path().to_string_lossy().to_string();
        let path = resolve_bridge_path_with(&config, |name| {
            (name == "ANDROID_SDK_ROOT").then(|| root.clone())
        });
        assert_eq!(path, adb);
        assert!(path.is_absolute());
    }

    #[test]
    fn test_resolve_first_set_variable_wins() {
        let sdk = tempfile::TempDir::new().unwrap();
        let tools = sdk.path().join("platform-tools");
        std::fs::create_dir_all(&tools).unwrap();
        std::fs::write(tools.join(executable_file_name("adb")), b"").unwrap();

        let config = BridgeConfig::default();
        let root = sdk.path().to_string_lossy().to_string();
        let path = resolve_bridge_path_with(&config, |name| match name {
            "ANDROID_HOME" => Some("/no/such/sdk".to_string()),
            "ANDROID_SDK_ROOT" => Some(root.clone()),
            _ => None,
        });
        assert_eq!(path, PathBuf::from("adb"));
    }

    #[test]
    fn test_run_bridge_spawn_failure() {
        let result = run_bridge(Path::new("/nonexistent/adb-binary-that-does-not-exist"), "devices");
        match result {
            Err(PanelError::BridgeSpawn { executable, .. }) => {
                assert!(executable.contains("adb-binary-that-does-not-exist"));
            }
            other => panic!("Expected BridgeSpawn, got {other:?}"),
        }
    }
}
