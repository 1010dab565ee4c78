pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{AppConfig, BridgeConfig};

pub use crate::core::{
    bridge::{parse_device_list, AdbBridge},
    calculator::CalculatorSession,
    device_panel::{DevicePanel, RefreshRequest},
    formatter::derive,
};
pub use domain::model::{DeviceListState, DeviceRecord, FormatterResult, NumericInputPair};
pub use utils::error::{PanelError, Result};
