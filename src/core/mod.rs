pub mod bridge;
pub mod calculator;
pub mod device_panel;
pub mod formatter;
pub mod labels;

pub use crate::domain::model::{DeviceListState, DeviceRecord, FormatterResult, NumericInputPair};
pub use crate::domain::ports::{BridgeSettings, DeviceSource};
pub use crate::utils::error::Result;
