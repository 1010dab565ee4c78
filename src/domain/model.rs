use serde::{Deserialize, Serialize};

/// The two raw text fields of the calculator panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericInputPair {
    pub text1: String,
    pub text2: String,
}

impl NumericInputPair {
    pub fn new(text1: impl Into<String>, text2: impl Into<String>) -> Self {
        Self {
            text1: text1.into(),
            text2: text2.into(),
        }
    }

    pub fn clear(&mut self) {
        self.text1.clear();
        self.text2.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FormatterResult {
    InvalidFirst,
    InvalidSecond,
    AwaitingInput,
    Sum(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub serial: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceListState {
    Loading,
    Loaded(Vec<DeviceRecord>),
    Failed(String),
}

impl DeviceListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DeviceListState::Loading)
    }

    pub fn records(&self) -> &[DeviceRecord] {
        match self {
            DeviceListState::Loaded(records) => records,
            _ => &[],
        }
    }
}
