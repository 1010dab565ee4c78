use crate::domain::model::DeviceRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the device panel gets its list from.
#[async_trait]
pub trait DeviceSource: Send + Sync {
    async fn list_devices(&self) -> Result<Vec<DeviceRecord>>;
}

/// How to locate and invoke the device-bridge executable.
pub trait BridgeSettings: Send + Sync {
    /// SDK-root variables, checked in order.
    fn sdk_root_vars(&self) -> &[String];
    /// Directory under the SDK root holding the executable.
    fn tools_dir(&self) -> &str;
    fn executable(&self) -> &str;
    fn subcommand(&self) -> &str;
}
