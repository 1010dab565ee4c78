//! Fixed user-facing text of the tool window.

pub const CALCULATOR_TITLE: &str = "足し算";
pub const FIRST_PLACEHOLDER: &str = "数値1";
pub const SECOND_PLACEHOLDER: &str = "数値2";

pub const INVALID_FIRST: &str = "エラー: 最初の値が無効です";
pub const INVALID_SECOND: &str = "エラー: 2番目の値が無効です";
pub const RESULT_PREFIX: &str = "結果: ";
pub const AWAITING_INPUT: &str = "数値を入力してください";

pub const DEVICE_PANEL_TITLE: &str = "接続デバイス一覧";
pub const REFRESH_BUTTON: &str = "更新";
pub const REFRESH_BUTTON_BUSY: &str = "更新中...";
pub const SEARCHING: &str = "デバイスを検索中...";
pub const NO_DEVICES: &str = "接続中のデバイスはありません";
pub const ERROR_PREFIX: &str = "エラー: ";

pub fn device_row(serial: &str, state: &str) -> String {
    format!("{serial} [{state}]")
}
