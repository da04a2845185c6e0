//! 置換表のエラー型

use super::ConfigError;

/// 置換表の確保・設定に関するエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TtError {
    /// 縮小リトライが最小エントリ数を下回った
    #[error(
        "transposition table allocation failed: requested {requested_bytes} bytes, \
         {budget_bytes} bytes would hold fewer than {min_entries} entries"
    )]
    AllocationFloor {
        requested_bytes: usize,
        budget_bytes: usize,
        min_entries: usize,
    },

    /// 設定値が不正
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for transposition table operations
pub type TtResult<T> = Result<T, TtError>;
