//! 置換表の設定

use crate::types::Value;
use serde::{Deserialize, Serialize};

/// 既定のハッシュサイズ（MB）
pub const DEFAULT_HASH_MB: usize = 16;

/// 置換表の設定
///
/// TOML などから読み込めるよう、欠けた項目は既定値で補う。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtConfig {
    /// ハッシュサイズ（MB）
    pub hash_mb: usize,
    /// 詰みスコア判定の閾値（生の値）
    pub mate_threshold: i32,
}

impl Default for TtConfig {
    fn default() -> Self {
        Self {
            hash_mb: DEFAULT_HASH_MB,
            mate_threshold: Value::MATE_IN_MAX_PLY.raw(),
        }
    }
}

impl TtConfig {
    pub fn with_hash_mb(hash_mb: usize) -> Self {
        Self {
            hash_mb,
            ..Self::default()
        }
    }

    /// 設定値を検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mate_threshold <= 0 || self.mate_threshold >= Value::MATE.raw() {
            return Err(ConfigError::MateThresholdOutOfRange(self.mate_threshold));
        }
        Ok(())
    }

    #[inline]
    pub fn mate_threshold(&self) -> Value {
        Value::new(self.mate_threshold)
    }

    /// 要求バイト数（オーバーフロー時は飽和）
    #[inline]
    pub fn budget_bytes(&self) -> usize {
        self.hash_mb.saturating_mul(1024 * 1024)
    }
}

/// 設定エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("mate threshold {0} must be in 1..{max}", max = Value::MATE.raw())]
    MateThresholdOutOfRange(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TtConfig::default();
        assert_eq!(config.hash_mb, 16);
        assert_eq!(config.mate_threshold(), Value::MATE_IN_MAX_PLY);
        assert!(config.validate().is_ok());
        assert_eq!(config.budget_bytes(), 16 * 1024 * 1024);
    }

    #[test]
    fn test_config_validate_threshold() {
        let mut config = TtConfig::default();
        config.mate_threshold = 0;
        assert_eq!(config.validate(), Err(ConfigError::MateThresholdOutOfRange(0)));
        config.mate_threshold = Value::MATE.raw();
        assert!(config.validate().is_err());
        config.mate_threshold = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_budget_saturates() {
        let config = TtConfig::with_hash_mb(usize::MAX);
        assert_eq!(config.budget_bytes(), usize::MAX);
    }
}
