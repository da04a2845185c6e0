//! ツール共通の設定ファイル（TOML）
//!
//! ```toml
//! [tt]
//! hash_mb = 64
//!
//! [bench]
//! seed = 1
//! searches = 4
//! ```
//!
//! 欠けた項目は既定値で補い、CLI引数で上書きできる。

use std::path::Path;

use anyhow::{Context, Result, bail};
use rchess_core::tt::TtConfig;
use serde::{Deserialize, Serialize};

/// 設定ファイル全体
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub tt: TtConfig,
    pub bench: BenchConfig,
}

/// ベンチマーク設定
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// 乱数シード
    pub seed: u64,
    /// 探索（世代）の回数
    pub searches: u32,
    /// 1探索あたりの store 回数
    pub stores_per_search: u64,
    /// 1探索あたりの probe 回数
    pub probes_per_search: u64,
    /// キーの種類数
    pub key_space: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            searches: 8,
            stores_per_search: 1_000_000,
            probes_per_search: 1_000_000,
            key_space: 2_000_000,
        }
    }
}

impl ToolsConfig {
    /// TOMLファイルから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config: {}", path.display()))
    }

    /// 指定があれば読み込み、なければ既定値
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.tt.validate()?;
        if self.bench.key_space == 0 {
            bail!("bench.key_space must be >= 1");
        }
        Ok(())
    }
}
