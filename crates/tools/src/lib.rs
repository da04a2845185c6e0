//! 置換表の計測・解析ツール群
//!
//! - `config`: TOML設定ファイル
//! - `bench`: 置換表ベンチマーク

pub mod bench;
pub mod config;

pub use bench::{BenchReport, run_bench};
pub use config::{BenchConfig, ToolsConfig};
