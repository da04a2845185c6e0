//! 置換表モジュール
//!
//! 探索結果をキャッシュする置換表（Transposition Table）。
//!
//! - `TTSlot`: エントリ（16バイト、64bitキー）
//! - `TranspositionTable`: テーブル本体（`key mod entry_count` の直接写像）
//! - 世代管理（`new_search`）
//! - 詰みスコアの ply 補正（`value_to_tt` / `value_from_tt`）
//!
//! # エントリのビット配置
//!
//! データ語（64bit）:
//! `[0..16) score | [16..32) move | [32..40) depth | [40..42) bound | [42..64) generation`
//!
//! - score: i16（範囲外は飽和）
//! - depth: `DEPTH_MIN` を 0 とする u8（`DEPTH_MIN..=DEPTH_MAX`）
//!
//! キー語にはキーそのものではなく `key ^ data` を格納する。
//! 並列探索で書き込みと読み込みが交錯しても、ちぎれた読み取りは
//! キー不一致として通常の Miss になる。

mod alloc;
mod config;
mod entry;
mod error;
mod score;
mod table;

pub use config::{ConfigError, TtConfig};
pub use entry::TTData;
pub use error::{TtError, TtResult};
pub use score::{value_from_tt, value_to_tt};
pub use table::{ProbeResult, TranspositionTable};

use crate::types::MAX_PLY;

/// 確保失敗時の縮小リトライで下回ってはならない最小エントリ数
pub const MIN_ENTRY_COUNT: usize = 256;

/// Generation関連の定数（22bit、約419万回の探索で循環）
pub const GENERATION_BITS: u32 = 22;
pub const GENERATION_CYCLE: u32 = 1 << GENERATION_BITS;
pub const GENERATION_MASK: u32 = GENERATION_CYCLE - 1;

/// 格納できる深さの範囲（u8 に `DEPTH_MIN` だけずらして格納）
pub const DEPTH_MAX: i32 = MAX_PLY;
pub const DEPTH_MIN: i32 = DEPTH_MAX - u8::MAX as i32;

/// 格納できるスコアの範囲（i16）
pub const SCORE_MIN: i32 = i16::MIN as i32;
pub const SCORE_MAX: i32 = i16::MAX as i32;
