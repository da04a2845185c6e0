//! # rchess-core
//!
//! チェス探索エンジン向けの置換表コアライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Piece, Move, Value, Bound, etc.）
//! - `board`: 局面表現（FEN入出力と差分ハッシュ更新のみ、合法手生成は持たない）
//! - `zobrist`: Zobristハッシュ
//! - `tt`: 置換表（Transposition Table）
//!

pub mod types;

pub mod board;
pub mod zobrist;

pub mod tt;

pub use board::{Board, BoardView, FenError};
pub use tt::{ProbeResult, TTData, TranspositionTable, TtConfig, TtError};
pub use zobrist::{KeyingContext, generate_hash_key, keying};
