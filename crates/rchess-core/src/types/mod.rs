//! 基本型モジュール
//!
//! - `Color`: 手番（白/黒）
//! - `PieceType` / `Piece`: 駒種と手番付きの駒
//! - `Square`: 升（a1 = 0 〜 h8 = 63）
//! - `Bitboard`: 64bit盤面表現
//! - `CastlingRights`: キャスリング権（4bitマスク）
//! - `Move`: 16bit形式の指し手
//! - `Value` / `Bound` / `Depth`: 探索値・境界・深さ

mod bitboard;
mod bound;
mod castling;
mod color;
mod moves;
mod piece;
mod square;
mod value;

pub use bitboard::{Bitboard, BitboardIter};
pub use bound::Bound;
pub use castling::CastlingRights;
pub use color::Color;
pub use moves::{Move, MoveFlag};
pub use piece::{Piece, PieceType};
pub use square::Square;
pub use value::Value;

/// 探索深さ（ply単位）
pub type Depth = i32;

/// 探索の最大手数（root からの距離）
pub const MAX_PLY: i32 = 128;
