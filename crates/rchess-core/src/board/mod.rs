//! 局面表現モジュール
//!
//! 置換表が参照する局面情報（駒別Bitboard・手番・キャスリング権・アンパッサン升）を
//! `BoardView` として定義し、その最小実装 `Board` を提供する。
//! 指し手生成・合法手判定は持たない。
//!
//! `Board` のハッシュキーは `put_piece` / `remove_piece` / `set_*` を通じて
//! 差分更新され、常に `generate_hash_key` による全計算と一致する。

mod fen;

pub use fen::{FenError, START_FEN};

use crate::types::{Bitboard, CastlingRights, Color, Piece, Square};
use crate::zobrist::keying;

/// ハッシュキー計算に必要な局面情報（読み取り専用）
pub trait BoardView {
    /// 駒ごとの占有Bitboard
    fn pieces(&self, pc: Piece) -> Bitboard;
    /// 手番
    fn side_to_move(&self) -> Color;
    /// アンパッサン対象升
    fn en_passant(&self) -> Option<Square>;
    /// キャスリング権
    fn castling(&self) -> CastlingRights;
}

/// 局面
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    bitboards: [Bitboard; Piece::NUM],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    /// 差分更新されるハッシュキー
    key: u64,
}

impl Board {
    /// 駒のない局面（白番・キャスリング権なし）
    pub fn empty() -> Self {
        let mut board = Board {
            bitboards: [Bitboard::EMPTY; Piece::NUM],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            key: 0,
        };
        board.key = keying().generate_hash_key(&board);
        board
    }

    /// 平手初期局面
    pub fn startpos() -> Self {
        // START_FEN は固定文字列なので解析に失敗しない
        Self::from_fen(START_FEN).unwrap_or_else(|_| Self::empty())
    }

    /// 差分更新されたハッシュキー
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// 升上の駒
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        Piece::all().find(|pc| self.bitboards[pc.index()].contains(sq))
    }

    /// 全駒の占有Bitboard
    pub fn occupied(&self) -> Bitboard {
        self.bitboards.iter().fold(Bitboard::EMPTY, |acc, bb| acc | *bb)
    }

    /// 空き升に駒を置く
    pub fn put_piece(&mut self, pc: Piece, sq: Square) {
        debug_assert!(self.piece_on(sq).is_none(), "put_piece on occupied square {sq}");
        self.bitboards[pc.index()].set(sq);
        self.key ^= keying().psq(pc, sq);
    }

    /// 升上の駒を取り除く
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let pc = self.piece_on(sq)?;
        self.bitboards[pc.index()].clear(sq);
        self.key ^= keying().psq(pc, sq);
        Some(pc)
    }

    /// 駒を移動する（移動先の駒は取り除かれる）
    ///
    /// 合法性は検査しない。取った駒を返す。
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let pc = self.remove_piece(from)?;
        let captured = self.remove_piece(to);
        self.put_piece(pc, to);
        captured
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        if self.side_to_move != color {
            self.key ^= keying().side();
            self.side_to_move = color;
        }
    }

    pub fn set_castling(&mut self, rights: CastlingRights) {
        let ctx = keying();
        self.key ^= ctx.castling(self.castling) ^ ctx.castling(rights);
        self.castling = rights;
    }

    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        let ctx = keying();
        if let Some(old) = self.en_passant {
            self.key ^= ctx.enpassant(old);
        }
        if let Some(new) = sq {
            self.key ^= ctx.enpassant(new);
        }
        self.en_passant = sq;
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl BoardView for Board {
    #[inline]
    fn pieces(&self, pc: Piece) -> Bitboard {
        self.bitboards[pc.index()]
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    fn castling(&self) -> CastlingRights {
        self.castling
    }
}
