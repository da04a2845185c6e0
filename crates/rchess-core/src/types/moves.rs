//! 指し手（Move）
//!
//! 16bit形式: `from(6bit) | to(6bit) << 6 | flag(4bit) << 12`。
//! 置換表にはこの16bit値をそのまま格納する。

use super::Square;

/// 指し手の種別フラグ（4bit）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    Quiet = 0,
    DoublePawnPush = 1,
    KingCastle = 2,
    QueenCastle = 3,
    Capture = 4,
    EnPassant = 5,
    PromoteKnight = 8,
    PromoteBishop = 9,
    PromoteRook = 10,
    PromoteQueen = 11,
    PromoteKnightCapture = 12,
    PromoteBishopCapture = 13,
    PromoteRookCapture = 14,
    PromoteQueenCapture = 15,
}

impl MoveFlag {
    /// 4bit値から変換（6, 7 は未使用）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<MoveFlag> {
        match n {
            0 => Some(MoveFlag::Quiet),
            1 => Some(MoveFlag::DoublePawnPush),
            2 => Some(MoveFlag::KingCastle),
            3 => Some(MoveFlag::QueenCastle),
            4 => Some(MoveFlag::Capture),
            5 => Some(MoveFlag::EnPassant),
            8 => Some(MoveFlag::PromoteKnight),
            9 => Some(MoveFlag::PromoteBishop),
            10 => Some(MoveFlag::PromoteRook),
            11 => Some(MoveFlag::PromoteQueen),
            12 => Some(MoveFlag::PromoteKnightCapture),
            13 => Some(MoveFlag::PromoteBishopCapture),
            14 => Some(MoveFlag::PromoteRookCapture),
            15 => Some(MoveFlag::PromoteQueenCapture),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self as u8 & 0b1000 != 0
    }

    /// UCI表記の成り駒文字
    const fn promotion_char(self) -> Option<char> {
        if !self.is_promotion() {
            return None;
        }
        Some(match self as u8 & 0b11 {
            0 => 'n',
            1 => 'b',
            2 => 'r',
            _ => 'q',
        })
    }
}

/// 指し手（16bit）
///
/// `Move::NONE`（全bit 0）は「指し手なし」。a1→a1 は実在しないので衝突しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Move(u16);

impl Move {
    /// 指し手なし
    pub const NONE: Move = Move(0);

    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Move {
        Move(from.index() as u16 | (to.index() as u16) << 6 | (flag as u16) << 12)
    }

    /// 16bit値から復元（フラグが未定義値なら None）
    #[inline]
    pub const fn from_u16_checked(raw: u16) -> Option<Move> {
        match MoveFlag::from_u8((raw >> 12) as u8) {
            Some(_) => Some(Move(raw)),
            None => None,
        }
    }

    #[inline]
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn from(self) -> Square {
        Square::from_index((self.0 & 0x3F) as usize).unwrap_or(Square::A1)
    }

    #[inline]
    pub fn to(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3F) as usize).unwrap_or(Square::A1)
    }

    #[inline]
    pub fn flag(self) -> MoveFlag {
        MoveFlag::from_u8((self.0 >> 12) as u8).unwrap_or(MoveFlag::Quiet)
    }

    /// UCI形式（"e2e4", "e7e8q"）に変換
    pub fn to_uci(self) -> String {
        if self.is_none() {
            return "0000".to_string();
        }
        let mut s = format!("{}{}", self.from(), self.to());
        if let Some(c) = self.flag().promotion_char() {
            s.push(c);
        }
        s
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_uci())
    }
}
