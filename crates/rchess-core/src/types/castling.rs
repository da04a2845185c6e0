//! キャスリング権（CastlingRights）

/// キャスリング権（4bitマスク、0..16）
///
/// 組み合わせごとに1つのハッシュキーを持つため、値そのものを添字に使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// 組み合わせの数
    pub const NUM: usize = 16;

    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KING_SIDE: CastlingRights = CastlingRights(1);
    pub const WHITE_QUEEN_SIDE: CastlingRights = CastlingRights(2);
    pub const BLACK_KING_SIDE: CastlingRights = CastlingRights(4);
    pub const BLACK_QUEEN_SIDE: CastlingRights = CastlingRights(8);
    pub const ALL: CastlingRights = CastlingRights(15);

    #[inline]
    pub const fn from_bits(bits: u8) -> Option<CastlingRights> {
        if (bits as usize) < Self::NUM { Some(CastlingRights(bits)) } else { None }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn contains(self, other: CastlingRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn with(self, other: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 | other.0)
    }

    #[inline]
    pub const fn without(self, other: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 & !other.0)
    }

    /// FENのキャスリング欄（"KQkq" / "-"）から変換
    pub fn parse_fen(s: &str) -> Option<CastlingRights> {
        if s == "-" {
            return Some(Self::NONE);
        }
        let mut rights = Self::NONE;
        for c in s.chars() {
            let r = match c {
                'K' => Self::WHITE_KING_SIDE,
                'Q' => Self::WHITE_QUEEN_SIDE,
                'k' => Self::BLACK_KING_SIDE,
                'q' => Self::BLACK_QUEEN_SIDE,
                _ => return None,
            };
            rights = rights.with(r);
        }
        Some(rights)
    }

    /// FENのキャスリング欄に変換
    pub fn to_fen(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        [
            (Self::WHITE_KING_SIDE, 'K'),
            (Self::WHITE_QUEEN_SIDE, 'Q'),
            (Self::BLACK_KING_SIDE, 'k'),
            (Self::BLACK_QUEEN_SIDE, 'q'),
        ]
        .iter()
        .filter(|(r, _)| self.contains(*r))
        .map(|(_, c)| *c)
        .collect()
    }
}
