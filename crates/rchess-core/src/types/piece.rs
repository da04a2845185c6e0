//! 駒種（PieceType）と駒（Piece）

use super::Color;

/// 駒種（手番なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 6;

    /// 全ての駒種
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// FEN文字（小文字）
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

/// 手番付きの駒（0..12）
///
/// 並びは白ポーン〜白キング、黒ポーン〜黒キング。
/// `index()` がそのまま駒別Bitboardと駒×升キーの添字になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// 駒の数
    pub const NUM: usize = 12;

    pub const W_PAWN: Piece = Piece::new(Color::White, PieceType::Pawn);
    pub const W_KNIGHT: Piece = Piece::new(Color::White, PieceType::Knight);
    pub const W_BISHOP: Piece = Piece::new(Color::White, PieceType::Bishop);
    pub const W_ROOK: Piece = Piece::new(Color::White, PieceType::Rook);
    pub const W_QUEEN: Piece = Piece::new(Color::White, PieceType::Queen);
    pub const W_KING: Piece = Piece::new(Color::White, PieceType::King);
    pub const B_PAWN: Piece = Piece::new(Color::Black, PieceType::Pawn);
    pub const B_KNIGHT: Piece = Piece::new(Color::Black, PieceType::Knight);
    pub const B_BISHOP: Piece = Piece::new(Color::Black, PieceType::Bishop);
    pub const B_ROOK: Piece = Piece::new(Color::Black, PieceType::Rook);
    pub const B_QUEEN: Piece = Piece::new(Color::Black, PieceType::Queen);
    pub const B_KING: Piece = Piece::new(Color::Black, PieceType::King);

    /// 手番と駒種から生成
    #[inline]
    pub const fn new(color: Color, pt: PieceType) -> Piece {
        Piece(color as u8 * PieceType::NUM as u8 + pt as u8)
    }

    /// インデックスから生成
    #[inline]
    pub const fn from_index(index: usize) -> Option<Piece> {
        if index < Self::NUM { Some(Piece(index as u8)) } else { None }
    }

    /// 全ての駒（インデックス順）
    pub fn all() -> impl Iterator<Item = Piece> {
        (0..Self::NUM as u8).map(Piece)
    }

    #[inline]
    pub const fn color(self) -> Color {
        if (self.0 as usize) < PieceType::NUM { Color::White } else { Color::Black }
    }

    #[inline]
    pub const fn piece_type(self) -> PieceType {
        PieceType::ALL[self.0 as usize % PieceType::NUM]
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// FEN文字から変換（白は大文字）
    pub fn from_char(c: char) -> Option<Piece> {
        let pt = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(color, pt))
    }

    /// FEN文字に変換
    pub fn to_char(self) -> char {
        let c = self.piece_type().to_char();
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
