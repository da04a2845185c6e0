//! 升（Square）

/// 升（a1 = 0, b1 = 1, ..., h8 = 63）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// 升の数
    pub const NUM: usize = 64;

    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    /// 筋（0 = a 〜 7 = h）と段（0 = 1 〜 7 = 8）から生成
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 { Some(Square(rank * 8 + file)) } else { None }
    }

    /// インデックスから生成
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < Self::NUM { Some(Square(index as u8)) } else { None }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    /// 座標表記（"e3" など）から変換
    pub fn parse(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let f = chars.next()?;
        let r = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&f) || !('1'..='8').contains(&r) {
            return None;
        }
        Square::new(f as u8 - b'a', r as u8 - b'1')
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coordinates() {
        let sq = Square::new(4, 2).unwrap();
        assert_eq!(sq.index(), 20);
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.rank(), 2);
        assert_eq!(sq.to_string(), "e3");
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn test_square_parse() {
        assert_eq!(Square::parse("a1"), Some(Square::A1));
        assert_eq!(Square::parse("h8"), Some(Square::H8));
        assert_eq!(Square::parse("i1"), None);
        assert_eq!(Square::parse("e9"), None);
        assert_eq!(Square::parse("e33"), None);
        assert_eq!(Square::parse(""), None);
    }
}
