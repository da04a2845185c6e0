//! 境界値種別（Bound）

/// 境界値種別（置換表に格納する値の種類）
///
/// 判定は `probe` の窓 `[alpha, beta]` に対して行う。
/// - `LowerBound`: alpha 側の境界。復元値が alpha 以下なら alpha を返してよい
/// - `UpperBound`: beta 側の境界。復元値が beta 以上なら beta を返してよい
///
/// 置換表内では 2bit で格納し、0 は「未書き込み」に予約する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Bound {
    /// 正確な値（PVノード）
    Exact = 1,
    /// alpha 側の境界
    LowerBound = 2,
    /// beta 側の境界
    UpperBound = 3,
}

impl Bound {
    /// 2bit値から変換（0 は未書き込み）
    #[inline]
    pub const fn from_bits(n: u8) -> Option<Bound> {
        match n {
            1 => Some(Bound::Exact),
            2 => Some(Bound::LowerBound),
            3 => Some(Bound::UpperBound),
            _ => None,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}
