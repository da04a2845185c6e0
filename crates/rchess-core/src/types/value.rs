//! 評価値（Value）
//!
//! `Value::MATE` 付近を詰みスコアとして予約している。
//! root から `ply` 手で詰ます値は `MATE - ply`、詰まされる値は `-MATE + ply`。

use super::MAX_PLY;

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 引き分け
    pub const DRAW: Value = Value(0);
    /// 詰み（勝ち側の最大スコア）
    pub const MATE: Value = Value(32000);
    /// 無限大
    pub const INFINITE: Value = Value(32001);

    /// 最大探索深度内での詰みスコア
    ///
    /// 置換表の詰みスコア補正の既定しきい値。これより大きい値を「詰ます」、
    /// 符号反転より小さい値を「詰まされる」とみなす。
    pub const MATE_IN_MAX_PLY: Value = Value(Self::MATE.0 - MAX_PLY);
    /// 最大探索深度内での詰まされスコア
    pub const MATED_IN_MAX_PLY: Value = Value(-Self::MATE_IN_MAX_PLY.0);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// ply手で詰ますスコア
    #[inline]
    pub const fn mate_in(ply: i32) -> Value {
        Value(Self::MATE.0 - ply)
    }

    /// ply手で詰まされるスコア
    #[inline]
    pub const fn mated_in(ply: i32) -> Value {
        Value(-Self::MATE.0 + ply)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add<i32> for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: i32) -> Value {
        Value(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: i32) -> Value {
        Value(self.0 - rhs)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_in() {
        assert_eq!(Value::mate_in(3).raw(), 31997);
        assert_eq!(Value::mated_in(3).raw(), -31997);
        assert!(Value::mate_in(MAX_PLY - 1) > Value::MATE_IN_MAX_PLY);
        assert!(Value::mated_in(MAX_PLY - 1) < Value::MATED_IN_MAX_PLY);
    }

    #[test]
    fn test_value_ops() {
        assert_eq!(-Value::new(5), Value::new(-5));
        assert_eq!(Value::new(5) + 3, Value::new(8));
        assert_eq!(Value::new(5) - 7, Value::new(-2));
    }
}
