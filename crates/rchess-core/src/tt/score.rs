//! 詰みスコアの ply 補正
//!
//! 探索中の詰みスコアは root からの手数で表されるため、同じ局面でも到達した ply によって
//! 値が変わる。置換表にはその局面から見た手数に直して格納し、読み出し時に現在の
//! ply で root 基準へ戻す。2つの関数は同じ ply に対して（飽和しない範囲で）厳密に逆変換になる。

use crate::types::Value;

/// 置換表に格納する値へ変換
///
/// - `v > threshold`（詰ます）: `v + ply`
/// - `v < -threshold`（詰まされる）: `v - ply`
/// - それ以外: そのまま
///
/// 加減算は i32 の範囲で飽和する。
#[inline]
pub fn value_to_tt(v: Value, ply: u8, threshold: Value) -> Value {
    let ply = i32::from(ply);
    if v > threshold {
        Value::new(v.raw().saturating_add(ply))
    } else if v < -threshold {
        Value::new(v.raw().saturating_sub(ply))
    } else {
        v
    }
}

/// 置換表から読み出した値を現在の ply 基準へ戻す
///
/// 格納値は補正で閾値からさらに離れる方向にしか動かないため、
/// 格納値の符号と閾値だけで補正の有無を判定できる。
#[inline]
pub fn value_from_tt(v: Value, ply: u8, threshold: Value) -> Value {
    let ply = i32::from(ply);
    if v > threshold {
        Value::new(v.raw().saturating_sub(ply))
    } else if v < -threshold {
        Value::new(v.raw().saturating_add(ply))
    } else {
        v
    }
}
