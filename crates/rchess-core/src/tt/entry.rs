//! 置換表エントリー
//!
//! TTSlot: 2つの `AtomicU64`（キー語・データ語）からなる16バイトのエントリ
//! TTData: 読み取り用のデータ構造

use super::{DEPTH_MAX, DEPTH_MIN, GENERATION_BITS, GENERATION_MASK, SCORE_MAX, SCORE_MIN};
use crate::types::{Bound, Depth, Move, Value};
use std::sync::atomic::{AtomicU64, Ordering};

const SCORE_SHIFT: u32 = 0;
const MOVE_SHIFT: u32 = 16;
const DEPTH_SHIFT: u32 = 32;
const BOUND_SHIFT: u32 = 40;
const GENERATION_SHIFT: u32 = 64 - GENERATION_BITS;

const _: () = assert!(BOUND_SHIFT + 2 == GENERATION_SHIFT);

/// 置換表エントリー
///
/// キー語は `key ^ data` を保持する。データ語の bound 欄が 0 なら未書き込み。
/// アクセスはすべて Relaxed で、エントリ単位の原子性は保証しない。
#[repr(C, align(16))]
pub(super) struct TTSlot {
    key: AtomicU64,
    data: AtomicU64,
}

// エントリサイズが16バイトであることを保証
const _: () = assert!(std::mem::size_of::<TTSlot>() == 16);

impl TTSlot {
    /// 新しい空のエントリを作成
    #[inline]
    pub(super) const fn new() -> Self {
        Self {
            key: AtomicU64::new(0),
            data: AtomicU64::new(0),
        }
    }

    /// エントリを読み取る（未書き込みなら None）
    ///
    /// 返すキーはキー語とデータ語から復元した値。
    #[inline]
    pub(super) fn load(&self) -> Option<(u64, TTData)> {
        let data = self.data.load(Ordering::Relaxed);
        let check = self.key.load(Ordering::Relaxed);
        TTData::unpack(data).map(|d| (check ^ data, d))
    }

    /// キーが一致する場合のみ読み取る
    #[inline]
    pub(super) fn read(&self, key: u64) -> Option<TTData> {
        match self.load() {
            Some((stored, data)) if stored == key => Some(data),
            _ => None,
        }
    }

    /// エントリに保存
    #[inline]
    pub(super) fn save(&self, key: u64, data: &TTData) {
        let word = data.pack();
        self.key.store(key ^ word, Ordering::Relaxed);
        self.data.store(word, Ordering::Relaxed);
    }
}

/// 置換表から読み取ったデータ
///
/// `value` は格納時に ply 補正された値で、探索側の値に戻すには
/// `value_from_tt` を通す。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTData {
    /// 探索値（root非依存に補正済み）
    pub value: Value,
    /// 探索深さ
    pub depth: Depth,
    /// 境界タイプ
    pub bound: Bound,
    /// 最善手
    pub mv: Move,
    /// 書き込み時の世代
    pub generation: u32,
}

impl TTData {
    #[inline]
    fn pack(&self) -> u64 {
        let score16 = self.value.raw().clamp(SCORE_MIN, SCORE_MAX) as i16 as u16;
        let depth8 = (self.depth.clamp(DEPTH_MIN, DEPTH_MAX) - DEPTH_MIN) as u8;
        ((score16 as u64) << SCORE_SHIFT)
            | ((self.mv.to_u16() as u64) << MOVE_SHIFT)
            | ((depth8 as u64) << DEPTH_SHIFT)
            | ((self.bound.bits() as u64 & 0x3) << BOUND_SHIFT)
            | (((self.generation & GENERATION_MASK) as u64) << GENERATION_SHIFT)
    }

    #[inline]
    fn unpack(word: u64) -> Option<TTData> {
        let bound = Bound::from_bits(((word >> BOUND_SHIFT) & 0x3) as u8)?;
        Some(TTData {
            value: Value::new((word >> SCORE_SHIFT) as u16 as i16 as i32),
            depth: (word >> DEPTH_SHIFT) as u8 as i32 + DEPTH_MIN,
            bound,
            mv: Move::from_u16_checked((word >> MOVE_SHIFT) as u16).unwrap_or(Move::NONE),
            generation: (word >> GENERATION_SHIFT) as u32 & GENERATION_MASK,
        })
    }
}

/// 相対的な世代（0 = 現世代）
#[inline]
pub(super) fn relative_age(entry_generation: u32, current: u32) -> u32 {
    current.wrapping_sub(entry_generation) & GENERATION_MASK
}
