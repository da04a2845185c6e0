//! TranspositionTable本体
//!
//! - SlotTable: エントリの固定長配列
//! - TranspositionTable: テーブル本体
//! - probe/store操作

use super::alloc::{AllocKind, Allocation};
use super::entry::{TTData, TTSlot, relative_age};
use super::score::{value_from_tt, value_to_tt};
use super::{DEPTH_MAX, DEPTH_MIN, GENERATION_MASK, MIN_ENTRY_COUNT, TtConfig, TtError, TtResult};
use crate::types::{Bound, Depth, Move, Value};
use log::{debug, error, info, warn};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU32, Ordering};

/// エントリサイズ（バイト）
pub const ENTRY_SIZE: usize = std::mem::size_of::<TTSlot>();

/// hashfull の標本数
const HASHFULL_SAMPLES: usize = 1000;

struct SlotTable {
    alloc: Allocation,
    len: usize,
}

impl SlotTable {
    fn try_new<F>(len: usize, allocate: &mut F) -> Option<Self>
    where
        F: FnMut(usize, usize) -> Option<Allocation>,
    {
        let bytes = len.checked_mul(ENTRY_SIZE)?;
        let alloc = allocate(bytes, std::mem::align_of::<TTSlot>())?;
        debug_assert!(alloc.size() >= bytes);
        Some(Self { alloc, len })
    }

    fn uses_large_pages(&self) -> bool {
        self.alloc.kind() == AllocKind::LargePages
    }
}

impl Deref for SlotTable {
    type Target = [TTSlot];

    fn deref(&self) -> &Self::Target {
        // SAFETY: 領域はゼロ初期化済みで len 個の TTSlot を収め、TTSlot の配置に揃っている。
        // 全ビット 0 の AtomicU64 は有効な値。
        unsafe { std::slice::from_raw_parts(self.alloc.ptr().as_ptr() as *const TTSlot, self.len) }
    }
}

impl DerefMut for SlotTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: deref と同じ。&mut self により排他アクセス。
        unsafe {
            std::slice::from_raw_parts_mut(self.alloc.ptr().as_ptr() as *mut TTSlot, self.len)
        }
    }
}

/// `requested_bytes` からエントリ配列を確保する
///
/// 失敗するたびに予算を半分にして再試行し、`MIN_ENTRY_COUNT` を下回ったら諦める。
fn allocate_slots<F>(requested_bytes: usize, mut allocate: F) -> TtResult<SlotTable>
where
    F: FnMut(usize, usize) -> Option<Allocation>,
{
    let mut budget = requested_bytes;
    loop {
        let count = budget / ENTRY_SIZE;
        if count < MIN_ENTRY_COUNT {
            error!(
                "Couldn't allocate transposition table: requested {requested_bytes} bytes, \
                 gave up below {MIN_ENTRY_COUNT} entries"
            );
            return Err(TtError::AllocationFloor {
                requested_bytes,
                budget_bytes: budget,
                min_entries: MIN_ENTRY_COUNT,
            });
        }

        if let Some(table) = SlotTable::try_new(count, &mut allocate) {
            if budget < requested_bytes {
                warn!("Transposition table reduced to {budget} bytes ({count} entries)");
            }
            return Ok(table);
        }

        warn!("Couldn't allocate {budget} bytes for transposition table, trying with half");
        budget /= 2;
    }
}

/// probe結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    /// カットオフに使える値（Miss なら None）
    pub value: Option<Value>,
    /// 指し手の候補（キーが一致しなければ `Move::NONE`）
    ///
    /// 深さ不足や境界不一致で `value` が None でも設定される。
    pub mv: Move,
}

impl ProbeResult {
    /// キー不一致
    pub const MISS: Self = Self {
        value: None,
        mv: Move::NONE,
    };

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.value.is_some()
    }
}

/// 置換表
///
/// `probe` / `store` / `new_search` は `&self` で呼べるため、`Arc` で
/// 複数の探索スレッドから共有できる。エントリ単位の排他は行わない。
pub struct TranspositionTable {
    /// エントリの配列（`key mod len` で直接引く）
    table: SlotTable,
    /// 世代カウンター（下位 `GENERATION_BITS` bit を使用）
    generation: AtomicU32,
    /// 詰みスコア判定の閾値
    mate_threshold: Value,
}

impl TranspositionTable {
    /// 新しい置換表を作成（サイズはMB単位）
    pub fn new(mb_size: usize) -> TtResult<Self> {
        Self::with_config(&TtConfig::with_hash_mb(mb_size))
    }

    /// 設定から置換表を作成
    pub fn with_config(config: &TtConfig) -> TtResult<Self> {
        Self::with_allocator(config, Allocation::try_allocate)
    }

    fn with_allocator<F>(config: &TtConfig, allocate: F) -> TtResult<Self>
    where
        F: FnMut(usize, usize) -> Option<Allocation>,
    {
        config.validate()?;
        let table = allocate_slots(config.budget_bytes(), allocate)?;
        info!(
            "Transposition table: {} entries ({} bytes), large_pages={}",
            table.len,
            table.len * ENTRY_SIZE,
            table.uses_large_pages()
        );

        Ok(Self {
            table,
            generation: AtomicU32::new(0),
            mate_threshold: config.mate_threshold(),
        })
    }

    /// サイズを変更
    ///
    /// 既存エントリは引き継がず、空のテーブルを作り直す。
    /// 確保に失敗した場合は元のテーブルを保持したままエラーを返す。
    pub fn resize(&mut self, mb_size: usize) -> TtResult<()> {
        let requested = TtConfig::with_hash_mb(mb_size).budget_bytes();
        if requested / ENTRY_SIZE == self.table.len {
            self.clear();
            return Ok(());
        }

        debug!("Clearing hash memory...");
        self.table = allocate_slots(requested, Allocation::try_allocate)?;
        self.generation.store(0, Ordering::Release);
        info!("Transposition table resized: {} entries", self.table.len);
        Ok(())
    }

    /// クリア（全エントリを空にし、世代を 0 に戻す）
    pub fn clear(&mut self) {
        #[cfg(feature = "diagnostics")]
        let start = std::time::Instant::now();

        self.generation.store(0, Ordering::Release);
        let len = self.table.len;
        let threads = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);

        if threads <= 1 || len < threads * 1024 {
            // サイズが小さい場合やスレッド数が1の場合は逐次クリア
            self.table.fill_with(TTSlot::new);
        } else {
            // スレッドを分割してゼロクリア
            let chunk = len.div_ceil(threads);
            std::thread::scope(|scope| {
                for part in self.table.chunks_mut(chunk) {
                    scope.spawn(move || part.fill_with(TTSlot::new));
                }
            });
        }

        #[cfg(feature = "diagnostics")]
        debug!("Transposition table cleared: {len} entries in {:?}", start.elapsed());
        #[cfg(not(feature = "diagnostics"))]
        debug!("Transposition table cleared: {len} entries");
    }

    /// 新しい探索を開始（世代を進める）
    ///
    /// 探索側が root 探索の開始時に一度だけ呼ぶ。ワーカーが `store` を始める前に
    /// 呼び出しを終えていること。
    pub fn new_search(&self) {
        self.generation.fetch_add(1, Ordering::Release);
    }

    /// 現在の世代を取得
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation.load(Ordering::Acquire) & GENERATION_MASK
    }

    /// エントリ数
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.table.len
    }

    /// エントリ配列のバイト数
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.table.len * ENTRY_SIZE
    }

    #[inline]
    pub fn mate_threshold(&self) -> Value {
        self.mate_threshold
    }

    /// Large Pagesを使って確保されたかを返す
    pub fn uses_large_pages(&self) -> bool {
        self.table.uses_large_pages()
    }

    /// 置換表を検索
    ///
    /// キーが一致すれば格納手を必ず返す。値は次の場合のみ返す:
    /// - 格納深さ >= `depth` かつ
    ///   - `Exact`: 復元値
    ///   - `LowerBound` で復元値 <= `alpha`: `alpha`
    ///   - `UpperBound` で復元値 >= `beta`: `beta`
    pub fn probe(&self, key: u64, depth: Depth, alpha: Value, beta: Value, ply: u8) -> ProbeResult {
        let Some(data) = self.slot(key).read(key) else {
            return ProbeResult::MISS;
        };

        let mut result = ProbeResult {
            value: None,
            mv: data.mv,
        };

        if data.depth < depth {
            return result;
        }

        let value = value_from_tt(data.value, ply, self.mate_threshold);
        result.value = match data.bound {
            Bound::Exact => Some(value),
            Bound::LowerBound if value <= alpha => Some(alpha),
            Bound::UpperBound if value >= beta => Some(beta),
            _ => None,
        };
        result
    }

    /// エントリに保存
    ///
    /// 上書き条件（いずれか）:
    /// - 空きエントリ
    /// - 古い世代のエントリ
    /// - 格納済みの深さ <= `depth`
    ///
    /// 深さは `DEPTH_MIN..=DEPTH_MAX`、補正後のスコアは i16 の範囲に飽和して格納する。
    pub fn store(&self, key: u64, value: Value, depth: Depth, mv: Move, bound: Bound, ply: u8) {
        let slot = self.slot(key);
        let generation = self.generation();
        let depth = depth.clamp(DEPTH_MIN, DEPTH_MAX);

        if let Some((_, old)) = slot.load() {
            let stale = relative_age(old.generation, generation) != 0;
            if !stale && old.depth > depth {
                return;
            }
        }

        slot.save(
            key,
            &TTData {
                value: value_to_tt(value, ply, self.mate_threshold),
                depth,
                bound,
                mv,
                generation,
            },
        );
    }

    /// キーに一致するエントリをそのまま読み取る（値は格納時の補正済みのまま）
    pub fn peek(&self, key: u64) -> Option<TTData> {
        self.slot(key).read(key)
    }

    /// 置換表の使用率を1000分率で返す
    ///
    /// 先頭から最大1000エントリを標本とし、相対世代が `max_age` 以下のものを数える。
    pub fn hashfull(&self, max_age: u32) -> i32 {
        let generation = self.generation();
        let samples = HASHFULL_SAMPLES.min(self.table.len);
        let count = self
            .table
            .iter()
            .take(samples)
            .filter(|slot| {
                matches!(slot.load(), Some((_, d)) if relative_age(d.generation, generation) <= max_age)
            })
            .count();

        (count * 1000 / samples) as i32
    }

    /// 指定キーのエントリをプリフェッチ
    #[inline]
    pub fn prefetch(&self, key: u64) {
        let slot = self.slot(key);

        #[cfg(target_arch = "x86_64")]
        {
            use std::arch::x86_64::{_MM_HINT_T0, _mm_prefetch};
            // SAFETY: prefetch はメモリを読み書きしない
            unsafe { _mm_prefetch::<_MM_HINT_T0>(slot as *const TTSlot as *const i8) };
        }

        #[cfg(not(target_arch = "x86_64"))]
        let _ = slot; // 何もしない
    }

    /// エントリインデックスを計算
    #[inline]
    fn index(&self, key: u64) -> usize {
        (key % self.table.len as u64) as usize
    }

    #[inline]
    fn slot(&self, key: u64) -> &TTSlot {
        &self.table[self.index(key)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tt::{ConfigError, SCORE_MAX, SCORE_MIN};
    use crate::types::MAX_PLY;
    use crate::types::{MoveFlag, Square};

    const ALPHA: Value = Value::new(-100);
    const BETA: Value = Value::new(100);

    fn mv(from: &str, to: &str) -> Move {
        Move::new(Square::parse(from).unwrap(), Square::parse(to).unwrap(), MoveFlag::Quiet)
    }

    fn small_tt() -> TranspositionTable {
        TranspositionTable::new(1).unwrap()
    }

    #[test]
    fn test_tt_new() {
        let tt = small_tt(); // 1MB
        assert_eq!(tt.entry_count(), 1024 * 1024 / ENTRY_SIZE);
        assert!(tt.size_bytes() <= 1024 * 1024);
        assert_eq!(tt.generation(), 0);
        assert_eq!(tt.mate_threshold(), Value::MATE_IN_MAX_PLY);
    }

    #[test]
    fn test_tt_new_zero_size_fails() {
        let err = TranspositionTable::new(0).err().unwrap();
        assert_eq!(
            err,
            TtError::AllocationFloor {
                requested_bytes: 0,
                budget_bytes: 0,
                min_entries: MIN_ENTRY_COUNT
            }
        );
    }

    #[test]
    fn test_tt_invalid_config() {
        let config = TtConfig {
            hash_mb: 1,
            mate_threshold: -5,
        };
        let err = TranspositionTable::with_config(&config).err().unwrap();
        assert_eq!(err, TtError::Config(ConfigError::MateThresholdOutOfRange(-5)));
    }

    #[test]
    fn test_tt_allocation_halves_until_success() {
        let mut attempts = Vec::new();
        let tt = TranspositionTable::with_allocator(&TtConfig::with_hash_mb(1), |bytes, align| {
            attempts.push(bytes);
            if bytes > 256 * 1024 { None } else { Allocation::try_allocate(bytes, align) }
        })
        .unwrap();

        assert_eq!(attempts, vec![1024 * 1024, 512 * 1024, 256 * 1024]);
        assert_eq!(tt.entry_count(), 256 * 1024 / ENTRY_SIZE);
        assert!(tt.entry_count() >= MIN_ENTRY_COUNT);

        // 縮小後のテーブルも通常通り使える
        tt.store(42, Value::new(7), 3, Move::NONE, Bound::Exact, 0);
        assert_eq!(tt.probe(42, 3, ALPHA, BETA, 0).value, Some(Value::new(7)));
    }

    #[test]
    fn test_tt_allocation_floor_is_bounded() {
        let mut attempts = 0;
        let result = TranspositionTable::with_allocator(&TtConfig::with_hash_mb(1), |_, _| {
            attempts += 1;
            None
        });

        // 1MiB, 512KiB, ..., 4KiB (= 256 エントリ) の 9 回で打ち切る
        assert_eq!(attempts, 9);
        match result {
            Err(TtError::AllocationFloor {
                requested_bytes,
                budget_bytes,
                min_entries,
            }) => {
                assert_eq!(requested_bytes, 1024 * 1024);
                assert!(budget_bytes / ENTRY_SIZE < min_entries);
            }
            _ => panic!("expected AllocationFloor"),
        }
    }

    #[test]
    fn test_tt_allocation_from_saturated_budget() {
        // オーバーフローするサイズでも縮小リトライが有限回で止まる
        let mut attempts = 0;
        let tt = TranspositionTable::with_allocator(&TtConfig::with_hash_mb(usize::MAX), |b, a| {
            attempts += 1;
            if b > 64 * 1024 { None } else { Allocation::try_allocate(b, a) }
        })
        .unwrap();
        assert!(attempts <= 64);
        assert!(tt.size_bytes() <= 64 * 1024);
    }

    #[test]
    fn test_tt_probe_empty() {
        let tt = small_tt();
        assert_eq!(tt.probe(12345, 0, ALPHA, BETA, 0), ProbeResult::MISS);
        assert_eq!(tt.probe(0, 0, ALPHA, BETA, 0), ProbeResult::MISS);
        assert!(tt.peek(0).is_none());
    }

    #[test]
    fn test_tt_probe_and_store() {
        let tt = small_tt();
        let key = 0x1234_5678_9ABC_DEF0;
        let best = mv("e2", "e4");

        tt.store(key, Value::new(50), 10, best, Bound::Exact, 3);

        let result = tt.probe(key, 10, ALPHA, BETA, 3);
        assert_eq!(result.value, Some(Value::new(50)));
        assert_eq!(result.mv, best);
        assert!(result.is_hit());

        let result = tt.probe(key, 4, ALPHA, BETA, 3);
        assert_eq!(result.value, Some(Value::new(50)));
    }

    #[test]
    fn test_tt_depth_gating_keeps_move_hint() {
        let mut tt = small_tt();
        let key = 777;
        let best = mv("g1", "f3");

        for bound in [Bound::Exact, Bound::LowerBound, Bound::UpperBound] {
            tt.clear();
            tt.store(key, Value::new(0), 5, best, bound, 0);
            let result = tt.probe(key, 8, ALPHA, BETA, 0);
            assert_eq!(result.value, None, "{bound:?}");
            assert_eq!(result.mv, best);
        }
    }

    #[test]
    fn test_tt_bound_licensing() {
        let mut tt = small_tt();
        let key = 99;
        let best = mv("d2", "d4");
        let cases = [
            (Bound::Exact, 30, Some(Value::new(30))),
            (Bound::LowerBound, -150, Some(ALPHA)),
            (Bound::LowerBound, -100, Some(ALPHA)),
            (Bound::LowerBound, -99, None),
            (Bound::LowerBound, 500, None),
            (Bound::UpperBound, 150, Some(BETA)),
            (Bound::UpperBound, 100, Some(BETA)),
            (Bound::UpperBound, 99, None),
            (Bound::UpperBound, -500, None),
        ];

        for (bound, score, expected) in cases {
            tt.clear();
            tt.store(key, Value::new(score), 6, best, bound, 0);
            let result = tt.probe(key, 6, ALPHA, BETA, 0);
            assert_eq!(result.value, expected, "{bound:?} score={score}");
            assert_eq!(result.mv, best);
        }
    }

    #[test]
    fn test_tt_key_mismatch_same_slot() {
        let tt = small_tt();
        let n = tt.entry_count() as u64;
        tt.store(5, Value::new(1), 3, mv("a2", "a3"), Bound::Exact, 0);

        // 同じスロットに写る別キー
        assert_eq!(tt.probe(5 + n, 0, ALPHA, BETA, 0), ProbeResult::MISS);
    }

    #[test]
    fn test_tt_replacement_same_generation() {
        let tt = small_tt();
        let n = tt.entry_count() as u64;
        let (k1, k2) = (17, 17 + n);

        tt.store(k1, Value::new(10), 9, mv("e2", "e4"), Bound::Exact, 0);

        // 浅い書き込みは深いエントリを上書きしない（別キーでも同じキーでも）
        tt.store(k2, Value::new(20), 4, mv("d2", "d4"), Bound::Exact, 0);
        tt.store(k1, Value::new(30), 8, mv("c2", "c4"), Bound::Exact, 0);
        assert_eq!(tt.peek(k1).unwrap().value, Value::new(10));
        assert!(tt.peek(k2).is_none());

        // 同じ深さなら上書きする
        tt.store(k2, Value::new(40), 9, mv("d2", "d4"), Bound::LowerBound, 0);
        let data = tt.peek(k2).unwrap();
        assert_eq!(data.value, Value::new(40));
        assert_eq!(data.bound, Bound::LowerBound);
        assert!(tt.peek(k1).is_none());
    }

    #[test]
    fn test_tt_replacement_old_generation() {
        let tt = small_tt();
        let n = tt.entry_count() as u64;
        let (k1, k2) = (1000, 1000 + n);

        tt.store(k1, Value::new(10), 60, mv("e2", "e4"), Bound::Exact, 0);
        tt.new_search();

        // 古い世代のエントリは深さに関係なく置き換わる
        tt.store(k2, Value::new(-3), 1, mv("b1", "c3"), Bound::UpperBound, 0);
        let data = tt.peek(k2).unwrap();
        assert_eq!(data.depth, 1);
        assert_eq!(data.generation, 1);
        assert!(tt.peek(k1).is_none());
    }

    #[test]
    fn test_tt_mate_score_roundtrip() {
        let tt = small_tt();
        let key = 4242;
        let mate = Value::mate_in(12);
        let mated = Value::mated_in(9);

        tt.store(key, mate, 7, Move::NONE, Bound::Exact, 5);
        assert_eq!(tt.peek(key).unwrap().value, Value::mate_in(7));
        assert_eq!(tt.probe(key, 7, ALPHA, BETA, 5).value, Some(mate));
        // 2手浅い ply で到達すると root からの手数も2手短い
        assert_eq!(tt.probe(key, 7, ALPHA, BETA, 3).value, Some(Value::mate_in(10)));

        tt.store(key, mated, 7, Move::NONE, Bound::Exact, 4);
        assert_eq!(tt.probe(key, 7, ALPHA, BETA, 4).value, Some(mated));
        assert_eq!(tt.probe(key, 7, ALPHA, BETA, 6).value, Some(Value::mated_in(11)));
    }

    #[test]
    fn test_tt_custom_mate_threshold() {
        let config = TtConfig {
            hash_mb: 1,
            mate_threshold: 1000,
        };
        let tt = TranspositionTable::with_config(&config).unwrap();
        tt.store(1, Value::new(1500), 2, Move::NONE, Bound::Exact, 10);
        assert_eq!(tt.peek(1).unwrap().value, Value::new(1510));
        assert_eq!(tt.probe(1, 2, ALPHA, BETA, 10).value, Some(Value::new(1500)));

        tt.store(2, Value::new(900), 2, Move::NONE, Bound::Exact, 10);
        assert_eq!(tt.peek(2).unwrap().value, Value::new(900));
    }

    #[test]
    fn test_tt_new_search() {
        let tt = small_tt();
        assert_eq!(tt.generation(), 0);

        tt.new_search();
        assert_eq!(tt.generation(), 1);

        tt.new_search();
        assert_eq!(tt.generation(), 2);
    }

    #[test]
    fn test_tt_generation_cycle() {
        let tt = small_tt();
        for _ in 0..300 {
            tt.new_search();
        }
        assert_eq!(tt.generation(), 300);

        // 最大世代から1回進めると 0 に戻る
        tt.generation.store(GENERATION_MASK, Ordering::Release);
        tt.new_search();
        assert_eq!(tt.generation(), 0);
    }

    #[test]
    fn test_tt_old_entry_replaced_after_many_searches() {
        let mut tt = small_tt();
        let n = tt.entry_count() as u64;

        for searches in [1, 63, 64, 65, 128, 1000] {
            tt.clear();
            tt.store(5, Value::new(1), 30, mv("e2", "e4"), Bound::Exact, 0);
            for _ in 0..searches {
                tt.new_search();
            }
            tt.store(5 + n, Value::new(2), 1, mv("d2", "d4"), Bound::Exact, 0);
            let data = tt.peek(5 + n);
            assert!(data.is_some(), "not replaced after {searches} searches");
            assert!(tt.peek(5).is_none());
        }
    }

    #[test]
    fn test_tt_max_ply_depth_roundtrip() {
        let tt = small_tt();
        tt.store(9, Value::new(33), MAX_PLY, mv("e2", "e4"), Bound::Exact, 0);
        assert_eq!(tt.peek(9).unwrap().depth, MAX_PLY);
        assert_eq!(tt.probe(9, MAX_PLY, ALPHA, BETA, 0).value, Some(Value::new(33)));
        assert_eq!(tt.probe(9, MAX_PLY + 1, ALPHA, BETA, 0).value, None);

        // 同世代で MAX_PLY 未満の書き込みは上書きしない
        let n = tt.entry_count() as u64;
        tt.store(9 + n, Value::new(1), MAX_PLY - 1, Move::NONE, Bound::Exact, 0);
        assert!(tt.peek(9 + n).is_none());
    }

    #[test]
    fn test_tt_store_extreme_scores() {
        let tt = small_tt();
        tt.store(11, Value::new(i32::MAX), 3, Move::NONE, Bound::Exact, 5);
        assert_eq!(tt.peek(11).unwrap().value, Value::new(SCORE_MAX));
        assert_eq!(tt.probe(11, 3, ALPHA, BETA, 5).value, Some(Value::new(SCORE_MAX - 5)));

        tt.store(12, Value::new(i32::MIN), 3, Move::NONE, Bound::Exact, 5);
        assert_eq!(tt.peek(12).unwrap().value, Value::new(SCORE_MIN));
        assert_eq!(tt.probe(12, 3, ALPHA, BETA, 5).value, Some(Value::new(SCORE_MIN + 5)));

        // 詰みスコアは最大 ply でも範囲内に収まり往復する
        tt.store(13, Value::mate_in(1), 3, Move::NONE, Bound::Exact, u8::MAX);
        assert_eq!(tt.probe(13, 3, ALPHA, BETA, u8::MAX).value, Some(Value::mate_in(1)));
        tt.store(14, -Value::INFINITE, 3, Move::NONE, Bound::Exact, u8::MAX);
        assert_eq!(tt.probe(14, 3, ALPHA, BETA, u8::MAX).value, Some(-Value::INFINITE));
    }

    #[test]
    fn test_tt_clear() {
        let mut tt = small_tt();
        let key = 31337;
        tt.new_search();
        tt.store(key, Value::new(100), 10, mv("e7", "e5"), Bound::LowerBound, 0);

        tt.clear();

        assert_eq!(tt.generation(), 0);
        assert_eq!(tt.probe(key, 0, ALPHA, BETA, 0), ProbeResult::MISS);
        assert!((0..tt.entry_count() as u64).all(|k| tt.peek(k).is_none()));
    }

    #[test]
    fn test_tt_resize() {
        let mut tt = small_tt();
        let initial_count = tt.entry_count();
        tt.store(5, Value::new(1), 1, Move::NONE, Bound::Exact, 0);
        tt.new_search();

        tt.resize(2).unwrap();
        assert_eq!(tt.entry_count(), initial_count * 2);
        assert_eq!(tt.generation(), 0);
        assert!(tt.peek(5).is_none());

        tt.resize(1).unwrap();
        assert_eq!(tt.entry_count(), initial_count);

        // 同じサイズへの変更はクリアと同じ
        tt.store(5, Value::new(1), 1, Move::NONE, Bound::Exact, 0);
        tt.resize(1).unwrap();
        assert!(tt.peek(5).is_none());
    }

    #[test]
    fn test_tt_resize_failure_keeps_table() {
        let mut tt = small_tt();
        tt.store(5, Value::new(1), 1, Move::NONE, Bound::Exact, 0);
        assert!(tt.resize(0).is_err());
        assert_eq!(tt.entry_count(), 1024 * 1024 / ENTRY_SIZE);
        assert!(tt.peek(5).is_some());
    }

    #[test]
    fn test_tt_hashfull() {
        let tt = small_tt();
        assert_eq!(tt.hashfull(0), 0);

        // 先頭1000エントリの半分を埋める
        for key in (0..1000u64).step_by(2) {
            tt.store(key, Value::ZERO, 1, Move::NONE, Bound::Exact, 0);
        }
        assert_eq!(tt.hashfull(0), 500);

        tt.new_search();
        assert_eq!(tt.hashfull(0), 0);
        assert_eq!(tt.hashfull(1), 500);
    }

    #[test]
    fn test_tt_prefetch_any_key() {
        let tt = small_tt();
        tt.prefetch(0);
        tt.prefetch(u64::MAX);
    }

    #[test]
    fn test_entry_size() {
        assert_eq!(ENTRY_SIZE, 16);
    }
}
