//! 置換表ベンチマーク
//!
//! 乱数キーで store / probe を繰り返し、一致率・カットオフ率・使用率を計測する。
//! 同じシードからは同じ操作列が生成される。

use std::time::Instant;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rchess_core::tt::TranspositionTable;
use rchess_core::types::{Bound, Move, MoveFlag, Square, Value};
use serde::Serialize;

use crate::config::BenchConfig;

const ALPHA: Value = Value::new(-50);
const BETA: Value = Value::new(50);
const MAX_BENCH_DEPTH: i32 = 20;
const MAX_BENCH_PLY: u8 = 64;

/// ベンチマーク結果
#[derive(Clone, Debug, Serialize)]
pub struct BenchReport {
    pub entry_count: usize,
    pub size_bytes: usize,
    pub large_pages: bool,
    pub searches: u32,
    pub stores: u64,
    pub probes: u64,
    /// キーが一致した probe の数
    pub key_matches: u64,
    /// 値が返った probe の数
    pub cutoffs: u64,
    /// 最終世代の使用率（1000分率）
    pub hashfull: i32,
    pub elapsed_ms: f64,
    /// 1秒あたりの操作数（store + probe）
    pub ops_per_sec: f64,
}

impl BenchReport {
    pub fn match_rate(&self) -> f64 {
        ratio(self.key_matches, self.probes)
    }

    pub fn cutoff_rate(&self) -> f64 {
        ratio(self.cutoffs, self.probes)
    }
}

fn ratio(n: u64, d: u64) -> f64 {
    if d == 0 { 0.0 } else { n as f64 / d as f64 }
}

/// キー番号を64bitキーに散らす（splitmix64 の最終段）
pub fn scramble(k: u64) -> u64 {
    let mut z = k.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// from != to の指し手（`Move::NONE` にならない）
fn random_move(rng: &mut Xoshiro256PlusPlus) -> Move {
    let from = rng.random_range(0..Square::NUM);
    let to = (from + rng.random_range(1..Square::NUM)) % Square::NUM;
    match (Square::from_index(from), Square::from_index(to)) {
        (Some(from), Some(to)) => Move::new(from, to, MoveFlag::Quiet),
        _ => Move::NONE,
    }
}

fn random_bound(rng: &mut Xoshiro256PlusPlus) -> Bound {
    match rng.random_range(0..3) {
        0 => Bound::Exact,
        1 => Bound::LowerBound,
        _ => Bound::UpperBound,
    }
}

/// ベンチマークを実行
pub fn run_bench(tt: &TranspositionTable, config: &BenchConfig) -> BenchReport {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let key_space = config.key_space.max(1);
    let mut report = BenchReport {
        entry_count: tt.entry_count(),
        size_bytes: tt.size_bytes(),
        large_pages: tt.uses_large_pages(),
        searches: config.searches,
        stores: 0,
        probes: 0,
        key_matches: 0,
        cutoffs: 0,
        hashfull: 0,
        elapsed_ms: 0.0,
        ops_per_sec: 0.0,
    };

    let start = Instant::now();
    for search in 0..config.searches {
        tt.new_search();

        for _ in 0..config.stores_per_search {
            let key = scramble(rng.random_range(0..key_space));
            let value = Value::new(rng.random_range(-500..=500));
            let depth = rng.random_range(0..=MAX_BENCH_DEPTH);
            let ply = rng.random_range(0..MAX_BENCH_PLY);
            tt.prefetch(key);
            tt.store(key, value, depth, random_move(&mut rng), random_bound(&mut rng), ply);
        }
        report.stores += config.stores_per_search;

        for _ in 0..config.probes_per_search {
            let key = scramble(rng.random_range(0..key_space));
            let depth = rng.random_range(0..=MAX_BENCH_DEPTH);
            let ply = rng.random_range(0..MAX_BENCH_PLY);
            let result = tt.probe(key, depth, ALPHA, BETA, ply);
            if !result.mv.is_none() {
                report.key_matches += 1;
            }
            if result.is_hit() {
                report.cutoffs += 1;
            }
        }
        report.probes += config.probes_per_search;

        debug!("search {search}: generation={} hashfull={}", tt.generation(), tt.hashfull(0));
    }

    let elapsed = start.elapsed();
    report.hashfull = tt.hashfull(0);
    report.elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        report.ops_per_sec = (report.stores + report.probes) as f64 / secs;
    }

    info!(
        "bench finished: {} ops in {:.1} ms, match={:.3} cutoff={:.3}",
        report.stores + report.probes,
        report.elapsed_ms,
        report.match_rate(),
        report.cutoff_rate()
    );
    report
}
