//! 置換表ベンチマーク
//!
//! 乱数キーで store / probe を繰り返し、一致率・使用率・処理速度を出力する。
//!
//! 使用例:
//! ```text
//! tt_bench --hash-mb 64 --searches 4
//! tt_bench --config bench.toml --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rchess_core::tt::TranspositionTable;
use tools::{ToolsConfig, run_bench};

#[derive(Parser, Debug)]
#[command(name = "tt_bench")]
#[command(about = "置換表の store/probe ベンチマーク")]
struct Cli {
    /// 設定ファイル（TOML）
    #[arg(long)]
    config: Option<PathBuf>,

    /// ハッシュサイズ（MB）、設定ファイルより優先
    #[arg(long)]
    hash_mb: Option<usize>,

    /// 乱数シード
    #[arg(long)]
    seed: Option<u64>,

    /// 探索（世代）の回数
    #[arg(long)]
    searches: Option<u32>,

    /// 1探索あたりの store 回数
    #[arg(long)]
    stores: Option<u64>,

    /// 1探索あたりの probe 回数
    #[arg(long)]
    probes: Option<u64>,

    /// キーの種類数
    #[arg(long)]
    key_space: Option<u64>,

    /// 結果をJSONで出力
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<ToolsConfig> {
        let mut config = ToolsConfig::load_or_default(self.config.as_deref())?;
        if let Some(v) = self.hash_mb {
            config.tt.hash_mb = v;
        }
        if let Some(v) = self.seed {
            config.bench.seed = v;
        }
        if let Some(v) = self.searches {
            config.bench.searches = v;
        }
        if let Some(v) = self.stores {
            config.bench.stores_per_search = v;
        }
        if let Some(v) = self.probes {
            config.bench.probes_per_search = v;
        }
        if let Some(v) = self.key_space {
            config.bench.key_space = v;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let mut tt = TranspositionTable::with_config(&config.tt)
        .context("failed to allocate transposition table")?;
    tt.clear();

    let report = run_bench(&tt, &config.bench);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("=== TT Bench ===");
        println!("Entries      : {}", report.entry_count);
        println!("Size         : {} bytes", report.size_bytes);
        println!("Large pages  : {}", report.large_pages);
        println!("Searches     : {}", report.searches);
        println!("Stores       : {}", report.stores);
        println!("Probes       : {}", report.probes);
        println!("Key matches  : {} ({:.2}%)", report.key_matches, report.match_rate() * 100.0);
        println!("Cutoffs      : {} ({:.2}%)", report.cutoffs, report.cutoff_rate() * 100.0);
        println!("Hashfull     : {}", report.hashfull);
        println!("Elapsed      : {:.1} ms", report.elapsed_ms);
        println!("Ops/sec      : {:.0}", report.ops_per_sec);
    }

    Ok(())
}
