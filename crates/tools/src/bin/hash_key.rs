//! FEN局面のハッシュキーを表示する
//!
//! 引数で与えた FEN（省略時は標準入力の各行）のキーを16進で出力する。

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use rchess_core::board::{Board, START_FEN};
use rchess_core::zobrist::{KeyingContext, keying};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "hash_key")]
#[command(about = "FEN局面のZobristハッシュキーを表示")]
struct Cli {
    /// FEN文字列（省略時は標準入力から1行1局面）
    fens: Vec<String>,

    /// 平手初期局面のキーを表示
    #[arg(long, default_value_t = false)]
    startpos: bool,

    /// 乱数テーブルのシード（省略時は既定テーブル）
    #[arg(long)]
    seed: Option<u64>,

    /// 解析できない行を読み飛ばす
    #[arg(long, default_value_t = false)]
    skip_invalid: bool,

    /// JSON Lines で出力
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct KeyRecord<'a> {
    fen: &'a str,
    key: String,
}

fn format_key(key: u64) -> String {
    format!("0x{key:016x}")
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let owned;
    let ctx: &KeyingContext = match cli.seed {
        Some(seed) => {
            owned = KeyingContext::new(seed);
            &owned
        }
        None => keying(),
    };

    let mut fens = cli.fens.clone();
    if cli.startpos {
        fens.insert(0, START_FEN.to_string());
    }
    if fens.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let line = line.trim();
            if !line.is_empty() {
                fens.push(line.to_string());
            }
        }
    }

    for fen in &fens {
        let board = match Board::from_fen(fen) {
            Ok(board) => board,
            Err(e) if cli.skip_invalid => {
                warn!("skip invalid FEN ({e}): {fen}");
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("invalid FEN: {fen}")),
        };

        let key = format_key(ctx.generate_hash_key(&board));
        if cli.json {
            println!("{}", serde_json::to_string(&KeyRecord { fen, key })?);
        } else {
            println!("{key}  {fen}");
        }
    }

    Ok(())
}
