//! Zobristハッシュ
//!
//! - `KeyingContext`: 乱数テーブル（駒×升・アンパッサン升・キャスリング権・手番）
//! - `keying()`: プロセス共有の既定テーブル
//!
//! テーブルは固定シードの `Xoshiro256PlusPlus` で一度だけ生成し、以後は変更しない。
//! 同じシードからは常に同じキーが得られる。

use crate::board::BoardView;
use crate::types::{CastlingRights, Color, Piece, Square};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::sync::OnceLock;

/// 既定シード
pub const DEFAULT_SEED: u64 = 0x0123_4567_89AB_CDEF;

/// Zobristハッシュ用乱数テーブル
pub struct KeyingContext {
    /// 駒×升 [Piece.index()][Square.index()]
    psq: [[u64; Square::NUM]; Piece::NUM],
    /// アンパッサン対象升
    enpassant: [u64; Square::NUM],
    /// キャスリング権の組み合わせ（16通り）
    castling: [u64; CastlingRights::NUM],
    /// 手番用（黒番のときに合成）
    side: u64,
}

impl KeyingContext {
    /// シードを指定してテーブルを生成
    pub fn new(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut ctx = KeyingContext {
            psq: [[0; Square::NUM]; Piece::NUM],
            enpassant: [0; Square::NUM],
            castling: [0; CastlingRights::NUM],
            side: 0,
        };

        for row in ctx.psq.iter_mut() {
            fill_nonzero(&mut rng, row);
        }
        fill_nonzero(&mut rng, &mut ctx.enpassant);
        fill_nonzero(&mut rng, &mut ctx.castling);
        ctx.side = next_nonzero(&mut rng);

        ctx
    }

    /// 駒と升のハッシュを取得
    #[inline]
    pub fn psq(&self, pc: Piece, sq: Square) -> u64 {
        self.psq[pc.index()][sq.index()]
    }

    /// アンパッサン対象升のハッシュを取得
    #[inline]
    pub fn enpassant(&self, sq: Square) -> u64 {
        self.enpassant[sq.index()]
    }

    /// キャスリング権のハッシュを取得
    #[inline]
    pub fn castling(&self, rights: CastlingRights) -> u64 {
        self.castling[rights.index()]
    }

    /// 手番のハッシュを取得
    #[inline]
    pub fn side(&self) -> u64 {
        self.side
    }

    /// 局面からハッシュキーを計算
    ///
    /// 駒配置・手番・キャスリング権・アンパッサン対象升のみに依存する。
    /// キャスリング権は権利なしの組み合わせも含めて常に合成する。
    pub fn generate_hash_key<B: BoardView + ?Sized>(&self, board: &B) -> u64 {
        let mut key = 0u64;

        for pc in Piece::all() {
            for sq in board.pieces(pc) {
                key ^= self.psq(pc, sq);
            }
        }

        if let Some(sq) = board.en_passant() {
            key ^= self.enpassant(sq);
        }

        key ^= self.castling(board.castling());

        if board.side_to_move() == Color::Black {
            key ^= self.side;
        }

        key
    }
}

impl Default for KeyingContext {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// 0 は XOR の単位元なので乱数値から除外する
fn next_nonzero(rng: &mut Xoshiro256PlusPlus) -> u64 {
    loop {
        let v = rng.next_u64();
        if v != 0 {
            return v;
        }
    }
}

fn fill_nonzero(rng: &mut Xoshiro256PlusPlus, keys: &mut [u64]) {
    for k in keys.iter_mut() {
        *k = next_nonzero(rng);
    }
}

static KEYING: OnceLock<KeyingContext> = OnceLock::new();

/// プロセス共有の既定テーブル（`DEFAULT_SEED` で初回アクセス時に生成）
pub fn keying() -> &'static KeyingContext {
    KEYING.get_or_init(KeyingContext::default)
}

/// 既定テーブルで局面のハッシュキーを計算
#[inline]
pub fn generate_hash_key<B: BoardView + ?Sized>(board: &B) -> u64 {
    keying().generate_hash_key(board)
}
