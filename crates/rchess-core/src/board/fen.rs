//! FEN形式の解析・出力

use super::Board;
use crate::types::{CastlingRights, Color, Piece, Square};
use crate::zobrist::keying;

/// 平手初期局面
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FEN解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN has too few fields: {0}")]
    MissingField(&'static str),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid side to move: {0}")]
    InvalidSide(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastling(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassant(String),

    #[error("invalid move counter: {0}")]
    InvalidCounter(String),
}

impl Board {
    /// FEN文字列から局面を生成
    ///
    /// 手数欄（halfmove / fullmove）は省略可。
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::MissingField("placement"))?;
        let side = fields.next().ok_or(FenError::MissingField("side to move"))?;
        let castling = fields.next().ok_or(FenError::MissingField("castling"))?;
        let ep = fields.next().ok_or(FenError::MissingField("en passant"))?;

        let mut board = Board::empty();
        parse_placement(&mut board, placement)?;

        match side {
            "w" => board.set_side_to_move(Color::White),
            "b" => board.set_side_to_move(Color::Black),
            _ => return Err(FenError::InvalidSide(side.to_string())),
        }

        let rights = CastlingRights::parse_fen(castling)
            .ok_or_else(|| FenError::InvalidCastling(castling.to_string()))?;
        board.set_castling(rights);

        if ep != "-" {
            let sq = Square::parse(ep)
                .filter(|sq| sq.rank() == 2 || sq.rank() == 5)
                .ok_or_else(|| FenError::InvalidEnPassant(ep.to_string()))?;
            board.set_en_passant(Some(sq));
        }

        if let Some(s) = fields.next() {
            board.halfmove_clock =
                s.parse().map_err(|_| FenError::InvalidCounter(s.to_string()))?;
        }
        if let Some(s) = fields.next() {
            board.fullmove_number =
                s.parse().map_err(|_| FenError::InvalidCounter(s.to_string()))?;
        }

        debug_assert_eq!(board.key, keying().generate_hash_key(&board));
        Ok(board)
    }

    /// FEN文字列に変換
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                let pc = Square::new(file, rank).and_then(|sq| self.piece_on(sq));
                match pc {
                    Some(pc) => {
                        if empty > 0 {
                            placement.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        placement.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self.en_passant.map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {side} {} {ep} {} {}",
            self.castling.to_fen(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let invalid = || FenError::InvalidPlacement(placement.to_string());

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid());
    }

    for (i, row) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file = 0u8;
        for c in row.chars() {
            if let Some(n) = c.to_digit(10) {
                if n == 0 || n > 8 {
                    return Err(invalid());
                }
                file += n as u8;
            } else {
                let pc = Piece::from_char(c).ok_or_else(invalid)?;
                let sq = Square::new(file, rank).ok_or_else(invalid)?;
                board.put_piece(pc, sq);
                file += 1;
            }
            if file > 8 {
                return Err(invalid());
            }
        }
        if file != 8 {
            return Err(invalid());
        }
    }
    Ok(())
}
