use thiserror::Error;

use crate::board::{Board, BoardError};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected an integer, found {0:?}")]
    BadToken(String),
    #[error("expected {expected} tiles for a {n}x{n} board, found {found}")]
    TileCount {
        n: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Reads a board from text: the dimension n first, then n*n tiles in
/// row-major order, all whitespace-separated. 0 marks the blank.
pub fn parse_board(input: &str) -> Result<Board, ParseError> {
    let mut tokens = input.split_whitespace();

    let n: usize = match tokens.next() {
        None => return Err(ParseError::Empty),
        Some(tok) => tok
            .parse()
            .map_err(|_| ParseError::BadToken(tok.to_string()))?,
    };
    if n < 2 {
        return Err(BoardError::TooSmall(n).into());
    }

    let values: Vec<u32> = tokens
        .map(|tok| {
            tok.parse::<u32>()
                .map_err(|_| ParseError::BadToken(tok.to_string()))
        })
        .collect::<Result<_, _>>()?;

    if values.len() != n * n {
        return Err(ParseError::TileCount {
            n,
            expected: n * n,
            found: values.len(),
        });
    }

    let tiles = values.chunks(n).map(|chunk| chunk.to_vec()).collect();
    Ok(Board::from_tiles(tiles)?)
}
