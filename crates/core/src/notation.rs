use nom::{
    branch::alt,
    character::complete::{one_of, space0},
    combinator::{all_consuming, value},
    multi::many1,
    sequence::delimited,
    IResult,
};

use crate::{
    error::{Result, SetupError},
    game::{Color, File, Role, SideArrangement},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Piece {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
}

fn piece(i: &str) -> IResult<&str, Piece> {
    alt((
        value(Piece::King, one_of("Kk")),
        value(Piece::Queen, one_of("Qq")),
        value(Piece::Rook, one_of("Rr")),
        value(Piece::Bishop, one_of("Bb")),
        value(Piece::Knight, one_of("Nn")),
    ))(i)
}

fn back_rank(i: &str) -> IResult<&str, Vec<Piece>> {
    delimited(space0, many1(piece), space0)(i)
}

/// Reads a back rank written as piece letters, a to h (`RNBQKBNR`, case
/// ignored).
///
/// The bishop on `reference`'s dark parity becomes the dark bishop. Anything
/// that is not eight letters making up a full set of pieces is a
/// [`SetupError::MalformedArrangement`].
pub fn parse_back_rank(text: &str, reference: Color) -> Result<SideArrangement> {
    let (_, pieces) = all_consuming(back_rank)(text).map_err(|e| {
        SetupError::MalformedArrangement(format!("cannot read back rank {text:?}: {e}"))
    })?;

    if pieces.len() != File::ALL.len() {
        return Err(SetupError::MalformedArrangement(format!(
            "expected 8 pieces in {text:?}, found {}",
            pieces.len()
        )));
    }

    let assignments = pieces.into_iter().zip(File::ALL).map(|(piece, file)| {
        let role = match piece {
            Piece::King => Role::King,
            Piece::Queen => Role::Queen,
            Piece::Rook => Role::Rook,
            Piece::Knight => Role::Knight,
            Piece::Bishop if file.parity() == reference.dark_parity() => Role::DarkBishop,
            Piece::Bishop => Role::LightBishop,
        };
        (role, file)
    });

    SideArrangement::from_assignments(assignments)
}
