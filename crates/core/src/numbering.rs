//! Standard Chess960 start-position numbers (Scharnagl numbering).
//!
//! `n = light + 4 * (dark + 4 * (queen + 6 * knights))` where `light` is the
//! odd-file bishop's index among b, d, f, h, `dark` the even-file bishop's
//! index among a, c, e, g, `queen` the queen's index among the six files
//! left and `knights` the row of [`KNIGHT_PAIRS`] matching the knights among
//! the five files left after that.

use crate::{
    error::{Result, SetupError},
    game::{Color, File, SideArrangement},
};

pub const POSITION_COUNT: u16 = 960;

/// Number of `RNBQKBNR`.
pub const CLASSICAL_INDEX: u16 = 518;

const KNIGHT_PAIRS: [(usize, usize); 10] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (2, 4),
    (3, 4),
];

impl SideArrangement {
    /// Decodes a start-position number.
    ///
    /// The number only fixes where the pieces stand; `reference` decides which
    /// of the two bishops counts as the dark one.
    pub fn from_index(index: u16, reference: Color) -> Result<Self> {
        if index >= POSITION_COUNT {
            return Err(SetupError::InvalidArgument(format!(
                "start position {index} is outside 0..{POSITION_COUNT}"
            )));
        }

        let mut n = index as usize;
        let odd_bishop = File::ALL[(n % 4) * 2 + 1];
        n /= 4;
        let even_bishop = File::ALL[(n % 4) * 2];
        n /= 4;

        let mut empty: Vec<File> = File::ALL
            .into_iter()
            .filter(|&file| file != odd_bishop && file != even_bishop)
            .collect();
        let queen = empty.remove(n % 6);
        n /= 6;

        let (first, second) = KNIGHT_PAIRS[n];
        let knights = [empty[first], empty[second]];
        empty.retain(|file| !knights.contains(file));

        let (dark_bishop, light_bishop) = if reference.dark_parity() == 0 {
            (even_bishop, odd_bishop)
        } else {
            (odd_bishop, even_bishop)
        };

        Ok(Self::from_parts(
            dark_bishop,
            light_bishop,
            queen,
            knights,
            [empty[0], empty[2]],
            empty[1],
        ))
    }

    /// Start-position number, or `None` if the bishops share a parity or the
    /// king is not between the rooks.
    pub fn index(&self) -> Option<u16> {
        if !self.has_chess960_shape() {
            return None;
        }

        let (even_bishop, odd_bishop) = if self.dark_bishop().parity() == 0 {
            (self.dark_bishop(), self.light_bishop())
        } else {
            (self.light_bishop(), self.dark_bishop())
        };

        let mut empty: Vec<File> = File::ALL
            .into_iter()
            .filter(|&file| file != odd_bishop && file != even_bishop)
            .collect();
        let queen = empty.iter().position(|&file| file == self.queen())?;
        empty.remove(queen);

        // Knights are stored sorted, so the pair comes out ascending.
        let [first, second] = self.knights();
        let first = empty.iter().position(|&file| file == first)?;
        let second = empty.iter().position(|&file| file == second)?;
        let knights = KNIGHT_PAIRS.iter().position(|&pair| pair == (first, second))?;

        let n = odd_bishop.index() / 2 + 4 * (even_bishop.index() / 2 + 4 * (queen + 6 * knights));
        Some(n as u16)
    }
}

/// Every Chess960 arrangement for `reference`, in start-position order.
pub fn enumerate(reference: Color) -> impl Iterator<Item = SideArrangement> {
    (0..POSITION_COUNT).filter_map(move |index| SideArrangement::from_index(index, reference).ok())
}
