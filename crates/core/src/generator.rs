use log::{debug, trace};

use crate::{
    error::Result,
    game::{Color, File, FullPosition, SideArrangement},
    ChoiceSource,
};

/// The four files of one parity, a to h.
fn squares_of_parity(parity: u8) -> [File; 4] {
    [0, 2, 4, 6].map(|offset| File::ALL[offset + parity as usize])
}

/// Draws one side's back rank uniformly from the 960 Chess960 arrangements.
///
/// `reference` picks the parity of the dark squares (see
/// [`Color::dark_parity`]): the dark bishop goes on a, c, e or g for white
/// and on b, d, f or h for black. The light bishop takes the other parity.
pub fn generate_side(reference: Color, source: &mut impl ChoiceSource) -> SideArrangement {
    let mut empty = File::ALL.to_vec();

    let dark_bishop = squares_of_parity(reference.dark_parity())[source.pick(4)];
    empty.retain(|&file| file != dark_bishop);
    trace!("{reference}: dark bishop on {dark_bishop}");

    let light_bishop = squares_of_parity(1 - reference.dark_parity())[source.pick(4)];
    empty.retain(|&file| file != light_bishop);
    trace!("{reference}: light bishop on {light_bishop}");

    let queen = empty.remove(source.pick(empty.len()));
    trace!("{reference}: queen on {queen}");

    let (first, second) = source.pick_pair(empty.len());
    assert_ne!(first, second, "knights need two different squares");
    let knights = [empty[first], empty[second]];
    empty.retain(|file| !knights.contains(file));
    trace!("{reference}: knights on {} and {}", knights[0], knights[1]);

    // `empty` is still in file order, so rook, king, rook is the only fit.
    assert_eq!(empty.len(), 3, "three squares must be left for rooks and king");
    let side = SideArrangement::from_parts(
        dark_bishop,
        light_bishop,
        queen,
        knights,
        [empty[0], empty[2]],
        empty[1],
    );

    debug!("generated {reference} back rank {side}");
    side
}

/// Like [`generate_side`], with the reference color given by name.
pub fn generate_side_named(
    reference: &str,
    source: &mut impl ChoiceSource,
) -> Result<SideArrangement> {
    Ok(generate_side(reference.parse()?, source))
}

/// Draws both sides independently, each against its own color.
pub fn generate_position(source: &mut impl ChoiceSource) -> FullPosition {
    let white = generate_side(Color::White, source);
    let black = generate_side(Color::Black, source);
    FullPosition::new(white, black)
}
