// https://en.wikipedia.org/wiki/Fischer_random_chess_numbering_scheme

#[cfg(test)]
mod numbering {
    use chess960_core::{
        game::{Color, SideArrangement},
        notation::parse_back_rank,
    };
    use paste::paste;

    macro_rules! start_position_test {
        ($index:expr, $notation:expr, $name:ident) => {
            paste! {
                #[test]
                fn [<$name _white>]() {
                    let side = SideArrangement::from_index($index, Color::White).unwrap();
                    assert_eq!(side.to_notation(), $notation);
                    assert_eq!(side.index(), Some($index));
                    assert_eq!(parse_back_rank($notation, Color::White).unwrap(), side);
                }

                #[test]
                fn [<$name _black>]() {
                    let side = SideArrangement::from_index($index, Color::Black).unwrap();
                    assert_eq!(side.to_notation(), $notation);
                    assert!(side.is_chess960(Color::Black));
                    assert_eq!(parse_back_rank($notation, Color::Black).unwrap(), side);
                }
            }
        };
    }

    start_position_test!(0, "BBQNNRKR", first);
    start_position_test!(1, "BQNBNRKR", second);
    start_position_test!(518, "RNBQKBNR", classical);
    start_position_test!(959, "RKRNNQBB", last);
}
