#[cfg(test)]
mod random {
    use std::collections::HashMap;

    use chess960_core::{
        game::Color,
        generator::{generate_position, generate_side},
        numbering::POSITION_COUNT,
        ChoiceSource, ScriptedSource,
    };
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use random_setup::RandomSource;

    const SAMPLES: usize = 96_000;

    fn counts(reference: Color, samples: usize, seed: u64) -> HashMap<u16, usize> {
        let mut source = RandomSource::seeded(seed);
        let mut counts = HashMap::new();
        for _ in 0..samples {
            let side = generate_side(reference, &mut source);
            assert!(side.is_chess960(reference));
            let index = side.index().unwrap();
            *counts.entry(index).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn every_arrangement_is_reached_evenly() {
        for (reference, seed) in [(Color::White, 1), (Color::Black, 2)] {
            let counts = counts(reference, SAMPLES, seed);
            assert_eq!(counts.len(), POSITION_COUNT as usize);

            // 100 expected per arrangement, standard deviation about 10.
            let expected = SAMPLES / POSITION_COUNT as usize;
            for (&index, &count) in &counts {
                assert!(
                    (expected / 2..=expected * 2).contains(&count),
                    "{reference} arrangement #{index} drawn {count} times"
                );
            }
        }
    }

    /// Replays white's choices from a script, then hands over to `rng`.
    struct FixedWhite {
        white: ScriptedSource,
        rng: RandomSource<StdRng>,
    }

    impl ChoiceSource for FixedWhite {
        fn pick(&mut self, bound: usize) -> usize {
            if self.white.is_exhausted() {
                self.rng.pick(bound)
            } else {
                self.white.pick(bound)
            }
        }

        fn pick_pair(&mut self, bound: usize) -> (usize, usize) {
            if self.white.is_exhausted() {
                self.rng.pick_pair(bound)
            } else {
                self.white.pick_pair(bound)
            }
        }
    }

    #[test]
    fn fixed_white_leaves_black_free() {
        let mut black_seen = HashMap::new();
        let mut rng = RandomSource::seeded(3);

        for _ in 0..20_000 {
            let mut source = FixedWhite {
                white: ScriptedSource::new([2, 1, 0], [(1, 3)]),
                rng,
            };
            let position = generate_position(&mut source);
            assert_eq!(position.white.to_notation(), "QRNBBKNR");
            *black_seen.entry(position.black.index().unwrap()).or_insert(0) += 1;
            rng = source.rng;
        }

        assert_eq!(black_seen.len(), POSITION_COUNT as usize);
    }

    proptest! {
        #[test]
        fn seeded_positions_are_legal(seed in any::<u64>()) {
            let position = generate_position(&mut RandomSource::seeded(seed));
            prop_assert!(position.white.is_chess960(Color::White));
            prop_assert!(position.black.is_chess960(Color::Black));
        }

        #[test]
        fn seeds_reproduce(seed in any::<u64>()) {
            let a = generate_position(&mut RandomSource::seeded(seed));
            let b = generate_position(&mut RandomSource::seeded(seed));
            prop_assert_eq!(a, b);
        }
    }
}
