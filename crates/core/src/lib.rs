use std::collections::VecDeque;

pub mod error;
pub mod game;
pub mod generator;
pub mod notation;
pub mod numbering;
pub mod renderer;

pub use error::{Result, SetupError};

/// Where the generator gets its randomness from.
///
/// Implementations must draw uniformly. The generator trusts every index it
/// gets back to be in range.
pub trait ChoiceSource {
    /// Returns an index in `0..bound`.
    fn pick(&mut self, bound: usize) -> usize;

    /// Returns two distinct indices in `0..bound`, in no particular order.
    fn pick_pair(&mut self, bound: usize) -> (usize, usize);
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for &mut S {
    fn pick(&mut self, bound: usize) -> usize {
        (**self).pick(bound)
    }

    fn pick_pair(&mut self, bound: usize) -> (usize, usize) {
        (**self).pick_pair(bound)
    }
}

/// Replays a fixed list of choices. Used to reproduce a generation exactly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    pairs: VecDeque<(usize, usize)>,
}

impl ScriptedSource {
    pub fn new(
        picks: impl IntoIterator<Item = usize>,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.picks.is_empty() && self.pairs.is_empty()
    }
}

impl ChoiceSource for ScriptedSource {
    fn pick(&mut self, bound: usize) -> usize {
        let Some(index) = self.picks.pop_front() else {
            panic!("scripted source ran out of picks (bound {bound})");
        };
        assert!(index < bound, "scripted pick {index} is not below {bound}");
        index
    }

    fn pick_pair(&mut self, bound: usize) -> (usize, usize) {
        let Some((first, second)) = self.pairs.pop_front() else {
            panic!("scripted source ran out of pairs (bound {bound})");
        };
        assert!(
            first < bound && second < bound && first != second,
            "scripted pair ({first}, {second}) is not a distinct pair below {bound}"
        );
        (first, second)
    }
}
