//! Random input, for soak-testing the controller.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::category::InputCategory;
use super::event::InputEvent;
use super::source::InputSource;

/// Draws uniformly from every event except `Stop`.
///
/// Once `limit` events have been produced the source yields `Stop`, so a
/// run over a limited source always terminates. An unlimited source never
/// shuts the machine down by itself.
#[derive(Debug, Clone)]
pub struct RandomInput {
    rng: StdRng,
    choices: Vec<InputEvent>,
    limit: Option<usize>,
    produced: usize,
}

impl RandomInput {
    /// Deterministic source; the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            choices: InputEvent::ALL
                .into_iter()
                .filter(|event| event.category() != InputCategory::ShutDown)
                .collect(),
            limit: None,
            produced: 0,
        }
    }

    /// Yield `Stop` after `limit` random events.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl InputSource for RandomInput {
    fn next_event(&mut self) -> InputEvent {
        if self.limit.is_some_and(|limit| self.produced >= limit) {
            return InputEvent::Stop;
        }
        self.produced += 1;
        self.choices
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(InputEvent::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomInput::seeded(7);
        let mut b = RandomInput::seeded(7);

        let left: Vec<_> = (0..32).map(|_| a.next_event()).collect();
        let right: Vec<_> = (0..32).map(|_| b.next_event()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn never_yields_stop_before_limit() {
        let mut source = RandomInput::seeded(42);
        for _ in 0..500 {
            assert_ne!(source.next_event(), InputEvent::Stop);
        }
    }

    #[test]
    fn limit_forces_stop() {
        let mut source = RandomInput::seeded(1).with_limit(3);
        for _ in 0..3 {
            assert_ne!(source.next_event(), InputEvent::Stop);
        }
        assert_eq!(source.next_event(), InputEvent::Stop);
        assert_eq!(source.next_event(), InputEvent::Stop);
        assert_eq!(source.produced(), 3);
    }
}
