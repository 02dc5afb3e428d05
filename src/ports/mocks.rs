//! Mock implementations for testing

use crate::ports::random::RandomPort;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Randomness source that replays scripted outcomes.
///
/// `pick_index` pops from the scripted pick queue (falling back to 0 when
/// exhausted, reduced modulo `len`); `chance` pops from the scripted
/// outcome queue (falling back to false).
pub struct ScriptedRandom {
    picks: Mutex<VecDeque<usize>>,
    outcomes: Mutex<VecDeque<bool>>,
}

impl ScriptedRandom {
    pub fn new(picks: &[usize], outcomes: &[bool]) -> Self {
        Self {
            picks: Mutex::new(picks.iter().copied().collect()),
            outcomes: Mutex::new(outcomes.iter().copied().collect()),
        }
    }
}

impl RandomPort for ScriptedRandom {
    fn pick_index(&self, len: usize) -> usize {
        let pick = self.picks.lock().unwrap().pop_front().unwrap_or(0);
        pick % len.max(1)
    }

    fn chance(&self, _p: f64) -> bool {
        self.outcomes.lock().unwrap().pop_front().unwrap_or(false)
    }
}
