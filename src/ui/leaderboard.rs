//! Decorative score list shown beside the form

use rand::Rng;

const ENTRIES: usize = 10;
const MAX_SCORE: u32 = 1000;

/// Pseudo-random scores generated once; no relation to evaluations
#[derive(Debug, Clone)]
pub struct Leaderboard {
    scores: Vec<u32>,
}

impl Leaderboard {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            scores: (0..ENTRIES).map(|_| rng.gen_range(0..MAX_SCORE)).collect(),
        }
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }
}
