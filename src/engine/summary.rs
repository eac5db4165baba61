use crate::consts::{GREAT_MESSAGE, GREAT_SCORE, PERFECT_MESSAGE, RETRY_MESSAGE};

/// Result tier picked from fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Every question right.
    Perfect,
    /// At least [`GREAT_SCORE`] right, but not all.
    Great,
    Retry,
}

impl Tier {
    /// The thresholds do not scale with `total`: a perfect score needs every
    /// answer right, and the middle tier always starts at [`GREAT_SCORE`].
    /// A 0/0 game has nothing to be perfect at and lands in `Retry`.
    pub fn for_score(score: usize, total: usize) -> Self {
        if total > 0 && score == total {
            Tier::Perfect
        } else if score >= GREAT_SCORE {
            Tier::Great
        } else {
            Tier::Retry
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Perfect => PERFECT_MESSAGE,
            Tier::Great => GREAT_MESSAGE,
            Tier::Retry => RETRY_MESSAGE,
        }
    }
}

/// Final tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub tier: Tier,
}

impl Summary {
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            tier: Tier::for_score(score, total),
        }
    }

    pub fn headline(&self) -> String {
        format!("You scored {} out of {}!", self.score, self.total)
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}
