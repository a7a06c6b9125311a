use std::fmt;

use crate::account::Balance;

/// `count` notes of one denomination, dispensed one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteBundle {
    pub denomination: Balance,
    pub count: u64,
}

/// Banknotes handed out for a withdrawal, plus the amount reported as not
/// dispensable. Bundles follow emission order: 100s, then 50s, then 20s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashBreakdown {
    pub bundles: Vec<NoteBundle>,
    pub leftover: Balance,
}

impl CashBreakdown {
    /// Greedy split into 100s and 50s, then 20s while strictly more than 20
    /// remains.
    pub fn compute(amount: Balance) -> Self {
        let mut bundles = Vec::with_capacity(3);
        let mut remaining = amount;
        if remaining >= 100 {
            let count = remaining / 100;
            remaining -= count * 100;
            bundles.push(NoteBundle {
                denomination: 100,
                count: count as u64,
            });
        }
        if remaining >= 50 {
            remaining -= 50;
            bundles.push(NoteBundle {
                denomination: 50,
                count: 1,
            });
        }
        if remaining > 20 {
            // stops once 20 or less is left
            let count = (remaining - 1) / 20;
            bundles.push(NoteBundle {
                denomination: 20,
                count: count as u64,
            });
        }
        // NOTE: derived from the requested amount, not from what the notes
        // leave over. Kept for compatibility with the reported leftover of
        // existing machines, e.g. 20 dispenses nothing yet reports 0.
        let leftover = amount % 50 % 20;
        Self { bundles, leftover }
    }

    /// Every dispensed note's denomination, in emission order.
    pub fn notes(&self) -> impl Iterator<Item = Balance> + '_ {
        self.bundles.iter().flat_map(|bundle| (0..bundle.count).map(move |_| bundle.denomination))
    }
}

/// One `[<denomination> 1]` tag per note, then the leftover. Written lazily,
/// a formatter backed by a writer never holds the whole line.
impl fmt::Display for CashBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for denomination in self.notes() {
            write!(f, "[{denomination} 1]")?;
        }
        write!(f, "{}", self.leftover)
    }
}
