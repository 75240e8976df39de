//! Four-denomination currency with base-100 carries.

use serde::{Deserialize, Serialize};

use crate::core::constants::CURRENCY_BASE;

/// A purse of platinum/gold/silver/copper. After any `add` the lower three
/// counters stay below 100; only platinum carries overflow. Subtraction is
/// atomic: it either covers the full amount or mutates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Economy {
    pub platinum: i64,
    pub gold: i64,
    pub silver: i64,
    pub copper: i64,
}

impl Economy {
    pub fn new(platinum: i64, gold: i64, silver: i64, copper: i64) -> Self {
        Self {
            platinum,
            gold,
            silver,
            copper,
        }
    }

    /// Adds to each counter, then normalizes carries upward. Always succeeds.
    pub fn add(&mut self, platinum: i64, gold: i64, silver: i64, copper: i64) {
        self.platinum += platinum;
        self.gold += gold;
        self.silver += silver;
        self.copper += copper;
        self.normalize();
    }

    /// Attempts to subtract the given amount. Returns `false` and leaves the
    /// purse untouched when the total cannot cover it; partial payment never
    /// occurs.
    pub fn subtract(&mut self, platinum: i64, gold: i64, silver: i64, copper: i64) -> bool {
        let mut total = self.total_copper();
        let needed = Self::new(platinum, gold, silver, copper).total_copper();
        if total < needed {
            return false;
        }
        total -= needed;

        let per_gold = CURRENCY_BASE * CURRENCY_BASE;
        let per_platinum = per_gold * CURRENCY_BASE;
        self.platinum = total / per_platinum;
        total %= per_platinum;
        self.gold = total / per_gold;
        total %= per_gold;
        self.silver = total / CURRENCY_BASE;
        self.copper = total % CURRENCY_BASE;
        true
    }

    /// The purse value expressed in the smallest unit.
    pub fn total_copper(&self) -> i64 {
        ((self.platinum * CURRENCY_BASE + self.gold) * CURRENCY_BASE + self.silver) * CURRENCY_BASE
            + self.copper
    }

    fn normalize(&mut self) {
        while self.copper >= CURRENCY_BASE {
            self.copper -= CURRENCY_BASE;
            self.silver += 1;
        }
        while self.silver >= CURRENCY_BASE {
            self.silver -= CURRENCY_BASE;
            self.gold += 1;
        }
        while self.gold >= CURRENCY_BASE {
            self.gold -= CURRENCY_BASE;
            self.platinum += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_carries() {
        let mut purse = Economy::default();
        purse.add(0, 0, 0, 250);
        assert_eq!(purse, Economy::new(0, 0, 2, 50));

        purse.add(0, 0, 98, 0);
        assert_eq!(purse, Economy::new(0, 1, 0, 50));
    }

    #[test]
    fn test_add_carries_cascade_to_platinum() {
        let mut purse = Economy::new(0, 99, 99, 99);
        purse.add(0, 0, 0, 1);
        assert_eq!(purse, Economy::new(1, 0, 0, 0));
    }

    #[test]
    fn test_subtract_insufficient_is_untouched() {
        let mut purse = Economy::new(0, 0, 0, 50);
        let before = purse;
        assert!(!purse.subtract(0, 0, 0, 100));
        assert_eq!(purse, before);
    }

    #[test]
    fn test_subtract_borrows_across_denominations() {
        let mut purse = Economy::new(0, 1, 0, 0);
        assert!(purse.subtract(0, 0, 0, 1));
        assert_eq!(purse, Economy::new(0, 0, 99, 99));
    }

    #[test]
    fn test_subtract_conserves_total_value() {
        let mut purse = Economy::new(2, 30, 45, 60);
        let before = purse.total_copper();
        assert!(purse.subtract(0, 99, 99, 99));
        let cost = Economy::new(0, 99, 99, 99).total_copper();
        assert_eq!(purse.total_copper(), before - cost);
    }

    #[test]
    fn test_add_then_subtract_round_trips() {
        let cases = [(0, 0, 0, 0), (0, 0, 0, 99), (0, 7, 150, 230), (3, 0, 0, 1)];
        for (p, g, s, c) in cases {
            let mut purse = Economy::new(1, 2, 3, 4);
            let before = purse;
            purse.add(p, g, s, c);
            assert!(purse.subtract(p, g, s, c));
            assert_eq!(purse, before, "round trip drifted for ({p},{g},{s},{c})");
        }
    }

    #[test]
    fn test_total_copper() {
        assert_eq!(Economy::new(0, 0, 0, 1).total_copper(), 1);
        assert_eq!(Economy::new(0, 0, 1, 0).total_copper(), 100);
        assert_eq!(Economy::new(0, 1, 0, 0).total_copper(), 10_000);
        assert_eq!(Economy::new(1, 0, 0, 0).total_copper(), 1_000_000);
    }
}
