//! The in-game calendar: four periods to a day, seven days to a week.

use serde::{Deserialize, Serialize};

use crate::character::party::Npc;
use crate::character::player::Player;
use crate::core::constants::{
    DAYS_PER_WEEK, FATIGUE_PENALTY_RATE, MONTHS_PER_YEAR, WEEKS_PER_MONTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimePeriod {
    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
            TimePeriod::Night => "Night",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSystem {
    current_turn: i32,
    current_period: TimePeriod,
    total_days: i32,
    total_weeks: i32,
}

impl TimeSystem {
    pub fn new() -> Self {
        Self {
            current_turn: 0,
            current_period: TimePeriod::Morning,
            total_days: 0,
            total_weeks: 0,
        }
    }

    pub fn current_period(&self) -> TimePeriod {
        self.current_period
    }

    pub fn current_turn(&self) -> i32 {
        self.current_turn
    }

    pub fn total_days(&self) -> i32 {
        self.total_days
    }

    pub fn total_weeks(&self) -> i32 {
        self.total_weeks
    }

    /// Advances one period. Rolling past Night starts a new day; a player
    /// who never slept takes a fatigue penalty of 5% max hitpoints, floored
    /// at 1 hp, and the slept flag resets for the new day.
    pub fn advance_time(&mut self, player: &mut Player) {
        self.current_turn += 1;
        self.current_period = match self.current_period {
            TimePeriod::Morning => TimePeriod::Afternoon,
            TimePeriod::Afternoon => TimePeriod::Evening,
            TimePeriod::Evening => TimePeriod::Night,
            TimePeriod::Night => {
                self.total_days += 1;
                self.total_weeks = self.total_days / DAYS_PER_WEEK;

                if !player.slept_today {
                    let penalty =
                        (player.stats.max_hitpoints as f32 * FATIGUE_PENALTY_RATE).round() as i32;
                    player.stats.hitpoints -= penalty;
                    if player.stats.hitpoints < 1 {
                        player.stats.hitpoints = 1;
                    }
                }
                player.slept_today = false;
                TimePeriod::Morning
            }
        };
    }

    /// Human-readable elapsed time, e.g. "1 months 2 weeks 3 days".
    pub fn formatted_time_passed(&self) -> String {
        let days_passed = self.total_days;
        if days_passed == 0 {
            return "0 days".to_string();
        }

        let days_per_month = WEEKS_PER_MONTH * DAYS_PER_WEEK;
        let days_per_year = MONTHS_PER_YEAR * days_per_month;

        let years = days_passed / days_per_year;
        let mut remaining = days_passed % days_per_year;
        let months = remaining / days_per_month;
        remaining %= days_per_month;
        let weeks = remaining / DAYS_PER_WEEK;
        let days = remaining % DAYS_PER_WEEK;

        let mut result = String::new();
        if years > 0 {
            result.push_str(&format!("{} years ", years));
        }
        if months > 0 {
            result.push_str(&format!("{} months ", months));
        }
        if weeks > 0 {
            result.push_str(&format!("{} weeks ", weeks));
        }
        if days > 0 {
            result.push_str(&format!("{} days ", days));
        }
        result.trim_end().to_string()
    }
}

impl Default for TimeSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Pays the party's weekly wages in one atomic withdrawal. Returns the gold
/// total on success; `None` means the purse could not cover it and nothing
/// was paid.
pub fn deduct_weekly_wages(player: &mut Player, party: &[Npc]) -> Option<i64> {
    let total: i64 = party.iter().map(|npc| npc.wage_per_week).sum();
    if player.economy.subtract(0, total, 0, 0) {
        Some(total)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;
    use crate::economy::Economy;

    fn player() -> Player {
        let registry = ContentRegistry::embedded();
        Player::new("Hero", "Human", "Warrior", &registry).unwrap()
    }

    #[test]
    fn test_periods_cycle_into_days() {
        let mut time = TimeSystem::new();
        let mut hero = player();
        hero.slept_today = true;

        assert_eq!(time.current_period(), TimePeriod::Morning);
        time.advance_time(&mut hero);
        assert_eq!(time.current_period(), TimePeriod::Afternoon);
        time.advance_time(&mut hero);
        time.advance_time(&mut hero);
        assert_eq!(time.current_period(), TimePeriod::Night);
        time.advance_time(&mut hero);
        assert_eq!(time.current_period(), TimePeriod::Morning);
        assert_eq!(time.total_days(), 1);
        assert_eq!(time.current_turn(), 4);
    }

    #[test]
    fn test_sleepless_night_costs_hitpoints() {
        let mut time = TimeSystem::new();
        let mut hero = player();
        hero.slept_today = false;
        let hp_before = hero.stats.hitpoints;

        for _ in 0..4 {
            time.advance_time(&mut hero);
        }

        let penalty = (hero.stats.max_hitpoints as f32 * 0.05).round() as i32;
        assert_eq!(hero.stats.hitpoints, hp_before - penalty);
    }

    #[test]
    fn test_fatigue_never_kills() {
        let mut time = TimeSystem::new();
        let mut hero = player();
        hero.stats.hitpoints = 2;
        hero.slept_today = false;

        for _ in 0..4 {
            time.advance_time(&mut hero);
        }
        assert_eq!(hero.stats.hitpoints, 1);
    }

    #[test]
    fn test_sleeping_resets_each_day() {
        let mut time = TimeSystem::new();
        let mut hero = player();
        hero.slept_today = true;
        let hp_before = hero.stats.hitpoints;

        for _ in 0..4 {
            time.advance_time(&mut hero);
        }
        assert_eq!(hero.stats.hitpoints, hp_before);
        assert!(!hero.slept_today, "slept flag resets at day rollover");
    }

    #[test]
    fn test_formatted_time_passed() {
        let mut time = TimeSystem::new();
        assert_eq!(time.formatted_time_passed(), "0 days");

        let mut hero = player();
        hero.slept_today = true;
        // 10 days = 1 week 3 days
        for _ in 0..40 {
            hero.slept_today = true;
            time.advance_time(&mut hero);
        }
        assert_eq!(time.formatted_time_passed(), "1 weeks 3 days");
        assert_eq!(time.total_weeks(), 1);
    }

    #[test]
    fn test_weekly_wages_atomic() {
        let registry = ContentRegistry::embedded();
        let mut names = crate::character::party::NameLedger::new();
        let mut rng = {
            use rand::SeedableRng;
            rand_chacha::ChaCha8Rng::seed_from_u64(5)
        };
        let mut hero = player();
        let party = vec![
            crate::character::party::generate_npc(1, &registry, &mut names, &mut rng).unwrap(),
            crate::character::party::generate_npc(1, &registry, &mut names, &mut rng).unwrap(),
        ];
        let total: i64 = party.iter().map(|n| n.wage_per_week).sum();

        // Broke: nothing happens
        assert_eq!(deduct_weekly_wages(&mut hero, &party), None);
        assert_eq!(hero.economy, Economy::default());

        // Funded: one withdrawal
        hero.economy.add(0, total, 0, 0);
        assert_eq!(deduct_weekly_wages(&mut hero, &party), Some(total));
        assert_eq!(hero.economy.total_copper(), 0);
    }
}
