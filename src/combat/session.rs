//! The turn-based combat session.
//!
//! Orchestrates rounds between the player (plus party) and a single enemy
//! until a terminal condition. The session is caller-driven: each round the
//! supplied `ActionSource` picks the player's action, so the blocking menu
//! prompt stays outside the core. The loop deliberately continues while the
//! party still stands even if the player is down: surviving allies finish
//! the fight on their own.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::party::Npc;
use crate::character::player::Player;
use crate::character::stats::StatBlock;
use crate::combat::combatant::Combatant;
use crate::combat::enemy::Enemy;
use crate::combat::engine::{self, AttackOutcome};
use crate::content::{ContentError, ContentRegistry};
use crate::items::effects::EquipResolver;

/// What the player chose to do this round.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    Attack,
    /// Drink a potion by catalog index.
    UsePotion(usize),
    /// Cast a learned spell by name.
    CastSpell(String),
    Flee,
}

/// Read-only snapshot handed to the action chooser each round.
pub struct SessionView<'a> {
    pub round: u32,
    pub player: &'a Player,
    pub party: &'a [Npc],
    pub enemy: &'a Enemy,
}

/// Supplies the player's action each round. The menu layer implements this
/// over user input; tests script it.
pub trait ActionSource {
    fn choose_action(&mut self, view: &SessionView<'_>) -> PlayerAction;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Ongoing,
    PlayerActed,
    AlliesActed,
    EnemyActed,
    RoundEnd,
    Victory,
    Defeat,
    Fled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
    Fled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CombatEvent {
    Attack(AttackOutcome),
    SpellCast {
        caster: String,
        spell: String,
        damage: i32,
        mana_drained: i32,
        healed: i32,
        mana_restored: i32,
        debuffs_applied: Vec<String>,
    },
    InsufficientMana {
        spell: String,
    },
    SpellNotLearned {
        spell: String,
    },
    PotionConsumed {
        potion: String,
    },
    BuffExpired {
        buff: String,
    },
    DebuffTick {
        target: String,
        debuff: String,
        damage: i32,
        stacks: i32,
    },
    DebuffExpired {
        target: String,
        debuff: String,
    },
    AllyFell {
        name: String,
    },
    Fled,
}

/// Everything a finished session reports back to the caller. Reward grants
/// and the level-up check on Victory are the caller's next step; fallen ally
/// names go back to the name generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub rounds: u32,
    pub fallen_allies: Vec<String>,
    pub events: Vec<CombatEvent>,
}

/// One applied debuff being tracked for per-round ticking.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActiveDebuff {
    name: String,
    remaining: i32,
    stacks: i32,
    damage_per_turn: i32,
}

/// Tracks the debuff names appended to one combatant during the session and
/// ticks them each round. Names present before the session (an enemy
/// template's innate kit) are display-only and never tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct DebuffBook {
    seen: usize,
    active: Vec<ActiveDebuff>,
}

impl DebuffBook {
    fn starting_at(seen: usize) -> Self {
        Self {
            seen,
            active: Vec::new(),
        }
    }

    /// Converts names appended since the last call into tracked debuffs.
    /// Re-applying an active debuff adds a stack (up to the catalog cap) and
    /// refreshes its duration.
    fn absorb(&mut self, list: &[String], registry: &ContentRegistry) -> Result<(), ContentError> {
        while self.seen < list.len() {
            let name = list[self.seen].clone();
            let def = registry.debuff(&name)?;
            if let Some(active) = self.active.iter_mut().find(|a| a.name == name) {
                if def.stacking.stackable {
                    active.stacks = (active.stacks + 1).min(def.stacking.max_stacks.max(1));
                }
                active.remaining = def.effect.duration_turns;
            } else {
                self.active.push(ActiveDebuff {
                    name,
                    remaining: def.effect.duration_turns,
                    stacks: 1,
                    damage_per_turn: def.effect.health_decrease,
                });
            }
            self.seen += 1;
        }
        Ok(())
    }

    /// Applies one round of damage, decrements durations, and strips expired
    /// names from the combatant's list.
    fn tick(
        &mut self,
        target: &str,
        list: &mut Vec<String>,
        stats: &mut StatBlock,
    ) -> Vec<CombatEvent> {
        let mut events = Vec::new();

        for active in &mut self.active {
            if active.remaining <= 0 {
                continue;
            }
            let damage = active.damage_per_turn * active.stacks;
            if damage > 0 {
                stats.take_damage(damage);
                events.push(CombatEvent::DebuffTick {
                    target: target.to_string(),
                    debuff: active.name.clone(),
                    damage,
                    stacks: active.stacks,
                });
            }
            active.remaining -= 1;
        }

        let expired: Vec<String> = self
            .active
            .iter()
            .filter(|a| a.remaining <= 0)
            .map(|a| a.name.clone())
            .collect();
        for name in &expired {
            let removed = list.iter().filter(|n| *n == name).count();
            list.retain(|n| n != name);
            self.seen -= removed.min(self.seen);
            events.push(CombatEvent::DebuffExpired {
                target: target.to_string(),
                debuff: name.clone(),
            });
        }
        self.active.retain(|a| a.remaining > 0);

        events
    }
}

/// State machine for one combat encounter.
#[derive(Debug)]
pub struct CombatSession {
    state: SessionState,
    round: u32,
    events: Vec<CombatEvent>,
    fallen_allies: Vec<String>,
}

impl CombatSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Ongoing,
            round: 0,
            events: Vec::new(),
            fallen_allies: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs rounds until the encounter ends. Mutates the player, party and
    /// enemy in place and returns what happened. Content lookups only fail
    /// on a broken catalog.
    pub fn run(
        mut self,
        player: &mut Player,
        party: &mut Vec<Npc>,
        enemy: &mut Enemy,
        resolver: &mut EquipResolver,
        registry: &ContentRegistry,
        actions: &mut dyn ActionSource,
        rng: &mut impl Rng,
    ) -> Result<SessionReport, ContentError> {
        let mut enemy_book = DebuffBook::starting_at(enemy.debuffs.len());
        let mut player_book = DebuffBook::starting_at(player.debuffs.len());

        while (player.is_alive() || !party.is_empty()) && enemy.is_alive() {
            self.state = SessionState::Ongoing;
            self.round += 1;
            debug!(round = self.round, "combat round begins");

            let action = actions.choose_action(&SessionView {
                round: self.round,
                player,
                party,
                enemy,
            });

            match action {
                PlayerAction::Attack => {
                    let outcome = engine::attack(&*player, enemy, rng);
                    self.events.push(CombatEvent::Attack(outcome));
                }
                PlayerAction::UsePotion(index) => {
                    let name = registry.potion(index)?.name.clone();
                    resolver.use_potion(player, registry, index)?;
                    self.events.push(CombatEvent::PotionConsumed { potion: name });
                }
                PlayerAction::CastSpell(name) => {
                    self.cast_spell(player, enemy, registry, &name)?;
                }
                PlayerAction::Flee => {
                    self.events.push(CombatEvent::Fled);
                    self.state = SessionState::Fled;
                    debug!(round = self.round, "fled from combat");
                    return Ok(self.into_report(Outcome::Fled));
                }
            }
            self.state = SessionState::PlayerActed;

            // Every living ally swings once, in party order; the fallen are
            // swept out as the line advances.
            let mut index = 0;
            while index < party.len() {
                if party[index].is_alive() {
                    let outcome = engine::attack(&party[index], enemy, rng);
                    self.events.push(CombatEvent::Attack(outcome));
                    index += 1;
                } else {
                    self.remove_ally(party, index);
                }
            }
            self.state = SessionState::AlliesActed;

            // The enemy strikes back only while the player still stands; a
            // downed player is not attacked while allies fight on.
            if enemy.is_alive() && player.is_alive() {
                let outcome = engine::attack(&*enemy, player, rng);
                self.events.push(CombatEvent::Attack(outcome));
            }
            self.state = SessionState::EnemyActed;

            // Round end: the single timed buff ticks exactly once, then
            // applied debuffs deal their periodic damage.
            if let Some(buff) = resolver.tick_buffs(player) {
                self.events.push(CombatEvent::BuffExpired { buff });
            }

            enemy_book.absorb(&enemy.debuffs, registry)?;
            self.events
                .extend(enemy_book.tick(&enemy.name.clone(), &mut enemy.debuffs, &mut enemy.stats));

            player_book.absorb(&player.debuffs, registry)?;
            let player_name = player.name.clone();
            self.events
                .extend(player_book.tick(&player_name, &mut player.debuffs, &mut player.stats));

            // Sweep allies felled by the enemy's counterattack this round.
            let mut index = 0;
            while index < party.len() {
                if party[index].is_alive() {
                    index += 1;
                } else {
                    self.remove_ally(party, index);
                }
            }
            self.state = SessionState::RoundEnd;
        }

        let outcome = if !enemy.is_alive() {
            self.state = SessionState::Victory;
            Outcome::Victory
        } else {
            self.state = SessionState::Defeat;
            Outcome::Defeat
        };
        debug!(round = self.round, ?outcome, "combat ended");
        Ok(self.into_report(outcome))
    }

    fn remove_ally(&mut self, party: &mut Vec<Npc>, index: usize) {
        let fallen = party.remove(index);
        debug!(ally = %fallen.name, "ally fell");
        self.events.push(CombatEvent::AllyFell {
            name: fallen.name.clone(),
        });
        self.fallen_allies.push(fallen.name);
    }

    /// Spells skip the dodge/crit pipeline entirely: the configured
    /// magnitudes apply flat, and any listed debuffs land guaranteed.
    fn cast_spell(
        &mut self,
        player: &mut Player,
        enemy: &mut Enemy,
        registry: &ContentRegistry,
        name: &str,
    ) -> Result<(), ContentError> {
        if !player.learned_spells.iter().any(|s| s == name) {
            self.events.push(CombatEvent::SpellNotLearned {
                spell: name.to_string(),
            });
            return Ok(());
        }
        let spell = registry.spell(name)?.clone();
        if player.stats.mana < spell.mana_cost {
            self.events.push(CombatEvent::InsufficientMana {
                spell: spell.name.clone(),
            });
            return Ok(());
        }
        player.stats.mana -= spell.mana_cost;

        let mut damage = 0;
        let mut mana_drained = 0;
        let mut healed = 0;
        let mut mana_restored = 0;
        let mut debuffs_applied = Vec::new();

        if spell.health_damage > 0 {
            enemy.stats.take_damage(spell.health_damage);
            damage = spell.health_damage;
        }
        if spell.mana_damage > 0 {
            mana_drained = spell.mana_damage.min(enemy.stats.mana);
            enemy.stats.mana = (enemy.stats.mana - spell.mana_damage).max(0);
        }
        if spell.health_restore > 0 {
            healed = player.stats.heal(spell.health_restore);
        }
        if spell.mana_restore > 0 {
            mana_restored = player.stats.restore_mana(spell.mana_restore);
        }
        if spell.armor_increase > 0.0 {
            player.stats.armor += spell.armor_increase;
        }
        if spell.magic_armor_increase > 0.0 {
            player.stats.magic_armor += spell.magic_armor_increase;
        }
        for debuff in &spell.debuffs {
            enemy.apply_debuff(debuff);
            debuffs_applied.push(debuff.clone());
        }

        self.events.push(CombatEvent::SpellCast {
            caster: player.name.clone(),
            spell: spell.name.clone(),
            damage,
            mana_drained,
            healed,
            mana_restored,
            debuffs_applied,
        });
        Ok(())
    }

    fn into_report(self, outcome: Outcome) -> SessionReport {
        SessionReport {
            outcome,
            rounds: self.round,
            fallen_allies: self.fallen_allies,
            events: self.events,
        }
    }
}

impl Default for CombatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::stats::StatBlock;
    use crate::economy::Economy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1234)
    }

    fn fixture() -> (Player, ContentRegistry, EquipResolver) {
        let registry = ContentRegistry::embedded();
        let player = Player::new("Hero", "Human", "Warrior", &registry).unwrap();
        (player, registry, EquipResolver::new())
    }

    fn frail_enemy(hp: i32, attack: i32) -> Enemy {
        Enemy::from_parts(
            "Training Dummy",
            StatBlock {
                hitpoints: hp,
                max_hitpoints: hp,
                attack,
                crit_damage: 1.5,
                magic_amplifier_rate: 1.0,
                level: 1,
                experience: 10.0,
                ..StatBlock::default()
            },
            Economy::default(),
            Vec::new(),
        )
    }

    struct AlwaysAttack;

    impl ActionSource for AlwaysAttack {
        fn choose_action(&mut self, _view: &SessionView<'_>) -> PlayerAction {
            PlayerAction::Attack
        }
    }

    /// Plays the scripted actions in order, then the fallback forever.
    struct Scripted {
        actions: Vec<PlayerAction>,
        next: usize,
        fallback: PlayerAction,
    }

    impl Scripted {
        fn then_flee(actions: &[PlayerAction]) -> Self {
            Self {
                actions: actions.to_vec(),
                next: 0,
                fallback: PlayerAction::Flee,
            }
        }
    }

    impl ActionSource for Scripted {
        fn choose_action(&mut self, _view: &SessionView<'_>) -> PlayerAction {
            let action = self
                .actions
                .get(self.next)
                .cloned()
                .unwrap_or_else(|| self.fallback.clone());
            self.next += 1;
            action
        }
    }

    #[test]
    fn test_lethal_attack_wins_in_one_round() {
        let (mut player, registry, mut resolver) = fixture();
        player.stats.attack = 20;
        player.stats.magic_attack = 0;
        player.stats.crit_rate = 0.0;
        let mut enemy = frail_enemy(15, 0);
        let mut party = Vec::new();
        let mut rng = test_rng();

        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut AlwaysAttack,
                &mut rng,
            )
            .unwrap();

        assert_eq!(report.outcome, Outcome::Victory);
        assert_eq!(report.rounds, 1);
        assert!(enemy.stats.hitpoints <= 0);
        // 20 attack vs no armor: 17..=23 damage after the noise band
        let CombatEvent::Attack(outcome) = &report.events[0] else {
            panic!("expected an attack event");
        };
        assert!((17..=23).contains(&outcome.total_damage));
    }

    #[test]
    fn test_flee_ends_immediately_without_enemy_turn() {
        let (mut player, registry, mut resolver) = fixture();
        let hp_before = player.stats.hitpoints;
        let mut enemy = frail_enemy(1000, 50);
        let mut party = Vec::new();
        let mut rng = test_rng();

        let mut choose = Scripted::then_flee(&[]);
        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut choose,
                &mut rng,
            )
            .unwrap();

        assert_eq!(report.outcome, Outcome::Fled);
        assert_eq!(player.stats.hitpoints, hp_before, "flee skips the enemy turn");
    }

    #[test]
    fn test_defeat_when_player_falls_with_empty_party() {
        let (mut player, registry, mut resolver) = fixture();
        player.stats.hitpoints = 1;
        player.stats.attack = 0;
        player.stats.magic_attack = 0;
        player.stats.dodge_rate = 0.0;
        let mut enemy = frail_enemy(1000, 500);
        let mut party = Vec::new();
        let mut rng = test_rng();

        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut AlwaysAttack,
                &mut rng,
            )
            .unwrap();

        assert_eq!(report.outcome, Outcome::Defeat);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_spell_cast_consumes_mana_and_lands_flat() {
        let (mut player, registry, mut resolver) = fixture();
        player.learn_spell("Fireball");
        player.stats.mana = 30;
        player.stats.max_mana = 30;
        player.stats.attack = 0;
        player.stats.magic_attack = 0;
        let mut enemy = frail_enemy(38, 0);
        let mut party = Vec::new();
        let mut rng = test_rng();

        let mut choose = Scripted::then_flee(&[PlayerAction::CastSpell("Fireball".to_string())]);
        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut choose,
                &mut rng,
            )
            .unwrap();

        assert_eq!(report.outcome, Outcome::Victory);
        assert_eq!(player.stats.mana, 10); // 30 - 20 cost
        assert!(enemy.debuffs.contains(&"Burning".to_string()));
        let CombatEvent::SpellCast { damage, .. } = &report.events[0] else {
            panic!("expected a spell cast event");
        };
        assert_eq!(*damage, 38); // flat, no noise band
    }

    #[test]
    fn test_insufficient_mana_wastes_the_turn() {
        let (mut player, registry, mut resolver) = fixture();
        player.learn_spell("Comet Azur");
        player.stats.mana = 5;
        let mut enemy = frail_enemy(100, 0);
        let hp_before = enemy.stats.hitpoints;
        let mut party = Vec::new();
        let mut rng = test_rng();

        let mut choose =
            Scripted::then_flee(&[PlayerAction::CastSpell("Comet Azur".to_string())]);
        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut choose,
                &mut rng,
            )
            .unwrap();

        assert!(matches!(
            report.events[0],
            CombatEvent::InsufficientMana { .. }
        ));
        assert_eq!(enemy.stats.hitpoints, hp_before);
        assert_eq!(player.stats.mana, 5, "no mana spent on a fizzled cast");
    }

    #[test]
    fn test_unlearned_spell_is_rejected() {
        let (mut player, registry, mut resolver) = fixture();
        let mut enemy = frail_enemy(50, 0);
        let mut party = Vec::new();
        let mut rng = test_rng();

        let mut choose = Scripted::then_flee(&[PlayerAction::CastSpell("Fireball".to_string())]);
        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut choose,
                &mut rng,
            )
            .unwrap();

        assert!(matches!(
            report.events[0],
            CombatEvent::SpellNotLearned { .. }
        ));
    }

    #[test]
    fn test_buff_ticks_once_per_round() {
        let (mut player, registry, mut resolver) = fixture();
        player.stats.attack = 0;
        player.stats.magic_attack = 0;
        let (strength, _) = registry.potion_by_name("Strength Potion").unwrap();
        let mut enemy = frail_enemy(10_000, 0);
        let mut party = Vec::new();
        let mut rng = test_rng();

        let mut choose = Scripted::then_flee(&[
            PlayerAction::UsePotion(strength),
            PlayerAction::Attack,
            PlayerAction::Attack,
        ]);
        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut choose,
                &mut rng,
            )
            .unwrap();

        // Duration 3 buff consumed on round 1 ticks at rounds 1, 2, 3 and
        // expires at the end of round 3.
        let expirations = report
            .events
            .iter()
            .filter(|e| matches!(e, CombatEvent::BuffExpired { .. }))
            .count();
        assert_eq!(expirations, 1);
        assert!(resolver.active_buff().is_none());
    }

    #[test]
    fn test_debuff_ticks_and_expires_on_enemy() {
        let (mut player, registry, mut resolver) = fixture();
        player.learn_spell("Flame Sling");
        player.stats.mana = 100;
        player.stats.max_mana = 100;
        player.stats.attack = 0;
        player.stats.magic_attack = 0;
        let mut enemy = frail_enemy(10_000, 0);
        let mut party = Vec::new();
        let mut rng = test_rng();

        let mut choose = Scripted::then_flee(&[
            PlayerAction::CastSpell("Flame Sling".to_string()),
            PlayerAction::Attack,
            PlayerAction::Attack,
            PlayerAction::Attack,
        ]);
        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut choose,
                &mut rng,
            )
            .unwrap();

        // Burning: 10 damage per turn for 3 turns, then the name comes off.
        let ticks: Vec<i32> = report
            .events
            .iter()
            .filter_map(|e| match e {
                CombatEvent::DebuffTick { damage, .. } => Some(*damage),
                _ => None,
            })
            .collect();
        assert_eq!(ticks, vec![10, 10, 10]);
        assert!(report
            .events
            .iter()
            .any(|e| matches!(e, CombatEvent::DebuffExpired { .. })));
        assert!(!enemy.debuffs.contains(&"Burning".to_string()));
        assert_eq!(enemy.stats.hitpoints, 10_000 - 20 - 30); // spell + ticks
    }

    #[test]
    fn test_innate_enemy_debuff_names_never_tick() {
        let (mut player, registry, mut resolver) = fixture();
        player.stats.attack = 0;
        player.stats.magic_attack = 0;
        let mut enemy = frail_enemy(500, 0);
        enemy.debuffs.push("Poison".to_string()); // innate kit, not applied
        let mut party = Vec::new();
        let mut rng = test_rng();

        let mut choose = Scripted::then_flee(&[PlayerAction::Attack, PlayerAction::Attack]);
        let report = CombatSession::new()
            .run(
                &mut player,
                &mut party,
                &mut enemy,
                &mut resolver,
                &registry,
                &mut choose,
                &mut rng,
            )
            .unwrap();

        assert!(!report
            .events
            .iter()
            .any(|e| matches!(e, CombatEvent::DebuffTick { .. })));
        assert!(enemy.debuffs.contains(&"Poison".to_string()));
    }
}
