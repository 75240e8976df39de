//! Integration test: combat session flow
//!
//! Drives full combat sessions through the public API with scripted actions
//! and seeded randomness: terminal outcomes, the round structure, buffs and
//! debuffs over real content, and the deliberate party-fights-on behavior.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wayfarer::character::party::Npc;
use wayfarer::character::stats::StatBlock;
use wayfarer::combat::session::{
    ActionSource, CombatEvent, PlayerAction, SessionView,
};
use wayfarer::combat::{grant_rewards, random_enemy, CombatSession, Enemy, Outcome};
use wayfarer::content::{ContentRegistry, LocationType};
use wayfarer::economy::Economy;
use wayfarer::items::EquipResolver;
use wayfarer::{Player, Progression};

fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn new_player(registry: &ContentRegistry) -> Player {
    Player::new("Tamsin", "Human", "Warrior", registry).unwrap()
}

fn dummy_enemy(hp: i32, attack: i32) -> Enemy {
    Enemy::from_parts(
        "Dummy",
        StatBlock {
            hitpoints: hp,
            max_hitpoints: hp,
            attack,
            crit_damage: 1.5,
            magic_amplifier_rate: 1.0,
            level: 1,
            experience: 25.0,
            ..StatBlock::default()
        },
        Economy::new(0, 0, 10, 0),
        Vec::new(),
    )
}

fn ally(name: &str, hp: i32, attack: i32) -> Npc {
    Npc {
        name: name.to_string(),
        stats: StatBlock {
            hitpoints: hp,
            max_hitpoints: hp,
            attack,
            crit_damage: 1.5,
            magic_amplifier_rate: 1.0,
            level: 1,
            ..StatBlock::default()
        },
        race: "Human".to_string(),
        class: "Warrior".to_string(),
        level: 1,
        equipped_weapon: None,
        equipped_armor: None,
        debuffs: Vec::new(),
        spells: Vec::new(),
        wage_per_week: 12,
    }
}

struct AlwaysAttack;

impl ActionSource for AlwaysAttack {
    fn choose_action(&mut self, _view: &SessionView<'_>) -> PlayerAction {
        PlayerAction::Attack
    }
}

/// Plays the scripted actions in order, then flees forever.
struct Scripted {
    actions: Vec<PlayerAction>,
    next: usize,
}

impl Scripted {
    fn then_flee(actions: &[PlayerAction]) -> Self {
        Self {
            actions: actions.to_vec(),
            next: 0,
        }
    }
}

impl ActionSource for Scripted {
    fn choose_action(&mut self, _view: &SessionView<'_>) -> PlayerAction {
        let action = self
            .actions
            .get(self.next)
            .cloned()
            .unwrap_or(PlayerAction::Flee);
        self.next += 1;
        action
    }
}

// =============================================================================
// Terminal outcomes
// =============================================================================

#[test]
fn test_victory_then_rewards_and_level_check() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    player.stats.attack = 1000; // one swing settles it
    player.stats.crit_rate = 0.0;
    let mut progression = Progression::new();
    let mut resolver = EquipResolver::new();
    let mut party = Vec::new();
    let mut rng = test_rng(11);

    let mut enemy = random_enemy(&registry, 1, LocationType::Terrain, &mut rng).unwrap();

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
    assert!(!enemy.is_alive());

    // Victory payout is the caller's step, exactly as the menu layer does it.
    let purse_before = player.economy.total_copper();
    grant_rewards(&mut player, &mut progression, &enemy);
    assert!(player.economy.total_copper() > purse_before);
    assert!(player.stats.experience > 0.0 || player.stats.level > 1);
}

#[test]
fn test_fled_session_mutates_nothing_lasting() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    let hp_before = player.stats.hitpoints;
    let mut resolver = EquipResolver::new();
    let mut party = Vec::new();
    let mut enemy = dummy_enemy(500, 40);
    let mut rng = test_rng(12);

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
    assert_eq!(report.rounds, 1);
    assert_eq!(player.stats.hitpoints, hp_before);
    assert_eq!(enemy.stats.hitpoints, enemy.stats.max_hitpoints);
}

#[test]
fn test_defeat_with_no_party() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    player.stats.hitpoints = 1;
    player.stats.attack = 0;
    player.stats.magic_attack = 0;
    player.stats.dodge_rate = 0.0;
    let mut resolver = EquipResolver::new();
    let mut party = Vec::new();
    let mut enemy = dummy_enemy(10_000, 400);
    let mut rng = test_rng(13);

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
    assert!(enemy.is_alive());
}

// =============================================================================
// The party-fights-on rule
// =============================================================================

// The loop condition is deliberately `(player alive OR party non-empty) AND
// enemy alive`: when the player goes down with allies standing, the fight
// carries on without them, the enemy stops attacking the downed player, and
// the allies can still win.
#[test]
fn test_party_fights_on_after_player_falls() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    player.stats.hitpoints = 1;
    player.stats.attack = 0;
    player.stats.magic_attack = 0;
    player.stats.dodge_rate = 0.0;
    let mut resolver = EquipResolver::new();
    let mut party = vec![ally("Kestrel Greystone", 200, 30)];
    let mut enemy = dummy_enemy(150, 400);
    let mut rng = test_rng(14);

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
    assert!(!player.is_alive(), "the player stayed down");
    assert_eq!(party.len(), 1, "the ally survived untouched");
    assert_eq!(
        party[0].stats.hitpoints, party[0].stats.max_hitpoints,
        "the enemy only ever attacks the player"
    );
    // The player fell in round one and the fight still ran to the end.
    assert!(report.rounds > 1);
}

#[test]
fn test_fallen_ally_is_removed_and_reported() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    player.stats.attack = 1000;
    let mut resolver = EquipResolver::new();
    let mut downed = ally("Pell Harrow", 100, 10);
    downed.stats.hitpoints = 0;
    let mut party = vec![downed, ally("Maren Keld", 100, 10)];
    let mut enemy = dummy_enemy(50, 0);
    let mut rng = test_rng(15);

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
    assert_eq!(report.fallen_allies, vec!["Pell Harrow".to_string()]);
    assert!(report
        .events
        .iter()
        .any(|e| matches!(e, CombatEvent::AllyFell { name } if name == "Pell Harrow")));
    assert_eq!(party.len(), 1);
    assert_eq!(party[0].name, "Maren Keld");
}

// =============================================================================
// Dodge, procs, buffs and debuffs over real content
// =============================================================================

#[test]
fn test_untouchable_dodge_build_takes_no_damage() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    player.stats.dodge_rate = 1.0;
    player.stats.attack = 5;
    player.stats.magic_attack = 0;
    let hp_before = player.stats.hitpoints;
    let mut resolver = EquipResolver::new();
    let mut party = Vec::new();
    let mut enemy = dummy_enemy(60, 100);
    let mut rng = test_rng(16);

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
    assert_eq!(player.stats.hitpoints, hp_before, "every enemy swing whiffed");
}

#[test]
fn test_weapon_proc_applies_and_ticks_over_rounds() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    player.stats.attack = 2;
    player.stats.magic_attack = 0;
    player.stats.crit_rate = 0.0;
    let mut resolver = EquipResolver::new();
    let (sword, _) = registry.equipment_by_name("Steel Sword").unwrap();
    resolver.equip(&mut player, &registry, sword).unwrap();
    player.weapon_debuff_chance = 1.0; // force the proc for determinism

    let mut party = Vec::new();
    let mut enemy = dummy_enemy(10_000, 0);
    let mut rng = test_rng(17);

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

    // Burning procs on the first hit and ticks at both round ends; the
    // second proc adds a stack, doubling the second tick.
    let proc = report.events.iter().find_map(|e| match e {
        CombatEvent::Attack(outcome) => outcome.debuff_inflicted.clone(),
        _ => None,
    });
    assert_eq!(proc.as_deref(), Some("Burning"));
    let ticks: Vec<(i32, i32)> = report
        .events
        .iter()
        .filter_map(|e| match e {
            CombatEvent::DebuffTick { damage, stacks, .. } => Some((*damage, *stacks)),
            _ => None,
        })
        .collect();
    assert_eq!(ticks, vec![(10, 1), (20, 2)]);
}

#[test]
fn test_buff_replacement_mid_combat() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    player.stats.attack = 0;
    player.stats.magic_attack = 0;
    let base_attack = 0;
    let base_armor = player.stats.armor;
    let (strength, _) = registry.potion_by_name("Strength Potion").unwrap();
    let (defense, _) = registry.potion_by_name("Defense Potion").unwrap();

    let mut resolver = EquipResolver::new();
    let mut party = Vec::new();
    let mut enemy = dummy_enemy(10_000, 0);
    let mut rng = test_rng(18);

    // Drinks strength, replaces it with defense (recording the attack value
    // seen at that moment), attacks out the defense duration, then flees.
    struct BuffProbe {
        turn: u32,
        strength: usize,
        defense: usize,
        attack_at_replacement: Option<i32>,
    }

    impl ActionSource for BuffProbe {
        fn choose_action(&mut self, view: &SessionView<'_>) -> PlayerAction {
            self.turn += 1;
            match self.turn {
                1 => PlayerAction::UsePotion(self.strength),
                2 => {
                    self.attack_at_replacement = Some(view.player.stats.attack);
                    PlayerAction::UsePotion(self.defense)
                }
                3..=5 => PlayerAction::Attack,
                _ => PlayerAction::Flee,
            }
        }
    }

    let mut choose = BuffProbe {
        turn: 0,
        strength,
        defense,
        attack_at_replacement: None,
    };
    CombatSession::new()
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

    // Strength was still active while the replacement was chosen.
    assert_eq!(choose.attack_at_replacement, Some(base_attack + 10));

    // The strength buff was fully reversed when defense replaced it, and the
    // defense buff expired after its three round ticks.
    assert_eq!(player.stats.attack, base_attack);
    assert!((player.stats.armor - base_armor).abs() < 1e-5);
    assert!(resolver.active_buff().is_none());
}

// =============================================================================
// Spells inside a session
// =============================================================================

#[test]
fn test_spell_heal_is_clamped_and_costs_mana() {
    let registry = ContentRegistry::embedded();
    let mut player = new_player(&registry);
    player.learn_spell("Urgent Heal");
    player.stats.mana = 20;
    player.stats.max_mana = 20;
    player.stats.hitpoints = player.stats.max_hitpoints - 10;
    player.stats.attack = 0;
    player.stats.magic_attack = 0;
    let mut resolver = EquipResolver::new();
    let mut party = Vec::new();
    let mut enemy = dummy_enemy(500, 0);
    let mut rng = test_rng(19);

    let mut choose = Scripted::then_flee(&[PlayerAction::CastSpell("Urgent Heal".to_string())]);
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

    let CombatEvent::SpellCast { healed, .. } = &report.events[0] else {
        panic!("expected the spell cast first");
    };
    assert_eq!(*healed, 10, "heal clamps to the missing hitpoints");
    assert_eq!(player.stats.mana, 6); // 20 - 14 cost
}
