// Experience and leveling
pub const XP_REQUIREMENT_START: f32 = 100.0;
pub const XP_REQUIREMENT_GROWTH: f32 = 1.2;
pub const LEVEL_UP_STAT_GROWTH: f32 = 1.1;

// Combat damage roll: uniform noise band around the base damage
pub const DAMAGE_VARIANCE: f32 = 0.15;

// Enemy scaling
pub const ENEMY_LEVEL_SCALE_STEP: f32 = 0.1;
pub const ENEMY_LEVEL_SCALE_FLOOR: f32 = 0.5;

// Flat location adjustments applied after the multiplicative passes
pub const VILLAGE_ATTACK_PENALTY: i32 = 2;
pub const VILLAGE_DODGE_BONUS: f32 = 0.05;
pub const TOWN_ATTACK_PENALTY: i32 = 1;
pub const TOWN_DODGE_BONUS: f32 = 0.03;
pub const DUNGEON_MAGIC_ARMOR_BONUS: f32 = 0.1;
pub const DUNGEON_MAGIC_ATTACK_BONUS: i32 = 5;
pub const DUNGEON_DODGE_PENALTY: f32 = 0.05;

// Party members
pub const PARTY_MAX_SIZE: usize = 4;
pub const NPC_LEVEL_BAND: i32 = 2;
pub const NPC_LEVEL_SCALE_STEP: f32 = 0.1;
pub const NPC_WAGE_BASE: i64 = 10;
pub const NPC_WAGE_PER_LEVEL: i64 = 2;

// Currency carries at base 100 between adjacent denominations
pub const CURRENCY_BASE: i64 = 100;

// Calendar
pub const DAYS_PER_WEEK: i32 = 7;
pub const WEEKS_PER_MONTH: i32 = 4;
pub const MONTHS_PER_YEAR: i32 = 12;
pub const FATIGUE_PENALTY_RATE: f32 = 0.05;
