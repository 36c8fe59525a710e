/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seed for the simulation PRNG owned by [`crate::GameSystem`].
    pub seed: u64,
    /// Upper bound on rounds an [`crate::Encounter`] runs before calling a draw.
    pub max_encounter_rounds: u32,
}

impl GameConfig {
    // ===== rules that must not be relaxed =====
    /// Damage applied by a hit on a live target is never below this.
    pub const MIN_DAMAGE: u32 = 1;

    // ===== fixed balance constants =====
    /// Distance assumed when the environment does not report `distance_to_player`.
    pub const DEFAULT_DISTANCE: f64 = 10.0;
    /// Distance at or below which AI treats the player as reachable.
    pub const MELEE_RANGE: f64 = 2.0;
    /// Experience needed for one skill point.
    pub const XP_PER_SKILL_POINT: u32 = 100;
    /// Max-health gained per skill point spent on health.
    pub const HEALTH_PER_POINT: u32 = 5;
    /// Bound used for a resource with no explicit maximum.
    pub const DEFAULT_RESOURCE_MAX: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5eed_c0de;
    pub const DEFAULT_MAX_ENCOUNTER_ROUNDS: u32 = 50;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            max_encounter_rounds: Self::DEFAULT_MAX_ENCOUNTER_ROUNDS,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
