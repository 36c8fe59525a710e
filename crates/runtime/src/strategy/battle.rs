use async_trait::async_trait;
use game_core::BattleStrategy;
use tracing::debug;

use super::{BehaviorKind, ConcurrentStrategy, RunStatus};
use crate::context::Scope;
use crate::world::World;

/// Fights the world's enemies one after another in fixed-tick rounds.
///
/// Each round the context strikes with a roll from the tactic's damage
/// range, applied through the enemy's own `take_damage`; a surviving enemy
/// strikes back for `[attack / 2, attack]` against the context's health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleBehavior {
    tactic: BattleStrategy,
}

impl BattleBehavior {
    pub fn new(tactic: BattleStrategy) -> Self {
        Self { tactic }
    }

    pub fn tactic(&self) -> BattleStrategy {
        self.tactic
    }

    /// Inclusive damage roll range for the context's strikes.
    pub const fn damage_range(&self) -> (u32, u32) {
        match self.tactic {
            BattleStrategy::Aggressive => (15, 25),
            BattleStrategy::Balanced => (10, 18),
            BattleStrategy::Defensive => (5, 12),
        }
    }
}

#[async_trait(?Send)]
impl ConcurrentStrategy for BattleBehavior {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Battle
    }

    async fn execute(&self, scope: &mut Scope<'_>, world: &mut World) -> RunStatus {
        let tick = scope.config().round_tick();
        let (low, high) = self.damage_range();
        let mut round = 0u32;

        for enemy in world.enemies.iter_mut() {
            while enemy.is_alive() {
                if scope.state.health == 0 {
                    return RunStatus::Defeated;
                }
                if round > 0 && scope.sleep(tick).await.is_break() {
                    return RunStatus::Stopped;
                }
                round += 1;

                let roll = scope.rng.range(low, high);
                let dealt = enemy.take_damage(roll);
                let strike = format!(
                    "round {round}: {} hits {} for {dealt}",
                    scope.name(),
                    enemy.name()
                );

                let reply = if enemy.is_alive() {
                    let attack = enemy.attack_power().max(0) as u32;
                    let hit = scope.rng.range(attack / 2, attack);
                    scope.state.health = scope.state.health.saturating_sub(hit);
                    format!(
                        "round {round}: {} strikes back for {hit} ({} health left)",
                        enemy.name(),
                        scope.state.health
                    )
                } else {
                    format!("round {round}: {} is defeated", enemy.name())
                };

                debug!(context = scope.name(), round, enemy = enemy.name(), dealt, "battle round");
                scope.state.battle_log.push(strike);
                scope.state.battle_log.push(reply);
                scope.step();
            }
        }

        if scope.state.health == 0 {
            RunStatus::Defeated
        } else {
            RunStatus::Completed
        }
    }
}
