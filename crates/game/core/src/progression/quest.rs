//! Quests and level-adaptive quest assignment.

use tracing::debug;

use crate::combat::damage::round_stat;
use crate::entity::Character;
use crate::error::SetupError;
use crate::outcome::{Effect, Outcome, QuestReport, Tag};

/// Level gap beyond which adaptive scaling kicks in.
const LEVEL_GAP: i64 = 2;

/// A quest and its progress.
///
/// Rewards, goal and progress change only through a [`QuestStrategy`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quest {
    title: String,
    base_level: u32,
    xp_reward: u32,
    gold_reward: u32,
    goal: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    progress: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    assigned: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    credited: bool,
}

impl Quest {
    pub fn new(
        title: impl Into<String>,
        base_level: u32,
        xp_reward: u32,
        gold_reward: u32,
        goal: u32,
    ) -> Result<Self, SetupError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SetupError::EmptyQuestTitle);
        }
        Ok(Self {
            title,
            base_level,
            xp_reward,
            gold_reward,
            goal,
            progress: 0,
            assigned: false,
            credited: false,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_level(&self) -> u32 {
        self.base_level
    }

    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    pub fn gold_reward(&self) -> u32 {
        self.gold_reward
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    pub fn is_credited(&self) -> bool {
        self.credited
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.goal
    }

    fn report(&self) -> QuestReport {
        QuestReport {
            xp_reward: self.xp_reward,
            gold_reward: self.gold_reward,
            goal: self.goal,
            progress: self.progress,
            xp_credited: 0,
            gold_credited: 0,
        }
    }

    /// Check quest invariants, e.g. after loading a snapshot.
    pub fn check_invariants(&self) -> Result<(), SetupError> {
        if self.title.trim().is_empty() {
            return Err(SetupError::EmptyQuestTitle);
        }
        if !self.assigned && self.progress > 0 {
            return Err(SetupError::UnassignedProgress {
                title: self.title.clone(),
                progress: self.progress,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuestStrategy {
    /// Scales rewards up for over-leveled players and goals down for under-leveled ones.
    #[default]
    Adaptive,
}

impl QuestStrategy {
    /// Assign `quest` to `player`, scaling it on first assignment only.
    pub fn assign(&self, player: &Character, quest: &mut Quest) -> Outcome {
        if !quest.assigned {
            match self {
                Self::Adaptive => scale_for(player.level(), quest),
            }
            quest.assigned = true;
            debug!(
                quest = quest.title(),
                player = player.name(),
                xp = quest.xp_reward,
                gold = quest.gold_reward,
                goal = quest.goal,
                "quest assigned"
            );
        }
        Outcome::applied(quest.title.as_str(), Tag::QuestAssigned, Effect::Quest(quest.report()))
    }

    /// Record `amount` units of progress on an assigned quest.
    pub fn record_progress(&self, quest: &mut Quest, amount: u32) -> Outcome {
        if quest.assigned && !quest.credited {
            quest.progress = quest.progress.saturating_add(amount);
        }
        Outcome::applied(quest.title.as_str(), Tag::QuestProgress, Effect::Quest(quest.report()))
    }

    /// Credit rewards once the goal is met. Repeated calls never pay twice,
    /// and a quest that was never assigned is never complete.
    pub fn evaluate_completion(&self, player: &mut Character, quest: &mut Quest) -> Outcome {
        if quest.credited {
            return Outcome::applied(
                quest.title.as_str(),
                Tag::AlreadyCredited,
                Effect::Quest(quest.report()),
            );
        }
        if !quest.assigned || !quest.is_complete() {
            return Outcome::applied(
                quest.title.as_str(),
                Tag::QuestIncomplete,
                Effect::Quest(quest.report()),
            );
        }

        player.add_experience(quest.xp_reward);
        player.add_gold(quest.gold_reward);
        quest.credited = true;

        let mut report = quest.report();
        report.xp_credited = quest.xp_reward;
        report.gold_credited = quest.gold_reward;
        Outcome::applied(quest.title.as_str(), Tag::QuestCompleted, Effect::Quest(report))
    }
}

fn scale_for(player_level: u32, quest: &mut Quest) {
    let delta = player_level as i64 - quest.base_level as i64;
    if delta > LEVEL_GAP {
        let d = delta as f64;
        quest.xp_reward = round_stat(quest.xp_reward as f64 * (1.0 + 0.2 * d));
        quest.gold_reward = round_stat(quest.gold_reward as f64 * (1.0 + 0.15 * d));
    } else if delta < -LEVEL_GAP {
        let factor = 1.0 - 0.1 * delta.unsigned_abs() as f64;
        quest.goal = round_stat(quest.goal as f64 * factor).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::CharacterClass;

    fn player(level: u32) -> Character {
        Character::builder("Hero", CharacterClass::Rogue)
            .level(level)
            .build()
            .unwrap()
    }

    fn bounty() -> Quest {
        Quest::new("Rat Bounty", 5, 100, 40, 10).unwrap()
    }

    #[test]
    fn rejects_blank_titles() {
        assert_eq!(Quest::new("  ", 1, 0, 0, 1), Err(SetupError::EmptyQuestTitle));
    }

    #[test]
    fn over_leveled_player_earns_more() {
        let mut quest = bounty();
        QuestStrategy::Adaptive.assign(&player(9), &mut quest);
        // delta 4: xp × 1.8, gold × 1.6
        assert_eq!(quest.xp_reward(), 180);
        assert_eq!(quest.gold_reward(), 64);
        assert_eq!(quest.goal(), 10);
    }

    #[test]
    fn under_leveled_player_gets_smaller_goal() {
        let mut quest = bounty();
        QuestStrategy::Adaptive.assign(&player(1), &mut quest);
        // delta -4: goal × 0.6
        assert_eq!(quest.goal(), 6);
        assert_eq!(quest.xp_reward(), 100);
    }

    #[test]
    fn goal_never_drops_below_one() {
        let mut quest = Quest::new("Epic", 30, 1000, 500, 3).unwrap();
        QuestStrategy::Adaptive.assign(&player(1), &mut quest);
        assert_eq!(quest.goal(), 1);
    }

    #[test]
    fn close_levels_are_untouched() {
        for level in [3, 5, 7] {
            let mut quest = bounty();
            QuestStrategy::Adaptive.assign(&player(level), &mut quest);
            assert_eq!(quest, {
                let mut q = bounty();
                q.assigned = true;
                q
            });
        }
    }

    #[test]
    fn reassignment_does_not_rescale() {
        let mut quest = bounty();
        let hero = player(9);
        QuestStrategy::Adaptive.assign(&hero, &mut quest);
        QuestStrategy::Adaptive.assign(&hero, &mut quest);
        assert_eq!(quest.xp_reward(), 180);
    }

    #[test]
    fn completion_credits_exactly_once() {
        let strategy = QuestStrategy::Adaptive;
        let mut hero = player(5);
        let mut quest = bounty();
        strategy.assign(&hero, &mut quest);

        strategy.record_progress(&mut quest, 4);
        let early = strategy.evaluate_completion(&mut hero, &mut quest);
        assert_eq!(early.tag, Tag::QuestIncomplete);
        assert_eq!(hero.gold(), 0);

        strategy.record_progress(&mut quest, 6);
        let done = strategy.evaluate_completion(&mut hero, &mut quest);
        assert_eq!(done.tag, Tag::QuestCompleted);
        assert_eq!(hero.experience(), 100);
        assert_eq!(hero.gold(), 40);

        let again = strategy.evaluate_completion(&mut hero, &mut quest);
        assert_eq!(again.tag, Tag::AlreadyCredited);
        assert_eq!(hero.experience(), 100);
        assert_eq!(hero.gold(), 40);
    }

    #[test]
    fn unassigned_quest_never_pays_out() {
        let mut hero = player(5);
        let mut quest = Quest::new("Free Lunch", 5, 100, 40, 0).unwrap();

        let outcome = QuestStrategy::Adaptive.evaluate_completion(&mut hero, &mut quest);

        assert_eq!(outcome.tag, Tag::QuestIncomplete);
        assert!(!quest.is_credited());
        assert_eq!(hero.experience(), 0);
        assert_eq!(hero.gold(), 0);
    }

    #[test]
    fn progress_requires_assignment() {
        let mut quest = bounty();
        QuestStrategy::Adaptive.record_progress(&mut quest, 5);
        assert_eq!(quest.progress(), 0);
        assert!(quest.check_invariants().is_ok());
    }
}
