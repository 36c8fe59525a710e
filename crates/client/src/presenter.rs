//! Console messages for outcomes and run reports.
//!
//! Purely read-only: every function formats records the core and runtime
//! already produced. Examples:
//! - "Ayla attacks Grunt: Grunt takes 12 damage (3 absorbed, 18 left)"
//! - "cart moves (0.00, 0.00) -> (2.00, 0.00)"
//! - "scout exploration: completed after 7 steps"

use game_core::{Effect, EncounterReport, Outcome, Status, Tag, Winner};
use runtime::{RunReport, RunStatus};

/// One line describing a single outcome.
pub fn format_outcome(outcome: &Outcome) -> String {
    let actor = outcome.actor.as_str();
    match outcome.status {
        Status::MissingBinding(kind) => format!("{} has no {} strategy", actor, kind),
        Status::ActorDead => format!("{} cannot act", actor),
        Status::TargetDead => format!("{} has no live target", actor),
        Status::Applied => format_applied(actor, outcome.tag, &outcome.effect),
    }
}

fn format_applied(actor: &str, tag: Tag, effect: &Effect) -> String {
    match effect {
        Effect::Damage {
            target,
            dealt,
            absorbed,
            remaining_health,
        } => {
            let verb = match tag {
                Tag::AggressiveGuard | Tag::DefensiveGuard | Tag::BalancedGuard => "braces",
                _ => "attacks",
            };
            let mut msg = if target == actor {
                format!("{} {}: takes {} damage", actor, verb, dealt)
            } else {
                format!("{} {} {}: {} takes {} damage", actor, verb, target, target, dealt)
            };
            msg.push_str(&format!(" ({} absorbed, {} left)", absorbed, remaining_health));
            if *remaining_health == 0 {
                msg.push_str(" - defeated!");
            }
            msg
        }
        Effect::Movement { from, to, .. } => match tag {
            Tag::AlreadyThere => format!("{} is already at {}", actor, to),
            Tag::Avoid => format!("{} sidesteps {} -> {}", actor, from, to),
            Tag::Arrive => format!("{} arrives at {}", actor, to),
            _ => format!("{} moves {} -> {}", actor, from, to),
        },
        Effect::Resources(report) => {
            let levels = report
                .levels
                .iter()
                .map(|(name, level)| format!("{}={}", name, level))
                .collect::<Vec<_>>()
                .join(", ");
            let mut msg = format!("{} {}s [{}]", actor, tag, levels);
            if report.mana_spent > 0 {
                msg.push_str(&format!(
                    ", spends {} mana to restore {} health",
                    report.mana_spent, report.health_restored
                ));
            }
            msg
        }
        Effect::Threat(level) => format!("{} sees a {} threat", actor, level),
        Effect::Target { name, .. } => format!("{} targets {}", actor, name),
        Effect::AttackType(kind) => format!("{} prepares a {} attack", actor, kind),
        Effect::Development(report) => format!(
            "{} spends {} skill points (+{} health, +{} attack, +{} defense)",
            actor, report.skill_points, report.max_health, report.attack, report.defense
        ),
        Effect::Price(price) => format!("{} costs {} gold", actor, price),
        Effect::Quest(report) => match tag {
            Tag::QuestCompleted => format!(
                "{} completed: +{} xp, +{} gold",
                actor, report.xp_credited, report.gold_credited
            ),
            Tag::QuestAssigned => format!(
                "{} assigned: goal {}, reward {} xp / {} gold",
                actor, report.goal, report.xp_reward, report.gold_reward
            ),
            Tag::AlreadyCredited => format!("{} was already rewarded", actor),
            _ => format!("{} progress {}/{}", actor, report.progress, report.goal),
        },
        Effect::None => match tag {
            Tag::NoTarget => format!("{} finds no target", actor),
            _ => format!("{} {}", actor, tag.to_string().replace('_', " ")),
        },
    }
}

/// Summary line plus one line per outcome.
pub fn format_encounter(report: &EncounterReport) -> Vec<String> {
    let mut lines: Vec<String> = report.outcomes.iter().map(format_outcome).collect();
    let verdict = match report.winner {
        Winner::Player => "player wins",
        Winner::Enemies => "enemies win",
        Winner::Draw => "draw",
    };
    lines.push(format!("encounter over after {} rounds: {}", report.rounds, verdict));
    lines
}

/// One line describing a finished cooperative run.
pub fn format_run_report(report: &RunReport) -> String {
    let behavior = report
        .behavior
        .map(|kind| kind.to_string())
        .unwrap_or_else(|| "idle".to_owned());
    match report.status {
        RunStatus::MissingBinding => format!("{}: no behavior attached", report.context),
        RunStatus::Refused => format!("{} {}: refused to start", report.context, behavior),
        status => format!(
            "{} {}: {} after {} steps",
            report.context, behavior, status, report.steps
        ),
    }
}
