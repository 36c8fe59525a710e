//! Movement strategies for positioned entities.

use tracing::debug;

use crate::entity::{GameEntity, Vec2};
use crate::env::Environment;
use crate::outcome::{Effect, Outcome, Tag};

/// Distances below this count as "already there".
const ARRIVAL_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovementStrategy {
    /// Straight line toward the target, `min(speed, remaining)` per step.
    Direct { speed: f64 },
    /// Halves forward speed and veers away from the first obstacle inside
    /// `detection_radius`; behaves as `Direct` when none is in range.
    Avoidance { speed: f64, detection_radius: f64 },
}

/// Where one step lands and how to describe it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub to: Vec2,
    pub tag: Tag,
}

impl MovementStrategy {
    pub fn direct(speed: f64) -> Self {
        Self::Direct {
            speed: non_negative(speed),
        }
    }

    pub fn avoidance(speed: f64, detection_radius: f64) -> Self {
        Self::Avoidance {
            speed: non_negative(speed),
            detection_radius: non_negative(detection_radius),
        }
    }

    /// Compute one step from `from` toward `target` without touching any entity.
    pub fn step(&self, from: Vec2, target: Vec2, env: &Environment) -> Step {
        let offset = target - from;
        let remaining = offset.length();
        let Some(direction) = offset.normalized().filter(|_| remaining > ARRIVAL_EPSILON) else {
            return Step {
                to: from,
                tag: Tag::AlreadyThere,
            };
        };

        match *self {
            Self::Direct { speed } => direct_step(from, direction, remaining, speed),
            Self::Avoidance {
                speed,
                detection_radius,
            } => {
                let nearby = env
                    .obstacles
                    .iter()
                    .map(|&obstacle| (obstacle, from.distance(obstacle)))
                    .find(|&(_, distance)| distance < detection_radius);

                let Some((obstacle, distance)) = nearby else {
                    return direct_step(from, direction, remaining, speed);
                };

                let along = (speed * 0.5).min(remaining);
                let mut side = direction.perpendicular();
                if side.dot(from - obstacle) < 0.0 {
                    side = side * -1.0;
                }
                let push = (1.0 - distance / detection_radius) * speed * 0.5;
                Step {
                    to: from + direction * along + side * push,
                    tag: Tag::Avoid,
                }
            }
        }
    }

    /// Move `entity` one step toward `target`.
    pub fn execute(&self, entity: &mut GameEntity, target: Vec2, env: &Environment) -> Outcome {
        let from = entity.position();
        let step = self.step(from, target, env);
        entity.set_position(step.to);

        debug!(entity = entity.name(), %from, to = %step.to, tag = %step.tag, "moved");

        Outcome::applied(
            entity.name(),
            step.tag,
            Effect::Movement {
                from,
                to: step.to,
                travelled: from.distance(step.to),
            },
        )
    }
}

fn direct_step(from: Vec2, direction: Vec2, remaining: f64, speed: f64) -> Step {
    let length = speed.min(remaining);
    let tag = if length >= remaining { Tag::Arrive } else { Tag::Move };
    Step {
        to: from + direction * length,
        tag,
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
