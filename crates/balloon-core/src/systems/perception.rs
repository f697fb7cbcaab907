//! Perception System
//!
//! Range-gated visibility. Plain Euclidean distance, no wraparound, no occlusion.

use crate::components::{Agent, Entity, Landmark, World};

/// Euclidean distance between two entities
pub fn distance(a: &impl Entity, b: &impl Entity) -> f32 {
    a.position().distance(b.position())
}

/// Whether `target` lies within the observer's observation range (inclusive)
pub fn is_visible(observer: &Agent, target: &impl Entity) -> bool {
    distance(observer, target) <= observer.obs_range
}

/// Whether two entities overlap. Tangency is not a collision.
///
/// Never pass the same entity twice: distance zero with a positive size
/// always collides.
pub fn is_collision(a: &impl Entity, b: &impl Entity) -> bool {
    distance(a, b) < a.size() + b.size()
}

/// Whether `target` is close enough for `attacker` to engage (inclusive)
pub fn in_attack_range(attacker: &Agent, target: &impl Entity) -> bool {
    distance(attacker, target) <= attacker.atk_range
}

/// Non-boundary landmarks the observer can see, in roster order
pub fn visible_landmarks<'w>(
    observer: &'w Agent,
    world: &'w World,
) -> impl Iterator<Item = &'w Landmark> + 'w {
    world
        .landmarks
        .iter()
        .filter(move |l| !l.boundary && is_visible(observer, *l))
}

/// Other agents the observer can see, in roster order, excluding itself
pub fn visible_peers<'w>(
    observer: &'w Agent,
    world: &'w World,
) -> impl Iterator<Item = &'w Agent> + 'w {
    world
        .agents
        .iter()
        .filter(move |a| a.index != observer.index && is_visible(observer, *a))
}
