//! AI decision-making module
//!
//! WanderAi для мобов: периодический случайный выбор Wait/Move.
//! Решения берут случайность из `DeterministicRng` → воспроизводимо по seed.

use bevy::prelude::*;
use crate::combat::{ActorCombatState, ActorSignals};
use crate::{DeterministicRng, SimulationSet};

pub mod wander;


pub use wander::{WanderAction, WanderAi};

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate (после урона этого тика,
/// до интеграции движения).
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<WanderAi>()
            .add_systems(FixedUpdate, advance_wander_ai.in_set(SimulationSet::Ai));
    }
}

/// Система: тик WanderAi
///
/// Боевое состояние моба читается, не пишется. Мобы без
/// ActorCombatState считаются всегда здоровыми.
pub fn advance_wander_ai(
    mut mobs: Query<(Entity, &mut WanderAi, Option<&ActorCombatState>, &Transform)>,
    mut rng: ResMut<DeterministicRng>,
    mut signals: ActorSignals,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();
    let healthy = ActorCombatState::default();

    for (entity, mut ai, status, transform) in mobs.iter_mut() {
        let before = ai.action();
        let mut host = signals.host(entity, transform.translation.truncate(), false);
        ai.advance(delta, status.unwrap_or(&healthy), &mut rng.rng, &mut host);

        if ai.action() != before {
            crate::log(&format!(
                "🟢 Mob {:?}: {:?} → {:?} ({:?})",
                entity,
                before,
                ai.action(),
                ai.move_direction()
            ));
        }
    }
}
