//! Combat module - боевое состояние актора
//!
//! ECS ответственность:
//! - Game state: ActorCombatState (health, weapon, facing, timed флаги)
//! - Combat rules: reject-don't-queue для атак/урона/движения
//! - Events: EffectSpawned, AnimationSignalled, AudioCuePlayed, ActorDied
//!
//! Хост ответственность:
//! - Коллизии (EnemyContact, DamageIntent от снарядов)
//! - Визуал эффектов, аниматор, звук

use bevy::prelude::*;
use crate::SimulationSet;

pub mod bridge;
pub mod events;
pub mod state;
pub mod systems;
pub mod weapon;


pub use bridge::{ActorSignals, EventHost};
pub use events::*;
pub use state::{ActorCombatState, CombatStatus, MovementLock};
pub use systems::*;
pub use weapon::{WeaponKind, WEAPON_COUNT};

/// Combat Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. advance_combat_states - таймеры, планирование деспавна мёртвых
/// 2. process_actor_commands - move / attack / defend / change weapon
/// 3. apply_damage_intents - урон от снарядов и касаний
/// 4. despawn_after_timeout - удаление после grace period
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ActorCommand>()
            .add_event::<DamageIntent>()
            .add_event::<EnemyContact>()
            .add_event::<EffectSpawned>()
            .add_event::<AnimationSignalled>()
            .add_event::<AudioCuePlayed>()
            .add_event::<ActorDied>()
            .register_type::<ActorCombatState>();

        app.add_systems(FixedUpdate, advance_combat_states.in_set(SimulationSet::Timers))
            .add_systems(FixedUpdate, process_actor_commands.in_set(SimulationSet::Commands))
            .add_systems(FixedUpdate, apply_damage_intents.in_set(SimulationSet::Damage))
            .add_systems(FixedUpdate, despawn_after_timeout.in_set(SimulationSet::Cleanup));
    }
}
