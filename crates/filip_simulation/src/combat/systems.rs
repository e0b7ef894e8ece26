//! Combat systems (FixedUpdate, chained)
//!
//! Порядок внутри тика важен: таймеры снимают флаги до того, как новые
//! команды проверяются по этим флагам.

use bevy::prelude::*;
use crate::combat::bridge::ActorSignals;
use crate::combat::events::{ActorCommand, DamageIntent, DespawnAfter, EnemyContact};
use crate::combat::state::{ActorCombatState, CombatStatus};
use crate::components::Player;

/// Система: тик таймеров боевого состояния
///
/// Снимает attacking / hit_stun / movement lock по истечении cooldown'ов,
/// для мёртвых - планирует деспавн (один раз).
pub fn advance_combat_states(
    mut actors: Query<(Entity, &mut ActorCombatState, &Transform, Has<Player>)>,
    mut signals: ActorSignals,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut state, transform, is_player) in actors.iter_mut() {
        let mut host = signals.host(entity, transform.translation.truncate(), is_player);
        state.advance(delta, &mut host);
    }
}

/// Система: ActorCommand → ActorCombatState
pub fn process_actor_commands(
    mut incoming: EventReader<ActorCommand>,
    mut actors: Query<(&mut ActorCombatState, &Transform, Has<Player>)>,
    mut signals: ActorSignals,
) {
    for command in incoming.read() {
        let entity = command.entity();
        let Ok((mut state, transform, is_player)) = actors.get_mut(entity) else {
            crate::log_warning(&format!(
                "ActorCommand for {:?} without ActorCombatState: {:?}",
                entity, command
            ));
            continue;
        };

        if state.is_dead() {
            continue;
        }

        let mut host = signals.host(entity, transform.translation.truncate(), is_player);
        match command {
            ActorCommand::Move { axis, .. } => state.request_move(*axis, &mut host),
            ActorCommand::Attack { .. } => {
                if !state.attack(&mut host) {
                    crate::log(&format!("Attack rejected for {:?}", entity));
                }
            }
            ActorCommand::Defend { .. } => state.defend(&mut host),
            ActorCommand::StopDefend { .. } => state.stop_defend(&mut host),
            ActorCommand::ChangeWeapon { .. } => state.change_weapon(&mut host),
        }
    }
}

/// Система: DamageIntent / EnemyContact → apply_damage
///
/// Отклонённый урон (hit stun, защита, смерть) просто теряется.
pub fn apply_damage_intents(
    mut damage_events: EventReader<DamageIntent>,
    mut contact_events: EventReader<EnemyContact>,
    mut actors: Query<(&mut ActorCombatState, &Transform, Has<Player>)>,
    mut signals: ActorSignals,
) {
    let contacts = contact_events.read().filter_map(|contact| {
        let (state, _, _) = actors.get(contact.player).ok()?;
        Some((contact.player, state.tuning().contact_damage, Some(contact.enemy)))
    });
    let pending: Vec<(Entity, i32, Option<Entity>)> = damage_events
        .read()
        .map(|intent| (intent.target, intent.amount, intent.source))
        .chain(contacts)
        .collect();

    for (target, amount, source) in pending {
        let Ok((mut state, transform, is_player)) = actors.get_mut(target) else {
            continue;
        };

        let mut host = signals.host(target, transform.translation.truncate(), is_player);
        if state.apply_damage(amount, &mut host) {
            crate::log(&format!(
                "💥 {:?} took {} damage from {:?} (health: {}/{})",
                target,
                amount,
                source,
                state.health(),
                state.max_health()
            ));
        }
    }
}

/// Система: деспавн entities с истёкшим DespawnAfter timeout
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time<Fixed>>,
) {
    let current_time = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if current_time >= despawn_after.despawn_time {
            crate::log_info(&format!("Despawning entity {:?} (grace period over)", entity));
            commands.entity(entity).despawn();
        }
    }
}
