//! PlayerSession - единственный живой игрок
//!
//! Ресурс мира держит handle текущего игрока. HUD и переходы между
//! сценами читают его отсюда, глобального синглтона нет.

use bevy::prelude::*;
use crate::combat::{ActorCombatState, CombatStatus};
use crate::components::Player;

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerSession {
    player: Option<Entity>,
}

impl PlayerSession {
    pub fn player(&self) -> Option<Entity> {
        self.player
    }
}

/// Система: регистрация нового Player в сессии
///
/// Если текущий игрок ещё жив - новый является дубликатом и удаляется.
/// Мёртвый или уже удалённый игрок замещается новым.
pub fn register_player(
    mut commands: Commands,
    mut session: ResMut<PlayerSession>,
    spawned: Query<Entity, Added<Player>>,
    players: Query<Option<&ActorCombatState>, With<Player>>,
) {
    for entity in spawned.iter() {
        if session.player == Some(entity) {
            continue;
        }

        let current_alive = session.player.is_some_and(|current| {
            players
                .get(current)
                .is_ok_and(|state| state.is_none_or(|state| !state.is_dead()))
        });

        if current_alive {
            crate::log_warning(&format!(
                "Duplicate player {:?} rejected (current: {:?})",
                entity, session.player
            ));
            commands.entity(entity).despawn();
            continue;
        }

        crate::log_info(&format!("🎮 Player session: {:?} → {:?}", session.player, entity));
        session.player = Some(entity);
    }
}
