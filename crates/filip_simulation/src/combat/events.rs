//! Combat events
//!
//! Входящие (host → ECS): ActorCommand, DamageIntent, EnemyContact
//! Исходящие (ECS → host): EffectSpawned, AnimationSignalled, AudioCuePlayed, ActorDied

use bevy::prelude::*;
use crate::host::{AnimationSignal, AudioCue, EffectKind};

/// Команда актору (input игрока или скрипт)
///
/// Обрабатывается ПОСЛЕ тика таймеров этого кадра. Заблокированные
/// команды отбрасываются, не буферизуются.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum ActorCommand {
    /// Движение по оси (zero → idle)
    Move { entity: Entity, axis: Vec2 },
    Attack { entity: Entity },
    Defend { entity: Entity },
    StopDefend { entity: Entity },
    ChangeWeapon { entity: Entity },
}

impl ActorCommand {
    pub fn entity(&self) -> Entity {
        match self {
            ActorCommand::Move { entity, .. }
            | ActorCommand::Attack { entity }
            | ActorCommand::Defend { entity }
            | ActorCommand::StopDefend { entity }
            | ActorCommand::ChangeWeapon { entity } => *entity,
        }
    }
}

/// Урон по актору (попадание снаряда, скрипт)
#[derive(Event, Debug, Clone)]
pub struct DamageIntent {
    pub target: Entity,
    pub amount: i32,
    pub source: Option<Entity>,
}

/// Игрок касается врага (шлётся хостом каждый тик контакта)
///
/// Урон = `CombatTuning::contact_damage`, hit stun гасит повторы.
#[derive(Event, Debug, Clone)]
pub struct EnemyContact {
    pub player: Entity,
    pub enemy: Entity,
}

/// Эффект атаки заспавнен (world координаты)
#[derive(Event, Debug, Clone)]
pub struct EffectSpawned {
    pub owner: Entity,
    pub kind: EffectKind,
    pub position: Vec2,
    pub rotation_degrees: f32,
}

/// Параметр аниматора изменился
#[derive(Event, Debug, Clone)]
pub struct AnimationSignalled {
    pub entity: Entity,
    pub signal: AnimationSignal,
}

/// Звуковой cue
#[derive(Event, Debug, Clone)]
pub struct AudioCuePlayed {
    pub entity: Entity,
    pub cue: AudioCue,
}

/// Актор умер (health <= 0), ровно одно событие на актора
#[derive(Event, Debug, Clone)]
pub struct ActorDied {
    pub entity: Entity,
    pub was_player: bool,
}

/// Компонент-маркер: деспавн entity после указанного времени
///
/// Ставится при смерти (grace period). Система `despawn_after_timeout`
/// удаляет entity когда fixed elapsed >= despawn_time.
#[derive(Component, Debug)]
pub struct DespawnAfter {
    /// Время деспавна (секунды fixed времени от старта)
    pub despawn_time: f32,
}
