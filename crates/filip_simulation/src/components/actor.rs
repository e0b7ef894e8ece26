//! Маркеры и простые компоненты акторов: Player, Mob, Wallet, MovementSpeed

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Единственный живой Player регистрируется в `PlayerSession`;
/// дубликат, заспавненный поверх живого, удаляется.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Marker component для мобов (управляются `WanderAi`)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Mob;

/// Монеты, собранные игроком
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Wallet {
    pub coins: u32,
}

/// Предмет, который можно подобрать (монета)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Pickable;

/// Скорость kinematic движения (units/sec)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}
