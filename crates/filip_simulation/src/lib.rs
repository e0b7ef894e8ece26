//! Filip Simulation Core
//!
//! ECS-симуляция боевой логики на Bevy 0.16 (headless).
//!
//! ARCHITECTURE:
//! - ECS = state machines (ActorCombatState, WanderAi) + правила боя
//! - Хост-движок = физика, рендер, аниматор, звук (через Bevy events)

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod host;
pub mod logger;
pub mod movement;
pub mod world;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, WanderAction, WanderAi};
pub use combat::{
    ActorCombatState, ActorCommand, ActorDied, AnimationSignalled, AudioCuePlayed, CombatPlugin, CombatStatus,
    DamageIntent, EffectSpawned, EnemyContact, WeaponKind,
};
pub use components::*;
pub use config::{CombatTuning, ConfigError, SimulationConfig, WanderTuning};
pub use logger::*;
pub use movement::{MoveRequested, MovementPlugin};
pub use world::{
    CoinCollected, PlayerSession, SceneTransitionRequested, TriggerEntered, TriggerZone, WorldPlugin,
};

/// Фазы fixed-step тика (выполняются строго по порядку)
///
/// Таймеры снимают флаги раньше, чем новые команды проверяются по ним.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Timers,
    Commands,
    Damage,
    World,
    Ai,
    Movement,
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Берёт `SimulationConfig` из мира, если он уже вставлен, иначе default.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationConfig>();
        let config = app.world().resource::<SimulationConfig>().clone();

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Timers,
                SimulationSet::Commands,
                SimulationSet::Damage,
                SimulationSet::World,
                SimulationSet::Ai,
                SimulationSet::Movement,
                SimulationSet::Cleanup,
            )
                .chain(),
        )
        .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
        .insert_resource(DeterministicRng::new(config.seed))
        .add_plugins((CombatPlugin, AIPlugin, MovementPlugin, WorldPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную ровно на один fixed step за `update()`,
/// поэтому каждый `update()` (кроме самого первого, с нулевым delta)
/// прогоняет ровно один тик FixedUpdate.
pub fn create_headless_app(config: SimulationConfig) -> App {
    let mut app = App::new();
    init_logger();

    let step = Duration::from_secs_f64(1.0 / config.tick_hz);
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(step))
        .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
        .insert_resource(DeterministicRng::new(config.seed))
        .insert_resource(config);

    app
}

/// Spawn игрока: боевое состояние из `combat` тюнинга, пустой кошелёк
pub fn spawn_player(world: &mut World, position: Vec2) -> Entity {
    let config = world.get_resource::<SimulationConfig>().cloned().unwrap_or_default();

    world
        .spawn((
            Player,
            ActorCombatState::new(config.combat.clone()),
            Wallet::default(),
            MovementSpeed {
                speed: config.move_speed,
            },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

/// Spawn слайма: WanderAi + собственное боевое состояние (мобы тоже получают урон)
pub fn spawn_slime(world: &mut World, position: Vec2) -> Entity {
    let config = world.get_resource::<SimulationConfig>().cloned().unwrap_or_default();

    world
        .spawn((
            Mob,
            WanderAi::new(&config.wander),
            ActorCombatState::with_full_health(config.combat.clone()),
            MovementSpeed {
                speed: config.move_speed,
            },
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
