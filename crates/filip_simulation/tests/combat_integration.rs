//! Combat integration test
//!
//! Полный SimulationPlugin headless, события через Bevy events.
//!
//! Проверяем:
//! - Спам атак даёт ровно один эффект за cooldown
//! - Контакт с врагом → смерть один раз → деспавн после grace period
//! - Дубликат игрока удаляется, сессия держит первого
//! - Двери и монеты

use bevy::prelude::*;
use filip_simulation::host::{AudioCue, EffectKind};
use filip_simulation::*;

/// Копит события типа E (читаются в PostUpdate, после FixedUpdate)
#[derive(Resource)]
struct Collected<E: Event>(Vec<E>);

impl<E: Event> Default for Collected<E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn collect<E: Event + Clone>(mut reader: EventReader<E>, mut out: ResMut<Collected<E>>) {
    out.0.extend(reader.read().cloned());
}

fn collecting<E: Event + Clone>(app: &mut App) {
    app.init_resource::<Collected<E>>()
        .add_systems(PostUpdate, collect::<E>);
}

fn collected<E: Event + Clone>(app: &App) -> Vec<E> {
    app.world().resource::<Collected<E>>().0.clone()
}

/// Helper: полный App; первый update (нулевой delta) уже прогнан
fn create_combat_app(config: SimulationConfig) -> App {
    let mut app = create_headless_app(config);
    app.add_plugins(SimulationPlugin);
    collecting::<EffectSpawned>(&mut app);
    collecting::<ActorDied>(&mut app);
    collecting::<AudioCuePlayed>(&mut app);
    collecting::<SceneTransitionRequested>(&mut app);
    collecting::<CoinCollected>(&mut app);
    app.update();
    app
}

#[test]
fn test_attack_spam_spawns_single_effect() {
    let mut app = create_combat_app(SimulationConfig::default());
    let player = spawn_player(app.world_mut(), Vec2::new(1.0, 1.0));

    // 30 тиков = 0.5s < attack_cooldown (1.0s)
    for _ in 0..30 {
        app.world_mut().send_event(ActorCommand::Attack { entity: player });
        app.update();
    }

    let effects = collected::<EffectSpawned>(&app);
    assert_eq!(effects.len(), 1, "attack spam must spawn exactly one effect");

    // Facing по умолчанию South, меч: 18px вниз
    let effect = &effects[0];
    assert_eq!(effect.owner, player);
    assert_eq!(effect.kind, EffectKind::SwordSwing);
    assert!((effect.position - Vec2::new(1.0, 0.82)).length() < 1e-5);
    assert_eq!(effect.rotation_degrees, 180.0);

    let state = app.world().get::<ActorCombatState>(player).expect("player alive");
    assert!(state.is_attacking());
}

#[test]
fn test_attack_available_again_after_cooldown() {
    let mut app = create_combat_app(SimulationConfig::default());
    let player = spawn_player(app.world_mut(), Vec2::ZERO);

    app.world_mut().send_event(ActorCommand::Attack { entity: player });
    app.update();

    // Чуть больше секунды
    for _ in 0..65 {
        app.update();
    }

    app.world_mut().send_event(ActorCommand::ChangeWeapon { entity: player });
    app.world_mut().send_event(ActorCommand::Attack { entity: player });
    app.update();

    let kinds: Vec<EffectKind> = collected::<EffectSpawned>(&app)
        .into_iter()
        .map(|effect| effect.kind)
        .collect();
    assert_eq!(kinds, vec![EffectKind::SwordSwing, EffectKind::Arrow]);
}

#[test]
fn test_enemy_contact_kills_player_once_then_despawns() {
    let mut app = create_combat_app(SimulationConfig::default());
    let player = spawn_player(app.world_mut(), Vec2::ZERO);
    let slime = spawn_slime(app.world_mut(), Vec2::new(0.1, 0.0));

    // starting_health 3, hit stun 1s → третий удар около 2s
    for _ in 0..150 {
        app.world_mut().send_event(EnemyContact {
            player,
            enemy: slime,
        });
        app.update();
    }

    let state = app.world().get::<ActorCombatState>(player).expect("grace period not over yet");
    assert!(state.is_dead());
    assert_eq!(state.health(), 0);

    // Контакт продолжается, но смерть не повторяется; затем деспавн
    for _ in 0..150 {
        app.world_mut().send_event(EnemyContact {
            player,
            enemy: slime,
        });
        app.update();
    }

    let deaths = collected::<ActorDied>(&app);
    assert_eq!(deaths.len(), 1);
    assert_eq!(deaths[0].entity, player);
    assert!(deaths[0].was_player);
    assert!(app.world().get_entity(player).is_err(), "dead player must be despawned");

    let hits = collected::<AudioCuePlayed>(&app)
        .into_iter()
        .filter(|played| played.cue == AudioCue::PlayerHit)
        .count();
    assert_eq!(hits, 3);
}

#[test]
fn test_defending_player_takes_no_damage() {
    let mut app = create_combat_app(SimulationConfig::default());
    let player = spawn_player(app.world_mut(), Vec2::ZERO);

    app.world_mut().send_event(ActorCommand::Defend { entity: player });
    app.update();

    for _ in 0..10 {
        app.world_mut().send_event(DamageIntent {
            target: player,
            amount: 1,
            source: None,
        });
        app.update();
    }

    let state = app.world().get::<ActorCombatState>(player).expect("player alive");
    assert!(state.is_defending());
    assert_eq!(state.health(), 3);
}

#[test]
fn test_duplicate_player_despawned() {
    let mut app = create_combat_app(SimulationConfig::default());
    let first = spawn_player(app.world_mut(), Vec2::ZERO);
    app.update();

    let second = spawn_player(app.world_mut(), Vec2::new(3.0, 0.0));
    app.update();
    app.update();

    assert!(app.world().get_entity(first).is_ok());
    assert!(app.world().get_entity(second).is_err());
    assert_eq!(app.world().resource::<PlayerSession>().player(), Some(first));
}

#[test]
fn test_door_and_coin_triggers() {
    let mut app = create_combat_app(SimulationConfig::default());
    let player = spawn_player(app.world_mut(), Vec2::ZERO);
    let coin = app.world_mut().spawn((Pickable, Transform::default())).id();

    app.world_mut().send_event(TriggerEntered {
        entity: player,
        zone: TriggerZone::Pickup { item: coin },
    });
    app.world_mut().send_event(TriggerEntered {
        entity: player,
        zone: TriggerZone::Door {
            target_scene: "Forest".to_string(),
            arrival: Direction::West,
        },
    });
    app.update();

    assert_eq!(app.world().get::<Wallet>(player), Some(&Wallet { coins: 1 }));
    assert!(app.world().get_entity(coin).is_err());
    assert_eq!(collected::<CoinCollected>(&app).len(), 1);

    let transitions = collected::<SceneTransitionRequested>(&app);
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].target_scene, "Forest");
    assert_eq!(transitions[0].arrival, Direction::West);
}

#[test]
fn test_player_moves_and_faces_input() {
    let config = SimulationConfig {
        move_speed: 6.0,
        ..SimulationConfig::default()
    };
    let mut app = create_combat_app(config);
    let player = spawn_player(app.world_mut(), Vec2::ZERO);

    // 60 тиков вправо при 6 units/s → ~6 units
    for _ in 0..60 {
        app.world_mut().send_event(ActorCommand::Move {
            entity: player,
            axis: Vec2::X,
        });
        app.update();
    }

    let transform = app.world().get::<Transform>(player).expect("player alive");
    assert!((transform.translation.x - 6.0).abs() < 0.01);
    assert!(transform.translation.y.abs() < 1e-6);

    let state = app.world().get::<ActorCombatState>(player).expect("player alive");
    assert_eq!(state.facing(), Direction::East);
}
