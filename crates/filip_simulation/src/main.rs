//! Headless симуляция Filip
//!
//! Игрок + несколько слаймов, без рендера. Первый аргумент - путь к
//! JSON конфигу (опционально).

use bevy::prelude::*;
use filip_simulation::{
    create_headless_app, log_error, log_info, set_log_level, spawn_player, spawn_slime, ActorCombatState,
    LogLevel, Mob, SimulationConfig, SimulationPlugin,
};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match SimulationConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(err) => {
                filip_simulation::init_logger();
                log_error(&format!("Failed to load config '{}': {}", path, err));
                std::process::exit(1);
            }
        },
        None => SimulationConfig::default(),
    };

    let seed = config.seed;
    let mut app = create_headless_app(config);
    // Debug решения AI на 600 тиках - слишком шумно для stdout
    set_log_level(LogLevel::Info);
    app.add_plugins(SimulationPlugin);
    log_info(&format!("Starting Filip headless simulation (seed: {})", seed));

    let player = spawn_player(app.world_mut(), Vec2::ZERO);
    for i in 0..4 {
        let angle = i as f32 * std::f32::consts::FRAC_PI_2;
        spawn_slime(app.world_mut(), Vec2::from_angle(angle) * 2.0);
    }

    // 600 тиков = 10 секунд при 60Hz
    for tick in 0..600 {
        app.update();

        if tick % 120 == 0 {
            let mut mobs = app.world_mut().query_filtered::<&Transform, With<Mob>>();
            let positions: Vec<Vec2> = mobs
                .iter(app.world())
                .map(|transform| transform.translation.truncate())
                .collect();
            log_info(&format!("Tick {}: slimes at {:?}", tick, positions));
        }
    }

    let health = app
        .world()
        .get::<ActorCombatState>(player)
        .map(|state| state.health());
    log_info(&format!("Simulation complete! Player health: {:?}", health));
}
