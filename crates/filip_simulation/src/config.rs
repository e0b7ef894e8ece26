//! Tuning конфиги симуляции (designer-tuned значения)
//!
//! Все поля имеют defaults (`#[serde(default)]`), JSON может задавать
//! только то, что отличается. Cooldown'ы отсюда захватываются state
//! объектами при спавне и служат reset target'ами таймеров.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Ошибки загрузки конфига
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Параметры боевого состояния актора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub max_health: i32,
    pub starting_health: i32,

    /// Cooldown между атаками (секунды)
    pub attack_cooldown: f32,
    /// Неуязвимость после попадания (секунды)
    pub hit_stun_cooldown: f32,
    /// Сколько держится movement lock от одного источника (секунды)
    pub movement_lock_cooldown: f32,

    /// Дистанции спавна эффектов (пиксели)
    pub sword_range_px: f32,
    pub bow_range_px: f32,
    pub magic_range_px: f32,
    /// Вертикальный сдвиг эффекта при атаке вбок (пиксели)
    pub side_drop_px: f32,
    pub pixels_per_unit: f32,

    /// Задержка удаления мёртвого актора (секунды)
    pub death_grace: f32,
    /// Урон от касания врага за тик
    pub contact_damage: i32,

    /// Debug switch: false - актор не двигается, анимации и facing работают
    pub movement_enabled: bool,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_health: 5,
            starting_health: 3,
            attack_cooldown: 1.0,
            hit_stun_cooldown: 1.0,
            movement_lock_cooldown: 0.1,
            sword_range_px: 18.0,
            bow_range_px: 10.0,
            magic_range_px: 24.0,
            side_drop_px: -6.0,
            pixels_per_unit: 100.0,
            death_grace: 1.0,
            contact_damage: 1,
            movement_enabled: true,
        }
    }
}

/// Параметры wander AI (слаймы)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderTuning {
    /// Период принятия решения Wait/Move (секунды)
    pub decision_interval: f32,
    /// Длительность движения после решения Move (секунды)
    pub move_duration: f32,
}

impl Default for WanderTuning {
    fn default() -> Self {
        Self {
            decision_interval: 3.0,
            move_duration: 1.0,
        }
    }
}

/// Корневой конфиг (Resource)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    pub tick_hz: f64,
    /// Скорость kinematic движения (units/sec)
    pub move_speed: f32,
    pub combat: CombatTuning,
    pub wander: WanderTuning,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_hz: 60.0,
            move_speed: 1.0,
            combat: CombatTuning::default(),
            wander: WanderTuning::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let combat = &self.combat;

        positive("tick_hz", self.tick_hz as f32)?;
        positive("combat.attack_cooldown", combat.attack_cooldown)?;
        positive("combat.hit_stun_cooldown", combat.hit_stun_cooldown)?;
        positive("combat.movement_lock_cooldown", combat.movement_lock_cooldown)?;
        positive("combat.pixels_per_unit", combat.pixels_per_unit)?;
        positive("wander.decision_interval", self.wander.decision_interval)?;
        positive("wander.move_duration", self.wander.move_duration)?;

        if combat.max_health <= 0 {
            return Err(ConfigError::Invalid {
                field: "combat.max_health",
                reason: format!("must be positive, got {}", combat.max_health),
            });
        }
        if combat.starting_health <= 0 || combat.starting_health > combat.max_health {
            return Err(ConfigError::Invalid {
                field: "combat.starting_health",
                reason: format!(
                    "must be in 1..={}, got {}",
                    combat.max_health, combat.starting_health
                ),
            });
        }
        if combat.death_grace < 0.0 {
            return Err(ConfigError::Invalid {
                field: "combat.death_grace",
                reason: format!("must not be negative, got {}", combat.death_grace),
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {}", value),
        })
    }
}
