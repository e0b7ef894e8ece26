//! Оружие игрока: sword / bow / magic
//!
//! Каждое оружие = (эффект, звук, дистанция спавна). Позиция эффекта
//! считается в пикселях от facing и переводится в world units через
//! `pixels_per_unit`.

use bevy::prelude::*;
use crate::components::Direction;
use crate::config::CombatTuning;
use crate::host::{AudioCue, EffectKind, EffectSpawn};

/// Количество оружий в цикле `change_weapon`
pub const WEAPON_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum WeaponKind {
    Sword,
    Bow,
    Magic,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; WEAPON_COUNT] = [WeaponKind::Sword, WeaponKind::Bow, WeaponKind::Magic];

    /// Индекс берётся по модулю - вне диапазона не бывает
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % WEAPON_COUNT]
    }

    pub fn effect(self) -> EffectKind {
        match self {
            WeaponKind::Sword => EffectKind::SwordSwing,
            WeaponKind::Bow => EffectKind::Arrow,
            WeaponKind::Magic => EffectKind::MagicBall,
        }
    }

    pub fn cue(self) -> AudioCue {
        match self {
            WeaponKind::Sword => AudioCue::SwordSwing,
            WeaponKind::Bow => AudioCue::ArrowShot,
            WeaponKind::Magic => AudioCue::MagicCast,
        }
    }

    /// Дистанция спавна эффекта (пиксели)
    pub fn range_px(self, tuning: &CombatTuning) -> f32 {
        match self {
            WeaponKind::Sword => tuning.sword_range_px,
            WeaponKind::Bow => tuning.bow_range_px,
            WeaponKind::Magic => tuning.magic_range_px,
        }
    }

    /// Transform эффекта для атаки в направлении `facing`
    pub fn spawn_transform(self, facing: Direction, tuning: &CombatTuning) -> EffectSpawn {
        let range = self.range_px(tuning);

        // Боковые атаки опущены на side_drop (рука персонажа ниже центра спрайта)
        let offset_px = match facing {
            Direction::North => Vec2::new(0.0, range),
            Direction::East => Vec2::new(range, tuning.side_drop_px),
            Direction::South => Vec2::new(0.0, -range),
            Direction::West => Vec2::new(-range, tuning.side_drop_px),
        };

        EffectSpawn {
            kind: self.effect(),
            offset: offset_px / tuning.pixels_per_unit,
            rotation_degrees: facing.rotation_degrees(),
        }
    }
}
