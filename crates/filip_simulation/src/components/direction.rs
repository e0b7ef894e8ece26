//! Кардинальные направления (facing, направление прыжка слайма)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Направление взгляда / движения
///
/// Порядок вариантов совпадает с integer параметром `direction` аниматора:
/// North = 0, East = 1, South = 2, West = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    #[default]
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Индекс для аниматора (0..4)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unknown индекс → North
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Direction::North)
    }

    /// Единичный вектор движения
    pub fn unit_vector(self) -> Vec2 {
        match self {
            Direction::North => Vec2::new(0.0, 1.0),
            Direction::East => Vec2::new(1.0, 0.0),
            Direction::South => Vec2::new(0.0, -1.0),
            Direction::West => Vec2::new(-1.0, 0.0),
        }
    }

    /// Поворот спрайта эффекта (градусы, вокруг +Z)
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Direction::North => 0.0,
            Direction::East => -90.0,
            Direction::South => 180.0,
            Direction::West => 90.0,
        }
    }
}
