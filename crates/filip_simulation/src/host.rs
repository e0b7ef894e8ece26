//! Collaborator интерфейсы между state объектами и хостом
//!
//! State объекты (`ActorCombatState`, `WanderAi`) не знают про движок:
//! всё, что выходит наружу (движение, спавн эффектов, параметры
//! аниматора, звук, смерть), идёт через эти traits.
//!
//! Реализации:
//! - `combat::bridge::EventHost` - пишет Bevy events (ECS слой)
//! - `RecordingHost` - складывает всё в Vec'и (тесты, headless tooling)

use bevy::prelude::*;
use crate::components::Direction;

/// Тип эффекта/снаряда, который спавнит атака
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum EffectKind {
    SwordSwing,
    Arrow,
    MagicBall,
}

/// Запрос спавна эффекта относительно актора
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSpawn {
    pub kind: EffectKind,
    /// Смещение от позиции актора (world units)
    pub offset: Vec2,
    /// Поворот вокруг +Z (градусы)
    pub rotation_degrees: f32,
}

/// Параметры аниматора (write-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationSignal {
    Walking(bool),
    Direction(Direction),
    AttackTrigger,
    Defending(bool),
    HitTrigger,
    WeaponIndex(usize),
    /// Прыжок слайма (движение wander AI)
    Jumping(bool),
}

/// Звуковые cue (fire-and-forget)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    SwordSwing,
    ArrowShot,
    MagicCast,
    PlayerHit,
    CoinPickup,
}

pub trait MovementService {
    /// Запрос смещения на этом тике (axis не нормализуется)
    fn request_move(&mut self, axis: Vec2);
}

pub trait EffectSpawner {
    fn spawn_effect(&mut self, spawn: EffectSpawn);
}

pub trait AnimationSink {
    fn signal(&mut self, signal: AnimationSignal);
}

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

pub trait LifecycleSink {
    /// Актор умер (вызывается ровно один раз за жизнь актора)
    fn actor_died(&mut self);
    /// Удалить актора из мира через `delay` секунд
    fn schedule_removal(&mut self, delay: f32);
}

/// Полный набор collaborator'ов актора
pub trait ActorHost: MovementService + EffectSpawner + AnimationSink + AudioSink + LifecycleSink {}

impl<T> ActorHost for T where T: MovementService + EffectSpawner + AnimationSink + AudioSink + LifecycleSink {}

/// In-memory host: записывает все запросы по порядку
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub moves: Vec<Vec2>,
    pub effects: Vec<EffectSpawn>,
    pub animation: Vec<AnimationSignal>,
    pub audio: Vec<AudioCue>,
    pub deaths: usize,
    pub removals: Vec<f32>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn last_animation(&self) -> Option<AnimationSignal> {
        self.animation.last().copied()
    }
}

impl MovementService for RecordingHost {
    fn request_move(&mut self, axis: Vec2) {
        self.moves.push(axis);
    }
}

impl EffectSpawner for RecordingHost {
    fn spawn_effect(&mut self, spawn: EffectSpawn) {
        self.effects.push(spawn);
    }
}

impl AnimationSink for RecordingHost {
    fn signal(&mut self, signal: AnimationSignal) {
        self.animation.push(signal);
    }
}

impl AudioSink for RecordingHost {
    fn play(&mut self, cue: AudioCue) {
        self.audio.push(cue);
    }
}

impl LifecycleSink for RecordingHost {
    fn actor_died(&mut self) {
        self.deaths += 1;
    }

    fn schedule_removal(&mut self, delay: f32) {
        self.removals.push(delay);
    }
}
