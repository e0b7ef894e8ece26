//! WanderAi - простой AI слайма
//!
//! Каждые `decision_interval` секунд решает: ждать или прыгнуть (50/50).
//! Прыжок = движение `move_duration` секунд в случайную сторону света,
//! потом снова Wait. Оглушённый или мёртвый слайм решений не принимает.

use bevy::prelude::*;
use rand::Rng;
use crate::combat::CombatStatus;
use crate::components::{Cooldown, Direction};
use crate::config::WanderTuning;
use crate::host::{AnimationSignal, AnimationSink, MovementService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum WanderAction {
    #[default]
    Wait,
    Move,
}

#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct WanderAi {
    action: WanderAction,
    move_direction: Direction,
    decision_timer: Cooldown,
    move_timer: Cooldown,
}

impl Default for WanderAi {
    fn default() -> Self {
        Self::new(&WanderTuning::default())
    }
}

impl WanderAi {
    pub fn new(tuning: &WanderTuning) -> Self {
        Self {
            action: WanderAction::Wait,
            move_direction: Direction::North,
            decision_timer: Cooldown::new(tuning.decision_interval),
            move_timer: Cooldown::new(tuning.move_duration),
        }
    }

    pub fn action(&self) -> WanderAction {
        self.action
    }

    pub fn move_direction(&self) -> Direction {
        self.move_direction
    }

    /// Тик AI
    ///
    /// `status` - боевое состояние самого моба (только чтение).
    pub fn advance<S, R, H>(&mut self, delta: f32, status: &S, rng: &mut R, host: &mut H)
    where
        S: CombatStatus + ?Sized,
        R: Rng,
        H: MovementService + AnimationSink,
    {
        if self.decision_timer.tick(delta) {
            if !status.is_hit_stunned() && !status.is_dead() {
                self.decide(rng, host);
            } else {
                // Получили удар - пропускаем ход, ждём следующего цикла
                self.stop_moving(host);
            }
        }

        if self.action == WanderAction::Move {
            if self.move_timer.tick(delta) {
                self.action = WanderAction::Wait;
                host.signal(AnimationSignal::Jumping(false));
            } else {
                host.request_move(self.move_direction.unit_vector());
            }
        }
    }

    /// Move → Wait досрочно: move_timer на полный default, анимация выкл
    fn stop_moving<H: AnimationSink>(&mut self, host: &mut H) {
        if self.action == WanderAction::Move {
            self.move_timer.reset();
            host.signal(AnimationSignal::Jumping(false));
        }
        self.action = WanderAction::Wait;
    }

    fn decide<R, H>(&mut self, rng: &mut R, host: &mut H)
    where
        R: Rng,
        H: AnimationSink,
    {
        if rng.gen_range(0..2) == 0 {
            self.stop_moving(host);
            return;
        }

        host.signal(AnimationSignal::Jumping(true));
        self.action = WanderAction::Move;
        self.move_direction = Direction::from_index(rng.gen_range(0..4));
    }
}
