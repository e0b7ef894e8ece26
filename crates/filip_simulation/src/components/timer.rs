//! Cooldown таймеры (decrement-and-reset над delta time)
//!
//! Default захватывается при создании - это reset target. После expiry
//! таймер возвращается ровно к default, отрицательный остаток не
//! переносится (без drift).

use bevy::prelude::*;

/// Countdown с захваченным default
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Cooldown {
    remaining: f32,
    default: f32,
}

impl Cooldown {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration,
            default: duration,
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn default_duration(&self) -> f32 {
        self.default
    }

    /// Прервать отсчёт (следующий цикл начнётся с полного default)
    pub fn reset(&mut self) {
        self.remaining = self.default;
    }

    /// Вычесть `delta`; true если истёк (remaining <= 0), тогда reset к default
    pub fn tick(&mut self, delta: f32) -> bool {
        self.remaining -= delta;
        if self.remaining <= 0.0 {
            self.remaining = self.default;
            true
        } else {
            false
        }
    }
}

/// Boolean флаг, который снимается только истечением своего cooldown
///
/// Повторный `start()` на активном флаге таймер не перезапускает.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TimedFlag {
    active: bool,
    cooldown: Cooldown,
}

impl TimedFlag {
    pub fn new(duration: f32) -> Self {
        Self {
            active: false,
            cooldown: Cooldown::new(duration),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> f32 {
        self.cooldown.remaining()
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Тикает только активный флаг; true если флаг снялся на этом тике
    pub fn advance(&mut self, delta: f32) -> bool {
        if self.active && self.cooldown.tick(delta) {
            self.active = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_resets_exactly_to_default() {
        let mut cooldown = Cooldown::new(1.0);

        assert!(!cooldown.tick(0.4));
        assert!(!cooldown.tick(0.4));
        assert!(cooldown.tick(0.4));
        assert_eq!(cooldown.remaining(), 1.0);
    }

    #[test]
    fn test_cooldown_expires_at_exact_zero() {
        let mut cooldown = Cooldown::new(0.5);
        assert!(!cooldown.tick(0.25));
        assert!(cooldown.tick(0.25));
    }

    #[test]
    fn test_inactive_flag_does_not_tick() {
        let mut flag = TimedFlag::new(1.0);

        assert!(!flag.advance(5.0));
        assert_eq!(flag.remaining(), 1.0);
        assert!(!flag.is_active());
    }

    #[test]
    fn test_restart_does_not_extend_running_flag() {
        let mut flag = TimedFlag::new(1.0);
        flag.start();
        flag.advance(0.6);

        flag.start();
        assert!(flag.advance(0.5));
        assert!(!flag.is_active());
    }
}
