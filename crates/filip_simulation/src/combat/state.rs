//! ActorCombatState - боевое состояние актора (игрок, мобы)
//!
//! State machine из timed флагов:
//! - attacking: блокирует новую атаку, снимается attack cooldown'ом
//! - hit_stun: неуязвимость после попадания, снимается hit cooldown'ом
//! - movement lock: держится атакой и/или попаданием (см. `MovementLock`)
//! - defending: ручной toggle без таймера
//!
//! Заблокированные запросы отбрасываются (reject, don't queue).
//! Единственный способ снять timed флаг - `advance()`.

use bevy::prelude::*;
use crate::combat::weapon::{WeaponKind, WEAPON_COUNT};
use crate::components::{Direction, TimedFlag};
use crate::config::CombatTuning;
use crate::host::{ActorHost, AnimationSignal, AnimationSink, AudioCue, MovementService};

/// Read-only статус актора для AI
pub trait CombatStatus {
    fn is_hit_stunned(&self) -> bool;
    fn is_dead(&self) -> bool;
}

/// Movement lock с отдельным hold'ом на каждый источник
///
/// Атака и попадание держат lock независимо, каждый своим таймером:
/// attack hold = movement_lock_cooldown, hit hold = hit_stun_cooldown
/// (оглушённый актор не двигается весь hit stun). Движение
/// разблокируется только когда истекли оба hold'а.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct MovementLock {
    from_attack: TimedFlag,
    from_hit: TimedFlag,
}

impl MovementLock {
    pub fn new(attack_duration: f32, hit_duration: f32) -> Self {
        Self {
            from_attack: TimedFlag::new(attack_duration),
            from_hit: TimedFlag::new(hit_duration),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.from_attack.is_active() || self.from_hit.is_active()
    }

    pub fn hold_for_attack(&mut self) {
        self.from_attack.start();
    }

    pub fn hold_for_hit(&mut self) {
        self.from_hit.start();
    }

    pub fn advance(&mut self, delta: f32) {
        self.from_attack.advance(delta);
        self.from_hit.advance(delta);
    }
}

/// Боевое состояние актора
///
/// Инвариант: 0 ≤ health ≤ max_health, equipped_weapon < WEAPON_COUNT.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ActorCombatState {
    health: i32,
    max_health: i32,
    equipped_weapon: usize,
    facing: Direction,

    attacking: TimedFlag,
    hit_stun: TimedFlag,
    movement_lock: MovementLock,
    defending: bool,

    dead: bool,
    removal_scheduled: bool,

    /// Designer-tuned значения, захваченные при спавне
    #[reflect(ignore)]
    tuning: CombatTuning,
}

impl Default for ActorCombatState {
    fn default() -> Self {
        Self::new(CombatTuning::default())
    }
}

impl ActorCombatState {
    /// Актор спавнится живым: starting_health зажимается в 1..=max_health
    pub fn new(tuning: CombatTuning) -> Self {
        let max_health = tuning.max_health.max(1);
        Self {
            health: tuning.starting_health.clamp(1, max_health),
            max_health,
            equipped_weapon: 0,
            facing: Direction::default(),
            attacking: TimedFlag::new(tuning.attack_cooldown),
            hit_stun: TimedFlag::new(tuning.hit_stun_cooldown),
            movement_lock: MovementLock::new(tuning.movement_lock_cooldown, tuning.hit_stun_cooldown),
            defending: false,
            dead: false,
            removal_scheduled: false,
            tuning,
        }
    }

    /// Моб/актор с полным здоровьем
    pub fn with_full_health(tuning: CombatTuning) -> Self {
        let mut state = Self::new(tuning);
        state.health = state.max_health;
        state
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn equipped_weapon(&self) -> usize {
        self.equipped_weapon
    }

    pub fn weapon(&self) -> WeaponKind {
        WeaponKind::from_index(self.equipped_weapon)
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking.is_active()
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    pub fn is_movement_locked(&self) -> bool {
        self.movement_lock.is_locked()
    }

    pub fn can_move(&self) -> bool {
        !self.movement_lock.is_locked()
    }

    pub fn attack_cooldown_remaining(&self) -> f32 {
        self.attacking.remaining()
    }

    pub fn tuning(&self) -> &CombatTuning {
        &self.tuning
    }

    /// Движение по оси + facing + walking анимация
    ///
    /// Facing проверяется по порядку x>0, x<0, y>0, y<0 и каждый match
    /// перезаписывает предыдущий: на диагонали побеждает вертикаль.
    pub fn request_move<H>(&mut self, axis: Vec2, host: &mut H)
    where
        H: MovementService + AnimationSink,
    {
        let mut faced = None;
        if axis.x > 0.0 {
            faced = Some(Direction::East);
        }
        if axis.x < 0.0 {
            faced = Some(Direction::West);
        }
        if axis.y > 0.0 {
            faced = Some(Direction::North);
        }
        if axis.y < 0.0 {
            faced = Some(Direction::South);
        }

        let Some(direction) = faced else {
            // Нулевой ввод - только idle, facing сохраняется
            host.signal(AnimationSignal::Walking(false));
            return;
        };

        self.facing = direction;
        host.signal(AnimationSignal::Walking(true));
        host.signal(AnimationSignal::Direction(direction));

        if self.tuning.movement_enabled && self.can_move() && !self.defending {
            host.request_move(axis);
        }
    }

    /// Атака экипированным оружием в сторону facing
    ///
    /// Возвращает false если атака отклонена.
    pub fn attack<H: ActorHost>(&mut self, host: &mut H) -> bool {
        if self.attacking.is_active() || self.movement_lock.is_locked() || self.defending {
            return false;
        }

        self.attacking.start();
        self.movement_lock.hold_for_attack();

        let weapon = self.weapon();
        host.spawn_effect(weapon.spawn_transform(self.facing, &self.tuning));
        host.play(weapon.cue());
        host.signal(AnimationSignal::AttackTrigger);
        true
    }

    pub fn defend<H: AnimationSink>(&mut self, host: &mut H) {
        if !self.defending && self.can_move() {
            self.defending = true;
            host.signal(AnimationSignal::Defending(true));
        }
    }

    pub fn stop_defend<H: AnimationSink>(&mut self, host: &mut H) {
        if self.defending {
            self.defending = false;
            host.signal(AnimationSignal::Defending(false));
        }
    }

    pub fn change_weapon<H: AnimationSink>(&mut self, host: &mut H) {
        self.equipped_weapon = (self.equipped_weapon + 1) % WEAPON_COUNT;
        host.signal(AnimationSignal::WeaponIndex(self.equipped_weapon));
    }

    /// Урон; возвращает true если урон применён
    ///
    /// Отклоняется во время hit stun, защиты и после смерти.
    /// Неположительный урон игнорируется.
    pub fn apply_damage<H: ActorHost>(&mut self, amount: i32, host: &mut H) -> bool {
        if self.dead || self.hit_stun.is_active() || self.defending || amount <= 0 {
            return false;
        }

        self.health = (self.health - amount).max(0);
        self.hit_stun.start();
        self.movement_lock.hold_for_hit();

        host.signal(AnimationSignal::HitTrigger);
        host.play(AudioCue::PlayerHit);

        if self.health <= 0 {
            self.dead = true;
            host.actor_died();
        }
        true
    }

    /// Тик таймеров; вызывается раз в кадр ДО обработки новых команд
    pub fn advance<H: ActorHost>(&mut self, delta: f32, host: &mut H) {
        if self.dead && !self.removal_scheduled {
            self.removal_scheduled = true;
            host.schedule_removal(self.tuning.death_grace);
        }

        self.attacking.advance(delta);
        self.hit_stun.advance(delta);
        self.movement_lock.advance(delta);
    }
}

impl CombatStatus for ActorCombatState {
    fn is_hit_stunned(&self) -> bool {
        self.hit_stun.is_active()
    }

    fn is_dead(&self) -> bool {
        self.dead
    }
}
