//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: маркеры (Player, Mob, Pickable), Wallet, MovementSpeed
//! - direction: кардинальные направления + таблицы поворотов/векторов
//! - timer: Cooldown / TimedFlag (decrement-and-reset)

pub mod actor;
pub mod direction;
pub mod timer;

pub use actor::*;
pub use direction::*;
pub use timer::*;
