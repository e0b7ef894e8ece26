//! Movement domain - запросы смещения и kinematic интеграция
//!
//! Хост-движок владеет физикой; в headless режиме `integrate_movement`
//! просто сдвигает Transform, чтобы симуляция была самодостаточной.

use bevy::prelude::*;
use crate::components::MovementSpeed;
use crate::SimulationSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MoveRequested>()
            .register_type::<MovementSpeed>()
            .add_systems(FixedUpdate, integrate_movement.in_set(SimulationSet::Movement));
    }
}

/// Event: актор запросил смещение на этом тике
///
/// Генерируется:
/// - ActorCombatState::request_move (игрок)
/// - WanderAi (слаймы, каждый тик фазы Move)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MoveRequested {
    pub entity: Entity,
    pub axis: Vec2,
}

/// Система: MoveRequested → Transform
///
/// Ось нормализуется (диагональ не быстрее прямой), скорость из
/// MovementSpeed. Entity без MovementSpeed пропускаются - ими двигает хост.
pub fn integrate_movement(
    mut requests: EventReader<MoveRequested>,
    mut movers: Query<(&MovementSpeed, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for request in requests.read() {
        let Ok((speed, mut transform)) = movers.get_mut(request.entity) else {
            continue;
        };

        let step = request.axis.normalize_or_zero() * speed.speed * delta;
        transform.translation += step.extend(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_step_is_normalized() {
        let step = Vec2::new(1.0, 1.0).normalize_or_zero() * 2.0;
        assert!((step.length() - 2.0).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    }
}
