//! World module - сессия игрока и trigger zones
//!
//! - PlayerSession: handle единственного живого игрока
//! - Triggers: двери (переход сцены), монеты (Wallet)

use bevy::prelude::*;
use crate::SimulationSet;

pub mod session;
pub mod triggers;

#[cfg(test)]
mod triggers_tests;

pub use session::{register_player, PlayerSession};
pub use triggers::*;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerSession>()
            .add_event::<TriggerEntered>()
            .add_event::<SceneTransitionRequested>()
            .add_event::<CoinCollected>()
            .add_systems(
                FixedUpdate,
                (register_player, process_trigger_entries)
                    .chain()
                    .in_set(SimulationSet::World),
            );
    }
}
