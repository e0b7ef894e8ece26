//! Trigger zones: двери между сценами и подбираемые монеты
//!
//! Коллизии с зонами детектит хост и шлёт `TriggerEntered`. Сами сцены
//! не загружаются здесь - только `SceneTransitionRequested` наружу.

use bevy::prelude::*;
use crate::combat::AudioCuePlayed;
use crate::components::{Direction, Pickable, Player, Wallet};
use crate::host::AudioCue;

/// Что находится в зоне, в которую вошёл актор
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerZone {
    /// Дверь: переход в `target_scene`, игрок появляется лицом в `arrival`
    Door { target_scene: String, arrival: Direction },
    /// Монета-предмет `item`
    Pickup { item: Entity },
}

/// Event: актор вошёл в trigger zone (от хоста)
#[derive(Event, Debug, Clone)]
pub struct TriggerEntered {
    pub entity: Entity,
    pub zone: TriggerZone,
}

/// Event: игрок вошёл в дверь
///
/// Хост выгружает текущую сцену и грузит `target_scene`.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SceneTransitionRequested {
    pub player: Entity,
    pub target_scene: String,
    pub arrival: Direction,
}

/// Event: игрок подобрал монету
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CoinCollected {
    pub player: Entity,
    pub item: Entity,
    pub total: u32,
}

/// Система: TriggerEntered → переходы / подбор монет
///
/// Реагируют только игроки; мобы в зонах игнорируются. Подбирается только
/// entity с `Pickable`; монета, уже подобранная на этом тике, второй раз
/// не считается.
pub fn process_trigger_entries(
    mut commands: Commands,
    mut entries: EventReader<TriggerEntered>,
    mut players: Query<&mut Wallet, With<Player>>,
    items: Query<(), With<Pickable>>,
    mut transitions: EventWriter<SceneTransitionRequested>,
    mut coins: EventWriter<CoinCollected>,
    mut audio: EventWriter<AudioCuePlayed>,
) {
    let mut collected: Vec<Entity> = Vec::new();

    for entry in entries.read() {
        let Ok(mut wallet) = players.get_mut(entry.entity) else {
            continue;
        };

        match &entry.zone {
            TriggerZone::Door {
                target_scene,
                arrival,
            } => {
                crate::log_info(&format!(
                    "🚪 Player {:?} → scene '{}' (arrival: {:?})",
                    entry.entity, target_scene, arrival
                ));
                transitions.write(SceneTransitionRequested {
                    player: entry.entity,
                    target_scene: target_scene.clone(),
                    arrival: *arrival,
                });
            }
            TriggerZone::Pickup { item } => {
                if collected.contains(item) {
                    continue;
                }
                if items.get(*item).is_err() {
                    crate::log_warning(&format!(
                        "Pickup zone points at non-pickable {:?}, ignored",
                        item
                    ));
                    continue;
                }
                collected.push(*item);

                wallet.coins += 1;
                commands.entity(*item).despawn();
                audio.write(AudioCuePlayed {
                    entity: entry.entity,
                    cue: AudioCue::CoinPickup,
                });
                coins.write(CoinCollected {
                    player: entry.entity,
                    item: *item,
                    total: wallet.coins,
                });
                crate::log(&format!(
                    "🪙 Player {:?} picked {:?} (coins: {})",
                    entry.entity, item, wallet.coins
                ));
            }
        }
    }
}
