//! Tests for trigger zones.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::combat::AudioCuePlayed;
    use crate::components::{Direction, Mob, Pickable, Player, Wallet};
    use crate::host::AudioCue;
    use crate::world::triggers::*;

    fn trigger_app() -> App {
        let mut app = App::new();
        app.add_event::<TriggerEntered>()
            .add_event::<SceneTransitionRequested>()
            .add_event::<CoinCollected>()
            .add_event::<AudioCuePlayed>()
            .add_systems(Update, process_trigger_entries);
        app
    }

    fn collected<E: Event + Clone>(app: &App) -> Vec<E> {
        app.world()
            .resource::<Events<E>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    #[test]
    fn test_door_requests_scene_transition() {
        let mut app = trigger_app();
        let player = app.world_mut().spawn((Player, Wallet::default())).id();

        app.world_mut().send_event(TriggerEntered {
            entity: player,
            zone: TriggerZone::Door {
                target_scene: "Dungeon".to_string(),
                arrival: Direction::North,
            },
        });
        app.update();

        let transitions = collected::<SceneTransitionRequested>(&app);
        assert_eq!(
            transitions,
            vec![SceneTransitionRequested {
                player,
                target_scene: "Dungeon".to_string(),
                arrival: Direction::North,
            }]
        );
    }

    #[test]
    fn test_coin_pickup_fills_wallet_and_despawns_item() {
        let mut app = trigger_app();
        let player = app.world_mut().spawn((Player, Wallet::default())).id();
        let coin = app.world_mut().spawn(Pickable).id();

        app.world_mut().send_event(TriggerEntered {
            entity: player,
            zone: TriggerZone::Pickup { item: coin },
        });
        app.update();

        assert_eq!(app.world().get::<Wallet>(player), Some(&Wallet { coins: 1 }));
        assert!(app.world().get_entity(coin).is_err());

        let cues: Vec<AudioCue> = collected::<AudioCuePlayed>(&app)
            .into_iter()
            .map(|played| played.cue)
            .collect();
        assert_eq!(cues, vec![AudioCue::CoinPickup]);

        let coins = collected::<CoinCollected>(&app);
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].total, 1);
    }

    #[test]
    fn test_same_coin_counted_once() {
        let mut app = trigger_app();
        let player = app.world_mut().spawn((Player, Wallet::default())).id();
        let coin = app.world_mut().spawn(Pickable).id();

        for _ in 0..2 {
            app.world_mut().send_event(TriggerEntered {
                entity: player,
                zone: TriggerZone::Pickup { item: coin },
            });
        }
        app.update();

        assert_eq!(app.world().get::<Wallet>(player), Some(&Wallet { coins: 1 }));
    }

    #[test]
    fn test_pickup_ignores_non_pickable_target() {
        let mut app = trigger_app();
        let player = app.world_mut().spawn((Player, Wallet::default())).id();
        let slime = app.world_mut().spawn(Mob).id();

        app.world_mut().send_event(TriggerEntered {
            entity: player,
            zone: TriggerZone::Pickup { item: slime },
        });
        app.update();

        assert!(app.world().get_entity(slime).is_ok());
        assert_eq!(app.world().get::<Wallet>(player), Some(&Wallet { coins: 0 }));
        assert!(collected::<CoinCollected>(&app).is_empty());
        assert!(collected::<AudioCuePlayed>(&app).is_empty());
    }

    #[test]
    fn test_mobs_ignore_triggers() {
        let mut app = trigger_app();
        let mob = app.world_mut().spawn(Mob).id();
        let coin = app.world_mut().spawn(Pickable).id();

        app.world_mut().send_event(TriggerEntered {
            entity: mob,
            zone: TriggerZone::Pickup { item: coin },
        });
        app.world_mut().send_event(TriggerEntered {
            entity: mob,
            zone: TriggerZone::Door {
                target_scene: "Village".to_string(),
                arrival: Direction::South,
            },
        });
        app.update();

        assert!(app.world().get_entity(coin).is_ok());
        assert!(collected::<SceneTransitionRequested>(&app).is_empty());
        assert!(collected::<CoinCollected>(&app).is_empty());
    }
}
