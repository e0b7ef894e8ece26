//! ECS bridge: collaborator traits → Bevy events
//!
//! `ActorSignals` - SystemParam со всеми writer'ами; `EventHost` —
//! view на него для одного актора, реализующий `ActorHost`.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use crate::combat::events::{ActorDied, AnimationSignalled, AudioCuePlayed, DespawnAfter, EffectSpawned};
use crate::host::{
    AnimationSignal, AnimationSink, AudioCue, AudioSink, EffectSpawn, EffectSpawner, LifecycleSink,
    MovementService,
};
use crate::movement::MoveRequested;

#[derive(SystemParam)]
pub struct ActorSignals<'w, 's> {
    commands: Commands<'w, 's>,
    time: Res<'w, Time>,
    moves: EventWriter<'w, MoveRequested>,
    effects: EventWriter<'w, EffectSpawned>,
    animation: EventWriter<'w, AnimationSignalled>,
    audio: EventWriter<'w, AudioCuePlayed>,
    deaths: EventWriter<'w, ActorDied>,
}

impl<'w, 's> ActorSignals<'w, 's> {
    /// Host для актора `entity`, стоящего в `origin`
    pub fn host(&mut self, entity: Entity, origin: Vec2, is_player: bool) -> EventHost<'_, 'w, 's> {
        EventHost {
            entity,
            origin,
            is_player,
            signals: self,
        }
    }
}

pub struct EventHost<'a, 'w, 's> {
    entity: Entity,
    origin: Vec2,
    is_player: bool,
    signals: &'a mut ActorSignals<'w, 's>,
}

impl MovementService for EventHost<'_, '_, '_> {
    fn request_move(&mut self, axis: Vec2) {
        self.signals.moves.write(MoveRequested {
            entity: self.entity,
            axis,
        });
    }
}

impl EffectSpawner for EventHost<'_, '_, '_> {
    fn spawn_effect(&mut self, spawn: EffectSpawn) {
        self.signals.effects.write(EffectSpawned {
            owner: self.entity,
            kind: spawn.kind,
            position: self.origin + spawn.offset,
            rotation_degrees: spawn.rotation_degrees,
        });
    }
}

impl AnimationSink for EventHost<'_, '_, '_> {
    fn signal(&mut self, signal: AnimationSignal) {
        self.signals.animation.write(AnimationSignalled {
            entity: self.entity,
            signal,
        });
    }
}

impl AudioSink for EventHost<'_, '_, '_> {
    fn play(&mut self, cue: AudioCue) {
        self.signals.audio.write(AudioCuePlayed {
            entity: self.entity,
            cue,
        });
    }
}

impl LifecycleSink for EventHost<'_, '_, '_> {
    fn actor_died(&mut self) {
        crate::log_info(&format!(
            "💀 Actor {:?} died (player: {})",
            self.entity, self.is_player
        ));
        self.signals.deaths.write(ActorDied {
            entity: self.entity,
            was_player: self.is_player,
        });
    }

    fn schedule_removal(&mut self, delay: f32) {
        let despawn_time = self.signals.time.elapsed_secs() + delay;
        crate::log(&format!(
            "⚰️ Actor {:?} scheduled for removal at t={:.2}s",
            self.entity, despawn_time
        ));
        self.signals
            .commands
            .entity(self.entity)
            .insert(DespawnAfter { despawn_time });
    }
}
