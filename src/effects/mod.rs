//! Effects domain: the sound and object service.
//!
//! Gameplay code writes [`SoundCommand`] and [`ObjectCommand`] messages and
//! never hears back. Unknown targets, prefabs or capabilities are no-ops.

mod audio;
mod events;
mod objects;

pub use audio::{CueEmitter, MusicChannels};
pub use events::{CueCommand, ObjectAction, ObjectCommand, SoundCommand};
pub use objects::{Capabilities, Lifetime, PrefabDef, PrefabLibrary};
pub(crate) use objects::{apply_object_commands, expire_lifetimes};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ContentSettings;
use crate::core::{GameState, TickSet};
use crate::effects::audio::{play_sound_commands, reap_failed_players, resume_bgm};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MusicChannels>()
            .init_resource::<PrefabLibrary>()
            .add_message::<SoundCommand>()
            .add_message::<ObjectCommand>()
            .add_systems(OnEnter(GameState::Run), start_stage_music)
            .add_systems(
                Update,
                (
                    play_sound_commands,
                    reap_failed_players,
                    resume_bgm,
                    apply_object_commands,
                    expire_lifetimes,
                )
                    .chain()
                    .in_set(TickSet::Effects),
            );
    }
}

fn start_stage_music(settings: Res<ContentSettings>, mut sounds: MessageWriter<SoundCommand>) {
    if let Some(clip) = &settings.moveset.audio.stage_bgm {
        sounds.write(SoundCommand::PlayBgm {
            clip: clip.clone(),
            looping: true,
        });
    }
}
