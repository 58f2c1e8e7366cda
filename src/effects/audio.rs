//! Effects domain: playback of sound commands through bevy audio.
//!
//! Every command is best effort. Missing emitters or clips are skipped and
//! nothing is reported back to the sender.

use bevy::ecs::message::MessageReader;
use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::effects::{CueCommand, SoundCommand};

/// Looping cue channels owned by an entity, keyed by channel name.
#[derive(Component, Debug, Default)]
pub struct CueEmitter {
    channels: HashMap<String, Entity>,
}

impl CueEmitter {
    /// Records `player` as the channel's playback entity and returns the one
    /// it replaces.
    pub fn replace(&mut self, channel: &str, player: Entity) -> Option<Entity> {
        self.channels.insert(channel.to_string(), player)
    }

    pub fn take(&mut self, channel: &str) -> Option<Entity> {
        self.channels.remove(channel)
    }

    #[cfg(test)]
    pub fn get(&self, channel: &str) -> Option<Entity> {
        self.channels.get(channel).copied()
    }
}

/// Playback entities for the music tracks.
#[derive(Resource, Debug, Default)]
pub struct MusicChannels {
    pub bgm: Option<Entity>,
    pub secondary: Option<Entity>,
    pub jingle: Option<Entity>,
}

fn loop_or_once(looping: bool) -> PlaybackSettings {
    if looping {
        PlaybackSettings::LOOP
    } else {
        PlaybackSettings::DESPAWN
    }
}

pub(crate) fn play_sound_commands(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut reader: MessageReader<SoundCommand>,
    mut emitters: Query<&mut CueEmitter>,
    mut music: ResMut<MusicChannels>,
    mut sinks: Query<&mut AudioSink>,
) {
    for command in reader.read() {
        match command {
            SoundCommand::PlayClipAt { clip, position } => {
                commands.spawn((
                    AudioPlayer::new(asset_server.load::<AudioSource>(clip)),
                    PlaybackSettings::DESPAWN,
                    Transform::from_translation(position.extend(0.0)),
                ));
            }
            SoundCommand::Cue { emitter, cue } => {
                let Ok(mut channels) = emitters.get_mut(*emitter) else {
                    debug!("Cue for entity {:?} without a CueEmitter, skipping", emitter);
                    continue;
                };
                match cue {
                    CueCommand::Play {
                        channel,
                        clip,
                        pitch,
                    } => {
                        let player = commands
                            .spawn((
                                AudioPlayer::new(asset_server.load::<AudioSource>(clip)),
                                PlaybackSettings::LOOP.with_speed(*pitch),
                                ChildOf(*emitter),
                            ))
                            .id();
                        if let Some(previous) = channels.replace(channel, player) {
                            commands.entity(previous).try_despawn();
                        }
                    }
                    CueCommand::Stop { channel } => {
                        if let Some(previous) = channels.take(channel) {
                            commands.entity(previous).try_despawn();
                        }
                    }
                }
            }
            SoundCommand::PlayBgm { clip, looping } => {
                if let Some(previous) = music.bgm.take() {
                    commands.entity(previous).try_despawn();
                }
                let player = commands
                    .spawn((
                        AudioPlayer::new(asset_server.load::<AudioSource>(clip)),
                        loop_or_once(*looping),
                    ))
                    .id();
                music.bgm = Some(player);
            }
            SoundCommand::PlaySecondaryBgm { clip, looping } => {
                if let Some(previous) = music.secondary.take() {
                    commands.entity(previous).try_despawn();
                }
                // The main track stays paused until the secondary one ends
                if let Some(bgm) = music.bgm {
                    if let Ok(mut sink) = sinks.get_mut(bgm) {
                        sink.pause();
                    }
                }
                let player = commands
                    .spawn((
                        AudioPlayer::new(asset_server.load::<AudioSource>(clip)),
                        loop_or_once(*looping),
                    ))
                    .id();
                music.secondary = Some(player);
            }
            SoundCommand::PlayJingle { clip } => {
                if let Some(previous) = music.jingle.take() {
                    commands.entity(previous).try_despawn();
                }
                let player = commands
                    .spawn((
                        AudioPlayer::new(asset_server.load::<AudioSource>(clip)),
                        PlaybackSettings::DESPAWN,
                    ))
                    .id();
                music.jingle = Some(player);
            }
        }
    }
}

pub(crate) fn load_failed(state: Option<LoadState>) -> bool {
    matches!(state, Some(LoadState::Failed(_)))
}

/// Removes players whose clip failed to load. They never get a sink, so
/// `PlaybackSettings::DESPAWN` would keep them around forever.
pub(crate) fn reap_failed_players(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    players: Query<(Entity, &AudioPlayer), Without<AudioSink>>,
) {
    for (entity, player) in &players {
        if load_failed(asset_server.get_load_state(player.0.id())) {
            debug!("Audio clip for {:?} failed to load, despawning", entity);
            commands.entity(entity).try_despawn();
        }
    }
}

/// Resumes the main track once secondary music has finished and despawned.
pub(crate) fn resume_bgm(
    mut music: ResMut<MusicChannels>,
    players: Query<(), With<AudioPlayer>>,
    mut sinks: Query<&mut AudioSink>,
) {
    let Some(secondary) = music.secondary else {
        return;
    };
    if players.contains(secondary) {
        return;
    }

    music.secondary = None;
    if let Some(bgm) = music.bgm {
        if let Ok(mut sink) = sinks.get_mut(bgm) {
            sink.play();
        }
    }
}
