//! Effects domain: fire-and-forget sound and object commands.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A command for one of an emitter's looping cue channels.
#[derive(Debug, Clone, PartialEq)]
pub enum CueCommand {
    /// Restart the channel's cue from the beginning at `pitch`.
    Play {
        channel: String,
        clip: String,
        pitch: f32,
    },
    Stop {
        channel: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SoundCommand {
    /// One-shot clip at a world position.
    PlayClipAt { clip: String, position: Vec2 },
    /// Looping cue owned by `emitter`.
    Cue { emitter: Entity, cue: CueCommand },
    PlayBgm { clip: String, looping: bool },
    /// Music that temporarily replaces the main track (invincibility, for example).
    PlaySecondaryBgm { clip: String, looping: bool },
    /// Short fanfare played over the music (extra life, for example).
    PlayJingle { clip: String },
}

impl Message for SoundCommand {}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectAction {
    /// Instantiate a prefab at the emitter's position.
    Spawn { prefab: String, as_child: bool },
    Destroy(Entity),
    DestroySelf,
    EnableCapability(String),
    DisableCapability(String),
    SetSortingOrder(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCommand {
    pub emitter: Entity,
    pub action: ObjectAction,
}

impl Message for ObjectCommand {}
