//! Movement domain: player bootstrap from the loaded moveset.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ContentSettings;
use crate::effects::{Capabilities, CueEmitter};
use crate::movement::{GROUND_CONTROL_CAPABILITY, GameLayer, HedgehogController, Player};
use crate::moves::{MOVE_MANAGER_CAPABILITY, standard_moveset};

/// Spawns the player with its controller, move manager and capability table.
/// Runs on entering `GameState::Run`, after bindings are synced.
pub(crate) fn spawn_player(
    mut commands: Commands,
    settings: Res<ContentSettings>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let manager = standard_moveset(&settings.moveset);
    info!(
        "Spawning player with moves: {:?}",
        manager.kinds().collect::<Vec<_>>()
    );

    commands.spawn((
        // Identity & movement
        (
            Player,
            HedgehogController::default(),
            manager,
            Capabilities::new()
                .with(MOVE_MANAGER_CAPABILITY, true)
                .with(GROUND_CONTROL_CAPABILITY, true),
            CueEmitter::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.2, 0.4, 0.95),
            custom_size: Some(Vec2::new(30.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -100.0, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(30.0, 40.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated manually
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
