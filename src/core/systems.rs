//! Core domain: camera and stage setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// A flat run with walls on both ends, long enough to spindash across.
pub(crate) fn spawn_test_stage(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.35, 0.55, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(2400.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(2400.0, 40.0),
        ground_layers,
    ));

    for x in [-1220.0, 1220.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 600.0)),
                ..default()
            },
            Transform::from_xyz(x, 80.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 600.0),
            wall_layers,
        ));
    }
}
