//! Movement domain: ground and wall detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, HedgehogController, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &LinearVelocity, &mut HedgehogController), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, velocity, mut controller) in &mut query {
        let was_grounded = controller.grounded;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        // Cast a short ray downward from the feet
        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(ray_origin, Dir2::NEG_Y, 4.0, true, &ground_filter);

        // Rising bodies are never grounded, so a jump can leave the floor
        controller.grounded = hit.is_some() && velocity.y <= 0.0;

        if controller.grounded != was_grounded {
            debug!(
                "Ground contact changed: grounded={}, ground_velocity={}",
                controller.grounded,
                controller.ground_velocity()
            );
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut HedgehogController), With<Player>>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut controller) in &mut query {
        let speed = controller.ground_velocity();
        if speed == 0.0 {
            continue;
        }

        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let direction = if speed > 0.0 { Dir2::X } else { Dir2::NEG_X };
        let hit = spatial_query.cast_ray(
            transform.translation.truncate(),
            direction,
            half_width + 2.0,
            true,
            &wall_filter,
        );

        if hit.is_some() {
            debug!("Hit wall at ground_velocity={}", speed);
            controller.halt();
        }
    }
}
