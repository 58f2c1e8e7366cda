//! Effects domain: object spawning, destruction and capability toggles.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::effects::{ObjectAction, ObjectCommand};

/// Named on/off switches registered on an entity at spawn time.
///
/// Systems check their capability before acting, so disabling one by name
/// pauses that behavior without touching the entity's components.
#[derive(Component, Debug, Clone, Default)]
pub struct Capabilities {
    entries: HashMap<String, bool>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, enabled: bool) -> Self {
        self.entries.insert(name.to_string(), enabled);
        self
    }

    /// Returns false for unregistered names, leaving the table unchanged.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) => {
                *entry = enabled;
                true
            }
            None => false,
        }
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.get(name).copied().unwrap_or(false)
    }

    /// True only for a registered capability that is switched off.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.entries.get(name) == Some(&false)
    }
}

#[derive(Debug, Clone)]
pub struct PrefabDef {
    pub color: Color,
    pub size: Vec2,
    /// Seconds until the spawned object removes itself. `None` keeps it.
    pub lifetime: Option<f32>,
}

/// Prefabs that object commands can instantiate, by name.
#[derive(Resource, Debug, Clone)]
pub struct PrefabLibrary {
    pub prefabs: HashMap<String, PrefabDef>,
}

impl Default for PrefabLibrary {
    fn default() -> Self {
        let mut prefabs = HashMap::new();
        prefabs.insert(
            "dust".to_string(),
            PrefabDef {
                color: Color::srgba(0.85, 0.8, 0.7, 0.8),
                size: Vec2::new(12.0, 8.0),
                lifetime: Some(0.3),
            },
        );
        prefabs.insert(
            "spark".to_string(),
            PrefabDef {
                color: Color::srgb(1.0, 0.9, 0.3),
                size: Vec2::new(6.0, 6.0),
                lifetime: Some(0.5),
            },
        );
        Self { prefabs }
    }
}

/// Despawns the entity when the timer runs out.
#[derive(Component, Debug)]
pub struct Lifetime(pub f32);

pub(crate) fn apply_object_commands(
    mut commands: Commands,
    library: Res<PrefabLibrary>,
    mut reader: MessageReader<ObjectCommand>,
    mut targets: Query<(&mut Transform, Option<&mut Capabilities>)>,
) {
    for ObjectCommand { emitter, action } in reader.read() {
        match action {
            ObjectAction::Spawn { prefab, as_child } => {
                let Some(def) = library.prefabs.get(prefab) else {
                    debug!("Unknown prefab '{}', skipping", prefab);
                    continue;
                };
                let Ok((transform, _)) = targets.get(*emitter) else {
                    continue;
                };

                let mut object = commands.spawn(Sprite {
                    color: def.color,
                    custom_size: Some(def.size),
                    ..default()
                });
                if *as_child {
                    object.insert((Transform::default(), ChildOf(*emitter)));
                } else {
                    object.insert(*transform);
                }
                if let Some(lifetime) = def.lifetime {
                    object.insert(Lifetime(lifetime));
                }
            }
            ObjectAction::Destroy(target) => {
                commands.entity(*target).try_despawn();
            }
            ObjectAction::DestroySelf => {
                commands.entity(*emitter).try_despawn();
            }
            ObjectAction::EnableCapability(name) | ObjectAction::DisableCapability(name) => {
                let enabled = matches!(action, ObjectAction::EnableCapability(_));
                let Ok((_, Some(mut capabilities))) = targets.get_mut(*emitter) else {
                    continue;
                };
                if capabilities.set_enabled(name, enabled) {
                    info!("Capability '{}' on {:?}: enabled={}", name, emitter, enabled);
                } else {
                    debug!("Unknown capability '{}' on {:?}, skipping", name, emitter);
                }
            }
            ObjectAction::SetSortingOrder(order) => {
                if let Ok((mut transform, _)) = targets.get_mut(*emitter) {
                    transform.translation.z = *order as f32;
                }
            }
        }
    }
}

pub(crate) fn expire_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Lifetime)>,
) {
    let dt = time.delta_secs();

    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
