use bevy::prelude::*;
use micromegas_tracing::prelude::span_fn;

use super::GameSet;
use crate::resources::ActiveSession;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
        app.add_systems(Update, fit_camera_to_world.in_set(GameSet::Presentation));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Orthographic scale that shows the whole world inside the window.
pub fn fit_scale(world: Vec2, window: Vec2) -> f32 {
    (world.x / window.x).max(world.y / window.y)
}

/// Scale the camera so the whole world stays visible when the window is
/// resized.
#[span_fn]
fn fit_camera_to_world(
    session: Option<Res<ActiveSession>>,
    windows: Query<&Window>,
    mut cameras: Query<&mut Projection, With<Camera2d>>,
) {
    let Some(session) = session else { return };
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut projection) = cameras.single_mut() else {
        return;
    };

    let config = session.config();
    let world = Vec2::new(config.world_width, config.world_height);
    let scale = fit_scale(world, Vec2::new(window.width(), window.height()));

    if let Projection::Orthographic(ref mut ortho) = *projection {
        ortho.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_window_needs_no_scaling() {
        assert_eq!(fit_scale(Vec2::new(800.0, 600.0), Vec2::new(800.0, 600.0)), 1.0);
    }

    #[test]
    fn narrow_window_zooms_out_on_width() {
        assert_eq!(fit_scale(Vec2::new(800.0, 600.0), Vec2::new(400.0, 600.0)), 2.0);
    }
}
