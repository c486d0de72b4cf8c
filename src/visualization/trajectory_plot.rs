use anyhow::{anyhow, Result};
use bevy::math::primitives::{Circle, Rectangle};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use log::info;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::states::Trajectory;

/// Half-extent of the plotted region in screen units
const PLOT_HALF_EXTENT: f32 = 280.0;

/// Radius of one scatter marker in screen units
const MARKER_RADIUS: f32 = 2.5;

/// Horizontal position and size of the color bar
const COLORBAR_X: f32 = 360.0;
const COLORBAR_WIDTH: f32 = 20.0;
const COLORBAR_SEGMENTS: usize = 64;

/// Everything the startup system needs to draw, precomputed off the ECS
#[derive(Resource)]
struct PlotData {
    title: String,
    points: Vec<Vec2>, // screen-space marker positions, indexed by step
    colors: Vec<Color>, // marker colors, indexed by step
    bar: Vec<Color>, // color bar segments, bottom to top
}

/// Render one trajectory as a scatter plot colored by step index
pub fn run_plot(trajectory: &Trajectory, method: IntegratorConfig) -> Result<()> {
    let gradient = autumn()?;
    let n = trajectory.len();

    let xs = trajectory.xs();
    let ys = trajectory.ys();
    let scale = screen_scale(&xs, &ys);

    let points = xs.iter().zip(ys.iter())
        .map(|(x, y)| Vec2::new((*x * scale) as f32, (*y * scale) as f32))
        .collect();
    let colors = (0..n).map(|i| gradient_color(&gradient, step_fraction(i, n))).collect();
    let bar = (0..COLORBAR_SEGMENTS)
        .map(|i| gradient_color(&gradient, step_fraction(i, COLORBAR_SEGMENTS)))
        .collect();

    info!("run_plot: starting Bevy 2D viewer with {} {} samples", n, method.name());

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.9, 0.9, 0.9)))
        .insert_resource(PlotData {
            title: format!("{} trajectory, {} steps", method.name(), n),
            points,
            colors,
            bar,
        })
        // env_logger already owns the `log` facade
        .add_plugins(DefaultPlugins.build().disable::<bevy::log::LogPlugin>())
        .add_systems(Startup, setup_plot_system)
        .run();

    Ok(())
}

fn setup_plot_system(mut commands: Commands, data: Res<PlotData>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    // Central body
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(3.0 * MARKER_RADIUS))),
        material: materials.add(ColorMaterial::from(Color::BLACK)),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Later steps drawn on top
    let marker = Mesh2dHandle(meshes.add(Circle::new(MARKER_RADIUS)));
    for (i, (p, c)) in data.points.iter().zip(data.colors.iter()).enumerate() {
        let z = 1.0 + i as f32 / data.points.len().max(1) as f32;
        commands.spawn(MaterialMesh2dBundle {
            mesh: marker.clone(),
            material: materials.add(ColorMaterial::from(*c)),
            transform: Transform::from_xyz(p.x, p.y, z),
            ..Default::default()
        });
    }

    spawn_colorbar(&mut commands, &data, &mut meshes, &mut materials);

    commands.spawn(Text2dBundle {
        text: Text::from_section(data.title.clone(), label_style(22.0)),
        transform: Transform::from_xyz(0.0, PLOT_HALF_EXTENT + 30.0, 3.0),
        ..Default::default()
    });
}

// ========================================================================================
// Color bar
// ========================================================================================

fn spawn_colorbar(commands: &mut Commands, data: &PlotData, meshes: &mut Assets<Mesh>, materials: &mut Assets<ColorMaterial>) {
    let height = 2.0 * PLOT_HALF_EXTENT;
    let segment_h = height / data.bar.len().max(1) as f32;
    let segment = Mesh2dHandle(meshes.add(Rectangle::new(COLORBAR_WIDTH, segment_h)));

    for (i, c) in data.bar.iter().enumerate() {
        let y = -PLOT_HALF_EXTENT + (i as f32 + 0.5) * segment_h;
        commands.spawn(MaterialMesh2dBundle {
            mesh: segment.clone(),
            material: materials.add(ColorMaterial::from(*c)),
            transform: Transform::from_xyz(COLORBAR_X, y, 2.0),
            ..Default::default()
        });
    }

    let last = data.points.len().saturating_sub(1);
    for (label, y) in [("0".to_string(), -PLOT_HALF_EXTENT), (last.to_string(), PLOT_HALF_EXTENT)] {
        commands.spawn(Text2dBundle {
            text: Text::from_section(label, label_style(16.0)),
            transform: Transform::from_xyz(COLORBAR_X + COLORBAR_WIDTH + 20.0, y, 3.0),
            ..Default::default()
        });
    }
}

fn label_style(font_size: f32) -> TextStyle {
    TextStyle {
        font_size,
        color: Color::BLACK,
        ..Default::default()
    }
}

// ========================================================================================
// Mapping helpers
// ========================================================================================

/// Red to yellow, matching matplotlib's "autumn"
fn autumn() -> Result<colorgrad::Gradient> {
    colorgrad::CustomGradient::new()
        .html_colors(&["#ff0000", "#ffff00"])
        .build()
        .map_err(|e| anyhow!("building color gradient: {e}"))
}

fn gradient_color(gradient: &colorgrad::Gradient, t: f64) -> Color {
    let c = gradient.at(t);
    Color::srgb(c.r as f32, c.g as f32, c.b as f32)
}

/// Position of step `i` of `n` along the gradient, in [0, 1]
fn step_fraction(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    i as f64 / (n - 1) as f64
}

/// World-to-screen factor fitting every point inside the plot region
fn screen_scale(xs: &[f64], ys: &[f64]) -> f64 {
    let extent = xs.iter().chain(ys.iter())
        .map(|c| c.abs())
        .filter(|c| c.is_finite())
        .fold(0.0_f64, f64::max);

    if extent > 0.0 {
        PLOT_HALF_EXTENT as f64 / extent
    } else {
        PLOT_HALF_EXTENT as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_fraction_spans_unit_interval() {
        assert_eq!(step_fraction(0, 1000), 0.0);
        assert_eq!(step_fraction(999, 1000), 1.0);
        assert_eq!(step_fraction(0, 1), 0.0);
        assert_eq!(step_fraction(0, 0), 0.0);
    }

    #[test]
    fn autumn_runs_red_to_yellow() {
        let g = autumn().unwrap();

        let start = g.at(0.0);
        let end = g.at(1.0);

        assert!((start.r - 1.0).abs() < 1e-9 && start.g.abs() < 1e-9);
        assert!((end.r - 1.0).abs() < 1e-9 && (end.g - 1.0).abs() < 1e-9);
        assert!(start.b.abs() < 1e-9 && end.b.abs() < 1e-9);
    }

    #[test]
    fn screen_scale_fits_largest_coordinate() {
        let scale = screen_scale(&[1.0, -2.0], &[0.5, 0.0]);
        assert!((scale * 2.0 - PLOT_HALF_EXTENT as f64).abs() < 1e-9);
    }

    #[test]
    fn screen_scale_ignores_non_finite_points() {
        let scale = screen_scale(&[1.0, f64::NAN], &[f64::INFINITY, 0.0]);
        assert!((scale - PLOT_HALF_EXTENT as f64).abs() < 1e-9);
    }
}
