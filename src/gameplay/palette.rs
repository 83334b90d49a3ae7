//! Where and how big the next falling sphere is.

use bevy::prelude::*;
use rand::{seq::SliceRandom, Rng};

use crate::core::config::{vec3_from, RadiusRule, SpawnConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlan {
    pub position: Vec3,
    pub radius: f32,
    pub spin: Vec3,
    pub mass: f32,
}

/// Uniform pick from the palette; an empty palette spawns on the centre line.
pub fn pick_lateral<R: Rng + ?Sized>(palette: &[f32], rng: &mut R) -> f32 {
    palette.choose(rng).copied().unwrap_or(0.0)
}

/// Apply the radius rule, lifting degenerate results (e.g. `floor(0.2 * 3) == 0`) to `min`.
pub fn sample_radius<R: Rng + ?Sized>(rule: RadiusRule, min: f32, rng: &mut R) -> f32 {
    let raw = match rule {
        RadiusRule::Fixed(r) => r,
        RadiusRule::CeilScaled(scale) => (rng.gen::<f32>() * scale).ceil(),
        RadiusRule::FloorScaled(scale) => (rng.gen::<f32>() * scale).floor(),
    };
    raw.max(min)
}

pub fn plan_spawn<R: Rng + ?Sized>(cfg: &SpawnConfig, rng: &mut R) -> SpawnPlan {
    let x = pick_lateral(&cfg.palette, rng);
    let radius = sample_radius(cfg.radius, cfg.min_radius, rng);
    SpawnPlan {
        position: Vec3::new(x, cfg.start_height, cfg.start_depth),
        radius,
        spin: vec3_from(cfg.initial_spin),
        mass: cfg.mass,
    }
}
