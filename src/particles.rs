//! Pointer-reactive particle background
//!
//! Simulation and drawing are separate: [`ParticleField::step`] is pure state
//! update, [`ParticleField::draw`] hands each particle to a [`ParticleCanvas`].
//! A field without a canvas simply skips drawing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::ParticleConfig;

/// Frame rate the per-frame constants are tuned for
const REFERENCE_FPS: f64 = 60.0;

/// Upper bound on the field size, whatever the config asks for
pub const MAX_PARTICLES: usize = 20_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
}

/// Anything particles can be drawn onto
pub trait ParticleCanvas {
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn dot(&mut self, particle: &Particle);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Tuning for the pointer pull
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub radius: f64,
    /// Positive pulls toward the pointer, negative pushes away
    pub strength: f64,
    pub smoothing: f64,
}

impl From<&ParticleConfig> for FieldParams {
    fn from(config: &ParticleConfig) -> Self {
        Self {
            count: config.count,
            radius: config.radius,
            strength: config.strength,
            smoothing: config.smoothing,
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::from(&ParticleConfig::default())
    }
}

pub struct ParticleField {
    params: FieldParams,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Pointer,
    smoothed: Pointer,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, width: f64, height: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let origin = Pointer {
            x: width / 2.0,
            y: height / 2.0,
        };
        let mut field = Self {
            params,
            width: width.max(1.0),
            height: height.max(1.0),
            particles: Vec::new(),
            pointer: origin,
            smoothed: origin,
            rng,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..self.params.count.min(MAX_PARTICLES))
            .map(|_| Particle {
                x: rng.gen_range(0.0..w),
                y: rng.gen_range(0.0..h),
                vx: rng.gen_range(-0.25..0.25),
                vy: rng.gen_range(-0.25..0.25),
                size: rng.gen_range(1.0..3.0),
                opacity: rng.gen_range(0.2..0.7),
            })
            .collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn smoothed_pointer(&self) -> Pointer {
        self.smoothed
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Pointer { x, y };
    }

    /// New canvas size; the particle set is regenerated for it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.populate();
        tracing::trace!(width, height, count = self.particles.len(), "particle field resized");
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let frames = (dt.max(0.0) * REFERENCE_FPS).min(4.0);
        if frames == 0.0 {
            return;
        }
        let FieldParams {
            radius,
            strength,
            smoothing,
            ..
        } = self.params;

        let follow = (smoothing * frames).min(1.0);
        self.smoothed.x += (self.pointer.x - self.smoothed.x) * follow;
        self.smoothed.y += (self.pointer.y - self.smoothed.y) * follow;

        let (w, h) = (self.width, self.height);
        let target = self.smoothed;
        for p in &mut self.particles {
            p.x += p.vx * frames;
            p.y += p.vy * frames;

            let dx = target.x - p.x;
            let dy = target.y - p.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if radius > 0.0 && dist < radius {
                let force = (radius - dist) / radius;
                p.x += dx * force * strength * frames;
                p.y += dy * force * strength * frames;
            }

            p.x = wrap(p.x, w);
            p.y = wrap(p.y, h);
        }
    }

    pub fn draw(&self, canvas: Option<&mut dyn ParticleCanvas>) {
        let Some(canvas) = canvas else {
            return;
        };
        canvas.clear();
        for p in &self.particles {
            canvas.dot(p);
        }
    }
}

/// Wrap `v` into `0..len`.
pub fn wrap(v: f64, len: f64) -> f64 {
    if !v.is_finite() || len <= 0.0 {
        return 0.0;
    }
    let r = v.rem_euclid(len);
    // rem_euclid can round up to `len` for tiny negative inputs
    if r >= len {
        0.0
    } else {
        r
    }
}
