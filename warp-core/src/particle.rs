use crate::{config::Config, surface::Surface, types::Rgba};
use glam::Vec2;
use rand::Rng;

/// One sampled grid cell of the source image, simulated as a damped spring.
///
/// A particle is anchored at the integer grid coordinate it was sampled
/// from (`origin`) and carries the pixel color resolved at sampling time.
/// Each frame it receives an optional repulsion impulse from the pointer,
/// loses velocity to friction, and is pulled back toward its origin.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Grid anchor; the rest position. Fixed for the particle's lifetime.
    pub origin: Vec2,
    /// Current position.
    pub pos: Vec2,
    /// Current velocity.
    pub vel: Vec2,
    /// Spring-back coefficient. Lowered by [`Particle::warp`].
    pub ease: f32,
    /// Drawn square side length, equal to the sampling gap at creation.
    pub size: f32,
    /// Sampled pixel color. Immutable after construction.
    pub color: Rgba,
}

impl Particle {
    /// Creates a particle at rest on its grid anchor.
    pub fn new(origin: Vec2, color: Rgba, size: f32, ease: f32) -> Self {
        Self {
            origin,
            pos: origin,
            vel: Vec2::ZERO,
            ease,
            size,
            color,
        }
    }

    /// Advances the particle by one frame.
    ///
    /// The step is:
    /// 1. If a pointer is present, compute the squared distance to it
    ///    (clamped from below by `cfg.min_distance_sq` when set) and, if
    ///    inside `cfg.influence_radius`, add a repulsion impulse of
    ///    magnitude `influence_radius / d²` directed away from the pointer.
    /// 2. Damp velocity by `cfg.friction`. This happens every frame,
    ///    impulse or not.
    /// 3. Move by the damped velocity plus `(origin - pos) * ease`, the
    ///    proportional pull back to the rest position.
    ///
    /// With the pointer absent the impulse step is skipped entirely, so no
    /// undefined coordinate can leak into velocity or position.
    ///
    /// ### Parameters
    /// - `pointer` - Current pointer position in canvas-local pixels, or
    ///   `None` when no pointer is active.
    /// - `cfg` - Shared effect parameters.
    pub fn update(&mut self, pointer: Option<Vec2>, cfg: &Config) {
        if let Some(p) = pointer {
            let d = p - self.pos;
            let mut d2 = d.length_squared();
            if let Some(min) = cfg.min_distance_sq {
                d2 = d2.max(min);
            }
            if d2 < cfg.influence_radius {
                // Negative: the impulse points away from the pointer.
                let force = -cfg.influence_radius / d2;
                let angle = d.y.atan2(d.x);
                self.vel += force * Vec2::new(angle.cos(), angle.sin());
            }
        }

        self.vel *= cfg.friction;
        self.pos += self.vel + (self.origin - self.pos) * self.ease;
    }

    /// Scatters the particle to a uniformly random position in
    /// `[0, width) × [0, height)` and lowers its ease to `warp_ease`.
    ///
    /// Velocity is deliberately left untouched, so residual drift carries
    /// through the scatter and the return home stays loose.
    pub fn warp(&mut self, width: f32, height: f32, warp_ease: f32, rng: &mut impl Rng) {
        self.pos = Vec2::new(
            rng.random_range(0.0..width),
            rng.random_range(0.0..height),
        );
        self.ease = warp_ease;
    }

    /// Paints the particle as an opaque square at its current position.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_rect(self.pos, self.size, self.color);
    }
}
