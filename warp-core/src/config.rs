/// Tunable parameters of the particle effect.
///
/// `gap` and `influence_radius` are the two values exposed to UI controls;
/// the rest are physics constants shared by every particle.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Sampling stride in pixels. Also the drawn size of each particle
    /// square. Must be at least 1.
    pub gap: u32,
    /// Pointer influence threshold. Compared against the *squared*
    /// distance between pointer and particle, so this is a
    /// squared-pixels quantity, not a radius in pixels.
    pub influence_radius: f32,
    /// Per-frame velocity damping factor.
    pub friction: f32,
    /// Default spring-back coefficient toward the grid origin.
    pub ease: f32,
    /// Ease assigned by a warp, so scattered particles drift home slowly.
    pub warp_ease: f32,
    /// Optional lower clamp for the squared pointer distance used in the
    /// repulsion term. `None` keeps the unclamped force, which is singular
    /// when the pointer sits exactly on a particle.
    pub min_distance_sq: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap: 5,
            influence_radius: 6000.0,
            friction: 0.95,
            ease: 0.2,
            warp_ease: 0.05,
            min_distance_sq: None,
        }
    }
}
