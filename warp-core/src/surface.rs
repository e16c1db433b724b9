use crate::types::Rgba;
use glam::Vec2;

/// Drawing capability the core needs from a renderer.
///
/// The effect only ever paints opaque axis-aligned squares, so this is the
/// whole contract. The viewer implements it over its painter; tests use a
/// recording mock.
pub trait Surface {
    /// Fills a `size × size` square whose top-left corner is at `min`.
    fn fill_rect(&mut self, min: Vec2, size: f32, color: Rgba);
}
