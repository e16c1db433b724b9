//! The particle field: owns the particle collection, the cached raster,
//! and the shared pointer state.
//!
//! The per-frame contract is: the driver clears its canvas, calls
//! [`Field::draw`], then [`Field::update`], and schedules the next frame.
//! Rebuilds triggered by a new image or a gap change fully replace the
//! particle collection; nothing is patched incrementally.

use crate::{config::Config, particle::Particle, raster::Raster, surface::Surface};
use glam::Vec2;
use image::RgbaImage;
use rand::Rng;

/// Container and driver for the whole effect.
pub struct Field {
    width: u32,
    height: u32,
    cfg: Config,
    pointer: Option<Vec2>,
    particles: Vec<Particle>,
    raster: Option<Raster>,
}

impl Field {
    /// Creates an empty field of the given canvas dimensions with default
    /// parameters. No particles exist until an image is sampled.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, Config::default())
    }

    /// Like [`Field::new`] but with explicit parameters.
    pub fn with_config(width: u32, height: u32, cfg: Config) -> Self {
        Self {
            width,
            height,
            cfg,
            pointer: None,
            particles: Vec::new(),
            raster: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn gap(&self) -> u32 {
        self.cfg.gap
    }

    pub fn influence_radius(&self) -> f32 {
        self.cfg.influence_radius
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Samples an image into particles.
    ///
    /// The image is aspect-fitted onto a canvas-sized [`Raster`], which is
    /// cached so later gap changes can rebuild without re-decoding, and
    /// the particle collection is rebuilt from it.
    pub fn sample(&mut self, img: &RgbaImage) {
        self.raster = Some(Raster::from_image(img, self.width, self.height));
        self.rebuild();
    }

    /// Loads a freshly decoded image: restores `gap` and
    /// `influence_radius` to their defaults, drops any active pointer,
    /// then samples.
    ///
    /// Decoding itself is the caller's asynchronous boundary; until this
    /// is called the field keeps simulating its previous particle set.
    pub fn load(&mut self, img: &RgbaImage) {
        let defaults = Config::default();
        self.cfg.gap = defaults.gap;
        self.cfg.influence_radius = defaults.influence_radius;
        self.pointer = None;
        self.sample(img);
    }

    /// Rebuilds the particle collection from the cached raster.
    ///
    /// Walks the raster on a grid with stride `cfg.gap` in both axes and
    /// creates one particle per cell whose alpha is non-zero, anchored at
    /// the cell coordinate and colored with the sampled pixel. With no
    /// raster cached this leaves the collection empty — the expected state
    /// before the first successful load, not an error.
    pub fn rebuild(&mut self) {
        self.particles.clear();

        let Some(raster) = &self.raster else {
            return;
        };

        let gap = self.cfg.gap.max(1);
        let size = gap as f32;
        let mut y = 0;
        while y < self.height {
            let mut x = 0;
            while x < self.width {
                if let Some(color) = raster.rgba_at(x, y)
                    && color[3] > 0
                {
                    let origin = Vec2::new(x as f32, y as f32);
                    self.particles
                        .push(Particle::new(origin, color, size, self.cfg.ease));
                }
                x += gap;
            }
            y += gap;
        }
    }

    /// Updates the sampling stride. Rebuilds immediately when a raster is
    /// cached; otherwise the new gap simply applies to the next sample.
    pub fn set_gap(&mut self, gap: u32) {
        self.cfg.gap = gap.max(1);
        if self.raster.is_some() {
            self.rebuild();
        }
    }

    /// Updates the pointer influence threshold (squared pixels). Takes
    /// effect on the next update pass; no rebuild needed.
    pub fn set_influence_radius(&mut self, radius: f32) {
        self.cfg.influence_radius = radius;
    }

    /// Updates the shared pointer position in canvas-local pixels.
    /// `None` means no pointer is active (left the canvas, touch ended).
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Advances every particle by one frame against the shared pointer
    /// state and parameters.
    pub fn update(&mut self) {
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.update(pointer, &self.cfg);
        }
    }

    /// Scatters every particle to a random in-bounds position.
    ///
    /// Callers that track a pointer should clear it alongside this, so the
    /// scattered particles are not immediately repelled again mid-flight.
    pub fn warp(&mut self, rng: &mut impl Rng) {
        let (w, h) = (self.width as f32, self.height as f32);
        for p in &mut self.particles {
            p.warp(w, h, self.cfg.warp_ease, rng);
        }
    }

    /// Draws every particle, in collection order.
    pub fn draw(&self, surface: &mut impl Surface) {
        for p in &self.particles {
            p.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;
    use image::Rgba as ImgRgba;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn opaque(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, ImgRgba([200, 100, 50, 255]))
    }

    struct RecordingSurface {
        rects: Vec<(Vec2, f32, Rgba)>,
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, min: Vec2, size: f32, color: Rgba) {
            self.rects.push((min, size, color));
        }
    }

    #[test]
    fn opaque_image_with_gap_10_yields_full_grid() {
        let mut field = Field::new(100, 100);
        field.set_gap(10);
        field.sample(&opaque(100, 100));

        assert_eq!(field.particles().len(), 100);

        // Every particle sits on the sampling grid.
        for p in field.particles() {
            let x = p.origin.x as u32;
            let y = p.origin.y as u32;
            assert_eq!(x % 10, 0);
            assert_eq!(y % 10, 0);
            assert!(x <= 90 && y <= 90);
        }

        // Corners of the grid are present.
        let origins: Vec<(u32, u32)> = field
            .particles()
            .iter()
            .map(|p| (p.origin.x as u32, p.origin.y as u32))
            .collect();
        assert!(origins.contains(&(0, 0)));
        assert!(origins.contains(&(90, 90)));
    }

    #[test]
    fn transparent_cells_produce_no_particles() {
        // Left half opaque, right half fully transparent.
        let img = RgbaImage::from_fn(100, 100, |x, _| {
            if x < 50 {
                ImgRgba([255, 255, 255, 255])
            } else {
                ImgRgba([255, 255, 255, 0])
            }
        });

        let mut field = Field::new(100, 100);
        field.set_gap(10);
        field.sample(&img);

        assert_eq!(field.particles().len(), 50);
        assert!(field.particles().iter().all(|p| p.origin.x < 50.0));
    }

    #[test]
    fn sampling_twice_is_idempotent() {
        let img = opaque(100, 100);
        let mut field = Field::new(100, 100);
        field.set_gap(10);

        field.sample(&img);
        let first: Vec<(Vec2, Rgba)> = field
            .particles()
            .iter()
            .map(|p| (p.origin, p.color))
            .collect();

        field.sample(&img);
        let second: Vec<(Vec2, Rgba)> = field
            .particles()
            .iter()
            .map(|p| (p.origin, p.color))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn gap_change_reuses_cached_raster_and_matches_fresh_sample() {
        let img = opaque(100, 100);

        // Sample at the default gap, then switch to 10. No re-sampling.
        let mut reused = Field::new(100, 100);
        reused.sample(&img);
        reused.set_gap(10);

        // Set the gap first, then sample fresh.
        let mut fresh = Field::new(100, 100);
        fresh.set_gap(10);
        fresh.sample(&img);

        let a: Vec<(Vec2, Rgba)> = reused
            .particles()
            .iter()
            .map(|p| (p.origin, p.color))
            .collect();
        let b: Vec<(Vec2, Rgba)> = fresh
            .particles()
            .iter()
            .map(|p| (p.origin, p.color))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn rebuild_without_raster_leaves_field_empty() {
        let mut field = Field::new(100, 100);
        field.rebuild();
        assert!(field.particles().is_empty());

        // set_gap before any sample must not panic either.
        field.set_gap(3);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn load_resets_gap_radius_and_pointer() {
        let mut field = Field::new(100, 100);
        field.set_gap(17);
        field.set_influence_radius(123.0);
        field.set_pointer(Some(Vec2::new(5.0, 5.0)));

        field.load(&opaque(100, 100));

        let defaults = Config::default();
        assert_eq!(field.gap(), defaults.gap);
        assert_eq!(field.influence_radius(), defaults.influence_radius);
        assert_eq!(field.pointer(), None);
        assert!(!field.particles().is_empty());
    }

    #[test]
    fn nearest_particle_gets_the_largest_impulse() {
        // Clamp the repulsion so a pointer sitting exactly on an origin
        // stays finite; the nearest particle still receives the biggest
        // kick because the clamp only caps the singular case.
        let mut cfg = Config::default();
        cfg.gap = 10;
        cfg.min_distance_sq = Some(1.0);
        cfg.influence_radius = 1_000_000.0; // reach every particle

        let mut field = Field::with_config(100, 100, cfg);
        field.sample(&opaque(100, 100));
        field.set_pointer(Some(Vec2::new(50.0, 50.0)));

        field.update();

        let (fastest, speed) = field
            .particles()
            .iter()
            .map(|p| (p.origin, p.vel.length()))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();

        assert_eq!(fastest, Vec2::new(50.0, 50.0));
        assert!(speed.is_finite());
    }

    #[test]
    fn warp_scatters_all_particles_in_bounds() {
        let mut field = Field::new(100, 100);
        field.set_gap(10);
        field.sample(&opaque(100, 100));

        let mut rng = StdRng::seed_from_u64(42);
        field.warp(&mut rng);

        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 100.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 100.0);
            assert_eq!(p.ease, Config::default().warp_ease);
        }
    }

    #[test]
    fn draw_visits_every_particle_once() {
        let mut field = Field::new(100, 100);
        field.set_gap(10);
        field.sample(&opaque(100, 100));

        let mut surface = RecordingSurface { rects: Vec::new() };
        field.draw(&mut surface);

        assert_eq!(surface.rects.len(), field.particles().len());
        for (min, size, color) in &surface.rects {
            assert_eq!(*size, 10.0);
            assert_eq!(*color, [200, 100, 50, 255]);
            assert!(min.x >= 0.0 && min.y >= 0.0);
        }
    }

    #[test]
    fn update_with_pointer_absent_keeps_particles_at_rest() {
        let mut field = Field::new(100, 100);
        field.set_gap(10);
        field.sample(&opaque(100, 100));

        field.update();

        for p in field.particles() {
            assert_eq!(p.pos, p.origin);
            assert_eq!(p.vel, Vec2::ZERO);
        }
    }
}
