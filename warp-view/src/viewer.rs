//! Interactive image-to-particle viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the effect state
//! ([`Field`], [`Ticker`]) and implements [`eframe::App`] to render the
//! particles and wire pointer, slider, and button input into the core.

use std::path::Path;

use eframe::App;
use glam::Vec2;
use image::RgbaImage;
use warp_core::{field::Field, surface::Surface, ticker::Ticker, types::Rgba};

use crate::error::LoadError;

/// Fixed canvas dimensions of the effect.
///
/// The field's dimensions are set once at construction; the window is
/// sized to leave room for the control panels around the canvas.
const FIELD_WIDTH: u32 = 960;
const FIELD_HEIGHT: u32 = 600;

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Build the control panels (run/pause, warp, load, sliders).
/// 2. Map the hover position to canvas-local coordinates and feed it to
///    the field; off-canvas means the pointer is absent.
/// 3. Draw all particles through the painter, then advance the field by
///    one step if the ticker is due, and request a repaint while running.
pub struct Viewer {
    field: Field,
    ticker: Ticker,
    rng: rand::rngs::ThreadRng,
    last_error: Option<String>,
}

/// [`Surface`] implementation over an egui painter.
///
/// The core hands out canvas-local coordinates; `origin` shifts them into
/// screen space.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl Surface for PainterSurface<'_> {
    fn fill_rect(&mut self, min: Vec2, size: f32, color: Rgba) {
        let rect = egui::Rect::from_min_size(
            self.origin + egui::vec2(min.x, min.y),
            egui::vec2(size, size),
        );
        self.painter.rect_filled(
            rect,
            egui::CornerRadius::ZERO,
            egui::Color32::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]),
        );
    }
}

/// Maps a screen-space hover position to canvas-local coordinates.
///
/// The original effect mixed page and client coordinates; here everything
/// handed to the core is normalized relative to the canvas rectangle.
fn canvas_local(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

/// Reads and decodes an image file into an RGBA buffer.
fn load_rgba(path: &Path) -> Result<RgbaImage, LoadError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgba8())
}

/// Generates the placeholder shown before any file is loaded: a shaded
/// disc on a transparent background, so the alpha-skipping path is
/// visible from the first frame.
fn placeholder_image() -> RgbaImage {
    let size = 512u32;
    let center = size as f32 / 2.0;
    let radius = center * 0.9;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy > radius * radius {
            return image::Rgba([0, 0, 0, 0]);
        }
        let r = (x * 255 / size) as u8;
        let g = (y * 255 / size) as u8;
        let b = 255 - ((x + y) * 127 / size).min(255) as u8;
        image::Rgba([r, g, b, 255])
    })
}

impl Viewer {
    /// Creates a viewer with the placeholder image already sampled and
    /// the animation running.
    pub fn new() -> Self {
        let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
        field.load(&placeholder_image());

        let mut ticker = Ticker::new(0.0);
        ticker.start();

        Self {
            field,
            ticker,
            rng: rand::rng(),
            last_error: None,
        }
    }

    /// Scatters all particles and drops the pointer, so they are not
    /// immediately repelled again on their way home.
    fn warp_now(&mut self) {
        self.field.warp(&mut self.rng);
        self.field.set_pointer(None);
    }

    /// Loads an image from disk into the field, recording any failure for
    /// the status bar. On failure the previous particle set stays live.
    fn load_from_path(&mut self, path: &Path) {
        match load_rgba(path) {
            Ok(img) => {
                self.field.load(&img);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    /// Builds the top panel UI (run controls, warp, load, sliders).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.ticker.is_running() {
                        "⏸ Pause"
                    } else {
                        "▶ Run"
                    })
                    .clicked()
                {
                    if self.ticker.is_running() {
                        self.ticker.stop();
                    } else {
                        self.ticker.start();
                    }
                }

                if ui.button("Warp").clicked() {
                    self.warp_now();
                }

                if ui.button("Load image…").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("images", &["png", "jpg", "jpeg"])
                        .pick_file()
                {
                    self.load_from_path(&path);
                }

                ui.separator();

                let mut gap = self.field.gap();
                if ui
                    .add(egui::Slider::new(&mut gap, 1..=30).text("Gap"))
                    .changed()
                {
                    self.field.set_gap(gap);
                }

                let mut radius = self.field.influence_radius();
                if ui
                    .add(
                        egui::Slider::new(&mut radius, 0.0..=30000.0)
                            .text("Influence (px²)"),
                    )
                    .changed()
                {
                    self.field.set_influence_radius(radius);
                }
            });
        });
    }

    /// Builds the bottom status bar (particle count, load errors).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.last_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, err.as_str());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("particles = {}", self.field.particles().len()));
                    ui.separator();
                    ui.label(format!("gap = {}", self.field.gap()));
                    ui.label(format!("influence = {:.0}", self.field.influence_radius()));
                });
            });
        });
    }

    /// Builds the central canvas: pointer tracking, drawing, and the
    /// per-frame step.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let desired = egui::vec2(FIELD_WIDTH as f32, FIELD_HEIGHT as f32);
            let response = ui.allocate_response(desired, egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::BLACK);

            // Hover inside the canvas drives the repulsion; leaving the
            // canvas clears the pointer.
            let pointer = response.hover_pos().map(|p| canvas_local(p, rect));
            self.field.set_pointer(pointer);

            // Draw, then update, matching the frame order of the effect.
            let mut surface = PainterSurface {
                painter: &painter,
                origin: rect.min,
            };
            self.field.draw(&mut surface);

            let now = ctx.input(|i| i.time);
            if self.ticker.due(now) {
                self.field.update();
            }

            if self.ticker.is_running() {
                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
