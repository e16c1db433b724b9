//! Core library for the interactive image-to-particle effect.
//!
//! Main components:
//! - [`particle`] — per-cell physical state, spring-back physics, warp.
//! - [`field`] — the particle container: image sampling and frame updates.
//! - [`raster`] — cached canvas-sized pixel buffer with aspect-fit scaling.
//! - [`surface`] — the drawing capability the core expects from a renderer.
//! - [`ticker`] — explicit frame scheduler for the animation loop.
//! - [`config`] — tunable effect parameters and their defaults.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod field;
pub mod particle;
pub mod raster;
pub mod surface;
pub mod ticker;
pub mod types;
