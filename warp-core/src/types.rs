/// An RGBA color as sampled from the source image.
///
/// Byte order matches the raster layout: `[r, g, b, a]`. A particle's
/// color is resolved once at sampling time and never changes afterwards.
pub type Rgba = [u8; 4];
