//! Raster surface byte-format conversion.
//!
//! The engine draws into a caller-owned surface; a caller-side compositor
//! then blends that surface onto a final frame. The blend contract is
//! straight (non-premultiplied) RGBA, while 32-bit raster backends
//! conventionally hold native-endian ARGB with premultiplied alpha.
//! [`argb32_to_rgba`] performs that conversion; any other source format
//! is refused rather than guessed at.

use crate::error::DrawError;

/// Pixel layout of a backend surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceFormat {
    /// 32-bit native-endian ARGB, alpha premultiplied.
    Argb32,
    /// 32-bit native-endian xRGB, no alpha.
    Rgb24,
    /// 8-bit alpha only.
    A8,
}

/// Convert one surface's pixel data into tightly packed straight RGBA.
///
/// `data` holds `height` rows of `stride` bytes each; rows may carry
/// padding beyond `width * 4`. Only [`SurfaceFormat::Argb32`] is
/// supported, and a buffer too short for the declared rows is refused
/// rather than read past.
pub fn argb32_to_rgba(
    format: SurfaceFormat,
    width: usize,
    height: usize,
    stride: usize,
    data: &[u8],
) -> Result<Vec<u8>, DrawError> {
    if format != SurfaceFormat::Argb32 {
        return Err(DrawError::UnsupportedSurfaceFormat(format));
    }
    if stride < width * 4 {
        return Err(DrawError::ConstraintViolation(
            "surface stride shorter than a pixel row",
        ));
    }
    if height > 0 && data.len() < (height - 1) * stride + width * 4 {
        return Err(DrawError::ConstraintViolation(
            "surface buffer shorter than its declared rows",
        ));
    }

    let mut out = Vec::with_capacity(width * height * 4);
    for row in 0..height {
        let line = &data[row * stride..row * stride + width * 4];
        for pixel in line.chunks_exact(4) {
            let argb = u32::from_ne_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
            let a = ((argb >> 24) & 0xff) as u8;
            let r = ((argb >> 16) & 0xff) as u8;
            let g = ((argb >> 8) & 0xff) as u8;
            let b = (argb & 0xff) as u8;

            out.push(unpremultiply(r, a));
            out.push(unpremultiply(g, a));
            out.push(unpremultiply(b, a));
            out.push(a);
        }
    }
    Ok(out)
}

/// Undo alpha premultiplication for one channel. Fully transparent
/// pixels have no recoverable colour and stay zero.
fn unpremultiply(channel: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        0
    } else {
        let scaled = (channel as u32 * 255 + (alpha as u32) / 2) / alpha as u32;
        scaled.min(255) as u8
    }
}

// ============================================================================
// Tests
// ============================================================================
