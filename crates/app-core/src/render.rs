//! Drawing contract between the simulation and a rendering backend.
//!
//! The field emits backend-agnostic [`DrawCommand`]s; a frontend either
//! interprets them directly ("fill disk", "fill radial gradient") or
//! flattens them into [`DiskInstance`]s for the instanced-quad shader
//! shipped with this crate.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Straight-alpha RGBA color.
pub type Rgba = [f32; 4];

#[inline]
pub fn rgba(rgb: [f32; 3], alpha: f32) -> Rgba {
    [rgb[0], rgb[1], rgb[2], alpha]
}

/// Pixel-space drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Narrow viewports get the denser raster grid and the smaller pool.
    pub fn is_narrow(&self) -> bool {
        self.width < crate::constants::NARROW_VIEWPORT_PX
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// One fill operation, in draw order.
#[derive(Clone, Copy, Debug)]
pub enum DrawCommand {
    /// Hard-edged filled disk.
    Disk {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Radial gradient from `inner` at the center to `outer` at the rim,
    /// transparent beyond.
    Gradient {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
}

/// GPU-facing instance for one quad of the disk shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DiskInstance {
    pub center: [f32; 2],
    pub radius: f32,
    /// 0 = hard disk, 1 = radial gradient.
    pub softness: f32,
    pub color: [f32; 4],
    pub outer: [f32; 4],
}

/// Flatten commands into shader instances, preserving order.
pub fn flatten(commands: &[DrawCommand], out: &mut Vec<DiskInstance>) {
    out.reserve(commands.len());
    for cmd in commands {
        out.push(match *cmd {
            DrawCommand::Disk {
                center,
                radius,
                color,
            } => DiskInstance {
                center: center.to_array(),
                radius,
                softness: 0.0,
                color,
                outer: [0.0; 4],
            },
            DrawCommand::Gradient {
                center,
                radius,
                inner,
                outer,
            } => DiskInstance {
                center: center.to_array(),
                radius,
                softness: 1.0,
                color: inner,
                outer,
            },
        });
    }
}
