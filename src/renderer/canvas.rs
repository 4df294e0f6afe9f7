//! Drawing surface abstraction
//!
//! The simulation never touches a concrete graphics API. The host wraps its 2D
//! context (an HTML canvas, a software rasterizer, ...) in [`Canvas`];
//! [`DrawList`] records calls for headless runs and tests.

use glam::Vec2;

use crate::sim::Aabb;

/// Straight RGBA in 0..=1
pub type Rgba = [f32; 4];

/// Fill style
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Gradient along the segment `from` → `to`
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<(f32, Rgba)>,
    },
    /// Gradient between two concentric circles
    Radial {
        center: Vec2,
        inner: f32,
        outer: f32,
        stops: Vec<(f32, Rgba)>,
    },
}

/// A 2D drawing surface
pub trait Canvas {
    fn clear_rect(&mut self, rect: Aabb);

    fn fill_arc(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Stroke the arc from `start` to `end` (radians, clockwise in screen space)
    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: Rgba,
        width: f32,
    );

    /// Fill `rect` rotated by `rotation` radians about its centre
    fn fill_rect(&mut self, rect: Aabb, rotation: f32, paint: &Paint);

    fn stroke_rect(&mut self, rect: Aabb, rotation: f32, color: Rgba, width: f32);

    fn fill_rounded_rect(&mut self, rect: Aabb, corner_radius: f32, paint: &Paint);

    /// Draw `text` centred on `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Aabb),
    FillArc {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    StrokeArc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: Rgba,
        width: f32,
    },
    FillRect {
        rect: Aabb,
        rotation: f32,
        paint: Paint,
    },
    StrokeRect {
        rect: Aabb,
        rotation: f32,
        color: Rgba,
        width: f32,
    },
    FillRoundedRect {
        rect: Aabb,
        corner_radius: f32,
        paint: Paint,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Rgba,
    },
}

/// Canvas that records every call
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn clear_rect(&mut self, rect: Aabb) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_arc(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillArc {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: Rgba,
        width: f32,
    ) {
        self.commands.push(DrawCommand::StrokeArc {
            center,
            radius,
            start,
            end,
            color,
            width,
        });
    }

    fn fill_rect(&mut self, rect: Aabb, rotation: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            rotation,
            paint: paint.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Aabb, rotation: f32, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            rotation,
            color,
            width,
        });
    }

    fn fill_rounded_rect(&mut self, rect: Aabb, corner_radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillRoundedRect {
            rect,
            corner_radius,
            paint: paint.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
