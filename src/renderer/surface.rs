//! Abstract drawing surface
//!
//! The presentation device (canvas, framebuffer, window) lives outside the
//! crate; rendering code only issues these commands.

/// Solid RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Horizontal anchoring for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Command sink for one frame's draw calls; top-left origin, Y-down
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, align: TextAlign, color: Color);
}

/// Captures draw commands for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCmd {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
        color: Color,
    },
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCmd::Rect { x, y, w, h, color });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.commands.push(DrawCmd::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, align: TextAlign, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            size,
            align,
            color,
        });
    }
}

#[cfg(test)]
impl RecordingSurface {
    pub fn rects(&self) -> Vec<(f32, f32, f32, f32, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect { x, y, w, h, color } => Some((*x, *y, *w, *h, *color)),
                _ => None,
            })
            .collect()
    }
}
