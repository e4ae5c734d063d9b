//! Render adapter
//!
//! Every game paints onto a fixed 100x100 logical surface. Renderers only get
//! `&self` access to the state they draw.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Palette used by the arcade screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Red,
}

impl Color {
    /// CSS color string
    pub fn css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
        }
    }
}

/// A 2D drawing target in logical units
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

/// Something that can paint itself onto a [`Surface`]
pub trait Render {
    fn render(&self, surface: &mut dyn Surface);
}
