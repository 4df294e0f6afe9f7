//! Rendering module
//!
//! Draws the simulation onto any [`Canvas`]. Nothing here feeds back into the sim.

pub mod canvas;
pub mod shapes;

pub use canvas::{Canvas, DrawCommand, DrawList, Paint, Rgba};
pub use shapes::{START_PROMPT, draw_frame, draw_ready_screen, fire_color, ready_title};
