//! Terminal presentation: framebuffer, crossterm renderer, and game view.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
