pub mod render;
pub mod terminal_guard;
pub mod theme;

pub use render::repaint;
pub use terminal_guard::TerminalGuard;
pub use theme::{current_prompt, prompt};
