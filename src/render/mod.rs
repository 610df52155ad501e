//! Composing frames in memory and presenting them on the terminal.

mod frame;
mod palette;
mod terminal;

pub use self::{
    frame::{Canvas, Cell, Frame, Style},
    palette::Palette,
    terminal::{Presenter, Terminal},
};
