pub mod bitmap_font;
pub mod canvas;
pub mod encode;
pub mod font;
pub mod layout;

pub use canvas::Sheet;
pub use font::{FontSet, Typeface};
pub use layout::TwoColumnLayout;
