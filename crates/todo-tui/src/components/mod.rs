pub mod button;
pub mod panel;
pub mod popup;

pub use button::*;
pub use panel::*;
pub use popup::*;
