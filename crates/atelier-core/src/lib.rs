pub mod constants;
pub mod controller;
pub mod glyph;
pub mod keyframes;
pub mod layout;
pub mod region;
pub mod reveal;
pub mod scatter;
pub mod scroll;
pub mod spring;

pub use constants::*;
pub use controller::*;
pub use glyph::*;
pub use keyframes::*;
pub use layout::*;
pub use region::*;
pub use reveal::*;
pub use scatter::*;
pub use scroll::*;
pub use spring::*;
