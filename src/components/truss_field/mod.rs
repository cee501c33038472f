//! Animated structural-truss background: nodes, beams and load arrows that
//! drift, deform with scroll depth and shy away from the cursor.

mod canvas;
mod component;
mod error;
mod params;
mod render;
mod scene;
mod schedule;
mod state;
mod theme;
mod types;

pub use component::TrussFieldCanvas;
pub use error::TrussError;
pub use params::TrussParams;
pub use render::build_frame;
pub use scene::{DrawCmd, DrawList, Stroke};
pub use state::TrussFieldState;
pub use theme::{Palette, Theme};
pub use types::{Beam, Load, Node, ScreenPoint, Viewport};
