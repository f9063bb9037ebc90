//! Scene, layout and animation logic for the tree visualizer.
//!
//! Platform-free: the web frontend feeds a [`state::FrameInput`] per display
//! frame and reads back positions, transforms and shader uniform values. All
//! motion is goal-seeking exponential damping; there is no physics here.

pub mod anim;
pub mod config;
pub mod constants;
pub mod field;
pub mod images;
pub mod layout;
pub mod photos;
pub mod scene;
pub mod state;
pub mod swarm;

pub use anim::*;
pub use config::*;
pub use layout::*;
pub use field::*;
pub use images::*;
pub use photos::*;
pub use scene::*;
pub use state::*;
pub use swarm::*;
