//! Rendering front-end support
//!
//! The core does not own a surface. It hands the front end a `RenderFrame`
//! of circle instances each tick.

pub mod frame;
pub mod instance;

pub use frame::RenderFrame;
pub use instance::CircleInstance;
