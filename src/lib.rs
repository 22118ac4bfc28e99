//! BhaataPhod: a top-down arcade shooter
//!
//! The library is the simulation core. It knows nothing about windows,
//! textures or speakers: the binary feeds it an `InputSnapshot` each frame,
//! performs the returned `AudioCue`s, and hands it a `RenderSink` to draw
//! with.

pub mod animation;
pub mod assets;
pub mod collision;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod health;
pub mod input;
pub mod motion;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod render;
pub mod ufo;

pub use error::{GameError, Result};
pub use game::Game;
