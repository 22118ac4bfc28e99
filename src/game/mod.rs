// Game module - the simulation core and its screen state machine
//
// This module contains:
// - types.rs: GameState and FrameOutput
// - session.rs: score, health, counters and timers of one session
// - world.rs: World struct owning every entity
// - spawner.rs: initial wave, periodic spawns, reinforcements, firing
// - update.rs: motion stage
// - collisions.rs: collision resolver
// - menu.rs: title screen buttons
// - orchestrator.rs: Game struct and the per-frame pipeline
// - rendering.rs: drawing each screen to a RenderSink

// Module declarations
pub mod types;
pub mod session;
pub mod world;
pub mod spawner;
pub mod update;
pub mod collisions;
pub mod menu;
pub mod orchestrator;
pub mod rendering;

// Re-export types for convenience
pub use types::*;
pub use orchestrator::Game;
pub use session::SessionState;
pub use world::World;
