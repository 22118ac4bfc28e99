//! SDL2 window, textures, input and rodio audio for the game binary

pub mod audio;
pub mod input_system;
pub mod render;
pub mod text;
pub mod textures;

pub use audio::AudioManager;
pub use input_system::InputSystem;
pub use render::SdlRenderer;
pub use textures::TextureStore;
