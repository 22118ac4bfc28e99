//! Sprite textures, loaded once at startup

use bhaata_phod::assets::{AssetTable, SpriteId};
use bhaata_phod::geometry::Size;
use bhaata_phod::{GameError, Result};
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

pub struct TextureStore<'a> {
    textures: HashMap<SpriteId, Texture<'a>>,
}

impl<'a> TextureStore<'a> {
    /// Loads every sprite from `directory`. Any missing or unreadable file
    /// is fatal.
    pub fn load(creator: &'a TextureCreator<WindowContext>, directory: &Path) -> Result<Self> {
        let mut textures = HashMap::new();

        for id in SpriteId::ALL {
            let path = directory.join(id.file_name());
            let texture = creator
                .load_texture(&path)
                .map_err(|reason| GameError::AssetLoad {
                    path: path.clone(),
                    reason,
                })?;
            debug!("Loaded {}", path.display());
            textures.insert(id, texture);
        }

        info!("Loaded {} textures from {}", textures.len(), directory.display());
        Ok(TextureStore { textures })
    }

    pub fn get(&self, id: SpriteId) -> Option<&Texture<'a>> {
        self.textures.get(&id)
    }

    /// Pixel sizes of every loaded texture, for the simulation.
    pub fn asset_table(&self) -> AssetTable {
        let mut table = AssetTable::new();
        for (id, texture) in &self.textures {
            let query = texture.query();
            table.insert(*id, Size::new(query.width as f32, query.height as f32));
        }
        table
    }
}
