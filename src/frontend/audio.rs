//! Sound effects and music tracks, played with rodio
//!
//! Clips are read into memory at startup. One-shot effects get a detached
//! sink each; looping tracks keep a named sink so they can be paused,
//! resumed and stopped. If no output device opens, the game runs silent.

use bhaata_phod::assets::SoundId;
use bhaata_phod::events::AudioCue;
use bhaata_phod::{GameError, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct AudioManager {
    stream: Option<OutputStream>,
    clips: HashMap<SoundId, Arc<[u8]>>,
    tracks: HashMap<SoundId, Sink>,
}

impl AudioManager {
    /// Reads every clip from `directory` and opens the default device.
    ///
    /// A missing clip is an error; a missing device only disables sound.
    pub fn load(directory: &Path) -> Result<Self> {
        let mut clips = HashMap::new();
        for id in SoundId::ALL {
            let path = directory.join(id.file_name());
            let bytes = std::fs::read(&path).map_err(|e| GameError::AssetLoad {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
            clips.insert(id, Arc::from(bytes));
        }

        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => {
                info!("Audio output opened");
                Some(stream)
            }
            Err(e) => {
                warn!("No audio output, continuing without sound: {}", e);
                None
            }
        };

        Ok(AudioManager {
            stream,
            clips,
            tracks: HashMap::new(),
        })
    }

    pub fn perform(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::Play(id) => self.play_once(id),
            AudioCue::Loop(id) => self.play_loop(id),
            AudioCue::Stop(id) => {
                if let Some(sink) = self.tracks.remove(&id) {
                    sink.stop();
                }
            }
            AudioCue::Pause(id) => {
                if let Some(sink) = self.tracks.get(&id) {
                    sink.pause();
                }
            }
            AudioCue::Resume(id) => {
                if let Some(sink) = self.tracks.get(&id) {
                    sink.play();
                }
            }
        }
    }

    fn decode(&self, id: SoundId) -> Option<Decoder<Cursor<Arc<[u8]>>>> {
        let bytes = self.clips.get(&id)?.clone();
        match Decoder::new(Cursor::new(bytes)) {
            Ok(source) => Some(source),
            Err(e) => {
                warn!("Cannot decode {}: {}", id.file_name(), e);
                None
            }
        }
    }

    fn play_once(&self, id: SoundId) {
        let Some(stream) = &self.stream else {
            return;
        };
        if let Some(source) = self.decode(id) {
            let sink = Sink::connect_new(stream.mixer());
            sink.append(source);
            sink.detach();
        }
    }

    /// Starts `id` from the beginning, replacing any copy already playing.
    fn play_loop(&mut self, id: SoundId) {
        let Some(stream) = &self.stream else {
            return;
        };
        let Some(source) = self.decode(id) else {
            return;
        };

        let sink = Sink::connect_new(stream.mixer());
        sink.append(source.repeat_infinite());
        if let Some(old) = self.tracks.insert(id, sink) {
            old.stop();
        }
    }
}
