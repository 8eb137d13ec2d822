//! Sound effects
//!
//! Three one-shot cues (shoot, hit, explosion) loaded from WAV files through
//! SDL2 core audio. Sound is never allowed to stop the game: a missing audio
//! device or file swaps in a silent player, and a playback failure is logged
//! and dropped.

use crate::game::session::GameEvent;
use sdl2::audio::{AudioCVT, AudioFormat, AudioQueue, AudioSpecDesired, AudioSpecWAV};
use sdl2::Sdl;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// Errors that can occur while loading or playing sounds
#[derive(Debug, Clone)]
pub enum AudioError {
    /// Audio subsystem or output device unavailable
    Subsystem(String),

    /// WAV file missing or unreadable
    Load { path: String, reason: String },

    /// WAV data could not be converted to the device format
    Convert(String),

    /// The device rejected queued samples
    Playback(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AudioError::Subsystem(reason) => write!(f, "Audio unavailable: {}", reason),
            AudioError::Load { path, reason } => write!(f, "Failed to load {}: {}", path, reason),
            AudioError::Convert(reason) => write!(f, "Failed to convert audio: {}", reason),
            AudioError::Playback(reason) => write!(f, "Playback failed: {}", reason),
        }
    }
}

impl std::error::Error for AudioError {}

impl From<AudioError> for String {
    fn from(error: AudioError) -> Self {
        error.to_string()
    }
}

/// The game's sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Shoot,
    Hit,
    Explosion,
}

impl SoundCue {
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Shoot => "shoot.wav",
            SoundCue::Hit => "hit.wav",
            SoundCue::Explosion => "explosion.wav",
        }
    }

    /// Cue that accompanies a gameplay event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Shot => Some(SoundCue::Shoot),
            GameEvent::EnemyDestroyed => Some(SoundCue::Hit),
            GameEvent::EnemyEscaped => Some(SoundCue::Explosion),
            GameEvent::LifeLost { .. } | GameEvent::GameOver { .. } => None,
        }
    }
}

/// Something that can play one sound, fire-and-forget
pub trait SoundPlayer {
    fn play(&self) -> Result<(), AudioError>;
}

/// Stand-in used whenever a real sound is unavailable
pub struct SilentSound;

impl SoundPlayer for SilentSound {
    fn play(&self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Decoded WAV samples played through a shared output queue
///
/// A new cue replaces whatever is still queued, so rapid fire never builds
/// up a backlog of stale sounds.
pub struct WavSound {
    samples: Vec<i16>,
    queue: Rc<AudioQueue<i16>>,
}

impl WavSound {
    /// Loads a WAV file and converts it to the queue's output format
    pub fn load(path: &Path, queue: Rc<AudioQueue<i16>>) -> Result<Self, AudioError> {
        let wav = AudioSpecWAV::load_wav(path).map_err(|reason| AudioError::Load {
            path: path.display().to_string(),
            reason,
        })?;

        let spec = queue.spec();
        let cvt = AudioCVT::new(
            wav.format,
            wav.channels,
            wav.freq,
            AudioFormat::s16_sys(),
            spec.channels,
            spec.freq,
        )
        .map_err(AudioError::Convert)?;

        let bytes = cvt.convert(wav.buffer().to_vec());
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_ne_bytes([pair[0], pair[1]]))
            .collect();

        Ok(WavSound { samples, queue })
    }
}

impl SoundPlayer for WavSound {
    fn play(&self) -> Result<(), AudioError> {
        self.queue.clear();
        self.queue
            .queue_audio(&self.samples)
            .map_err(AudioError::Playback)?;
        self.queue.resume();
        Ok(())
    }
}

/// The three cues, each backed by a real or silent player
pub struct SoundBank {
    shoot: Box<dyn SoundPlayer>,
    hit: Box<dyn SoundPlayer>,
    explosion: Box<dyn SoundPlayer>,
}

impl SoundBank {
    pub fn with_players(
        shoot: Box<dyn SoundPlayer>,
        hit: Box<dyn SoundPlayer>,
        explosion: Box<dyn SoundPlayer>,
    ) -> Self {
        SoundBank {
            shoot,
            hit,
            explosion,
        }
    }

    /// A bank where every cue is a no-op
    pub fn silent() -> Self {
        Self::with_players(Box::new(SilentSound), Box::new(SilentSound), Box::new(SilentSound))
    }

    /// Loads every cue from `sound_dir`, substituting silence for anything missing
    ///
    /// Never fails: the worst case is a fully silent bank.
    pub fn load(sdl_context: &Sdl, sound_dir: &Path) -> Self {
        let queue = match open_output_queue(sdl_context) {
            Ok(queue) => Rc::new(queue),
            Err(e) => {
                log::warn!("{}; all sounds muted", e);
                return Self::silent();
            }
        };

        let load_cue = |cue: SoundCue| -> Box<dyn SoundPlayer> {
            let path = sound_dir.join(cue.file_name());
            match WavSound::load(&path, Rc::clone(&queue)) {
                Ok(sound) => {
                    log::info!("Loaded sound {}", path.display());
                    Box::new(sound)
                }
                Err(e) => {
                    log::warn!("{}; {:?} will be silent", e, cue);
                    Box::new(SilentSound)
                }
            }
        };

        Self::with_players(
            load_cue(SoundCue::Shoot),
            load_cue(SoundCue::Hit),
            load_cue(SoundCue::Explosion),
        )
    }

    /// Plays a cue; failures are logged and otherwise ignored
    pub fn play(&self, cue: SoundCue) {
        let player = match cue {
            SoundCue::Shoot => &self.shoot,
            SoundCue::Hit => &self.hit,
            SoundCue::Explosion => &self.explosion,
        };

        if let Err(e) = player.play() {
            log::warn!("{:?}: {}", cue, e);
        }
    }

    /// Plays the cue for every event that has one
    pub fn play_events(&self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(SoundCue::for_event) {
            self.play(cue);
        }
    }
}

/// Opens the default output device as a mono 16-bit queue
fn open_output_queue(sdl_context: &Sdl) -> Result<AudioQueue<i16>, AudioError> {
    let audio = sdl_context.audio().map_err(AudioError::Subsystem)?;
    let desired = AudioSpecDesired {
        freq: Some(44_100),
        channels: Some(1),
        samples: None,
    };
    audio
        .open_queue::<i16, _>(None, &desired)
        .map_err(AudioError::Subsystem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts calls and optionally fails every one of them
    struct CountingSound<'a> {
        calls: &'a Cell<u32>,
        fail: bool,
    }

    impl SoundPlayer for CountingSound<'_> {
        fn play(&self) -> Result<(), AudioError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(AudioError::Playback("device lost".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_silent_bank_plays_everything() {
        let bank = SoundBank::silent();
        bank.play(SoundCue::Shoot);
        bank.play(SoundCue::Hit);
        bank.play(SoundCue::Explosion);
    }

    #[test]
    fn test_event_cues() {
        assert_eq!(SoundCue::for_event(&GameEvent::Shot), Some(SoundCue::Shoot));
        assert_eq!(SoundCue::for_event(&GameEvent::EnemyDestroyed), Some(SoundCue::Hit));
        assert_eq!(SoundCue::for_event(&GameEvent::EnemyEscaped), Some(SoundCue::Explosion));
        assert_eq!(SoundCue::for_event(&GameEvent::GameOver { final_score: 10 }), None);
    }

    #[test]
    fn test_playback_failures_are_swallowed() {
        // Leaked so the boxed players can hold a 'static borrow
        let shots: &'static Cell<u32> = Box::leak(Box::new(Cell::new(0)));
        let hits: &'static Cell<u32> = Box::leak(Box::new(Cell::new(0)));

        let bank = SoundBank::with_players(
            Box::new(CountingSound { calls: shots, fail: true }),
            Box::new(CountingSound { calls: hits, fail: false }),
            Box::new(SilentSound),
        );

        bank.play_events(&[
            GameEvent::Shot,
            GameEvent::EnemyDestroyed,
            GameEvent::Shot,
            GameEvent::LifeLost { lives_left: 1 },
        ]);

        assert_eq!(shots.get(), 2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = AudioError::Load {
            path: "assets/sounds/hit.wav".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(String::from(err), "Failed to load assets/sounds/hit.wav: not found");
    }
}
