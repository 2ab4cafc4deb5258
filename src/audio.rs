//! Sound effects
//!
//! Five short clips, triggered by simulation events. Playback goes through
//! `HtmlAudioElement` in the browser; native builds only get the event mapping.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bird flaps
    Flap,
    /// Pipe passed
    Point,
    /// Bird hits a pipe
    Hit,
    /// Bird hits the ground
    Die,
    /// Run starts
    Swooshing,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::Flap,
        SoundEffect::Point,
        SoundEffect::Hit,
        SoundEffect::Die,
        SoundEffect::Swooshing,
    ];

    /// Asset path, relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            SoundEffect::Flap => "audio/audio_sfx_flap.wav",
            SoundEffect::Point => "audio/audio_sfx_point.wav",
            SoundEffect::Hit => "audio/audio_sfx_hit.wav",
            SoundEffect::Die => "audio/audio_sfx_die.wav",
            SoundEffect::Swooshing => "audio/audio_sfx_swooshing.wav",
        }
    }

    /// The clip that accompanies a game event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Started => Some(SoundEffect::Swooshing),
            GameEvent::Flapped => Some(SoundEffect::Flap),
            GameEvent::Scored { .. } => Some(SoundEffect::Point),
            GameEvent::HitPipe => Some(SoundEffect::Hit),
            GameEvent::HitGround => Some(SoundEffect::Die),
            GameEvent::Restarted => None,
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn index(&self) -> usize {
        match self {
            SoundEffect::Flap => 0,
            SoundEffect::Point => 1,
            SoundEffect::Hit => 2,
            SoundEffect::Die => 3,
            SoundEffect::Swooshing => 4,
        }
    }
}

/// Volume and mute state shared by every clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixer {
    volume: f32,
    muted: bool,
}

impl Mixer {
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            muted: false,
        }
    }

    /// Set playback volume (0.0 - 1.0); muting is separate
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Volume to play at, or None when nothing should be heard
    pub fn output(&self) -> Option<f32> {
        (!self.muted && self.volume > 0.0).then_some(self.volume)
    }
}

/// Audio manager for the game (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct AudioManager {
    clips: Vec<Option<web_sys::HtmlAudioElement>>,
    mixer: Mixer,
}

#[cfg(target_arch = "wasm32")]
impl AudioManager {
    /// Start loading every clip; missing clips are skipped at play time
    pub fn new(volume: f32) -> Self {
        let clips = SoundEffect::ALL
            .iter()
            .map(|effect| {
                let clip = web_sys::HtmlAudioElement::new_with_src(effect.path()).ok();
                if clip.is_none() {
                    log::warn!("Failed to create audio element for {:?}", effect);
                }
                clip
            })
            .collect();
        Self {
            clips,
            mixer: Mixer::new(volume),
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.mixer.set_volume(volume);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.mixer.set_muted(muted);
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let Some(volume) = self.mixer.output() else {
            return;
        };
        let Some(Some(clip)) = self.clips.get(effect.index()) else {
            return;
        };

        clip.set_volume(volume as f64);
        // Rewind so rapid flaps retrigger instead of waiting for the clip to end
        clip.set_current_time(0.0);
        // play() rejects until the first user gesture; nothing to do about it
        let _ = clip.play();
    }

    /// Play the clips for a batch of events
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
