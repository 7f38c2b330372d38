use std::io::Write;

use log::{debug, warn};

use crate::core::GameEvent;

pub const EXPLOSION: &str = "resources/explosion_x.wav";
pub const SPLASH: &str = "resources/splash2.wav";
pub const CRASH: &str = "resources/crash_x.wav";

/// Sound asset for an event, if it has one.
pub fn asset_for(event: &GameEvent) -> Option<&'static str> {
    match event {
        GameEvent::PlayerHit { .. } => Some(EXPLOSION),
        GameEvent::PlayerMiss { .. } => Some(SPLASH),
        GameEvent::ComputerHit { .. } => Some(CRASH),
        GameEvent::ComputerMiss { .. } | GameEvent::GameOver { .. } => None,
    }
}

/// Terminal stand-in for an audio device: rings the bell.
#[derive(Debug, Clone, Copy)]
pub struct SoundPlayer {
    enabled: bool,
}

impl SoundPlayer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Play the cue for `event`. Failures are logged and otherwise ignored.
    /// Returns the asset that was cued.
    pub fn play<W: Write>(&self, out: &mut W, event: &GameEvent) -> Option<&'static str> {
        let asset = asset_for(event)?;
        debug!("sound cue {}", asset);
        if self.enabled {
            if let Err(e) = out.write_all(b"\x07").and_then(|()| out.flush()) {
                warn!("unable to play sound {}: {}", asset, e);
            }
        }
        Some(asset)
    }
}
