//! Skip redraws when nothing on screen changed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::SessionSnapshot;
use crate::shell::{Cursor, Overlay, SettingsField};

/// Decides whether a frame needs to be drawn.
///
/// A frame is drawn when its fingerprint changes, and otherwise at most once
/// per `refresh_ms` so the screen heals after external damage.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Forget the last frame so the next call renders (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_ms;
        if changed || stale {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }
}

/// Hash of everything the game view draws.
pub fn frame_fingerprint(snap: &SessionSnapshot, cursor: Cursor, overlay: &Overlay) -> u64 {
    let mut h = DefaultHasher::new();
    snap.hash(&mut h);
    cursor.index().hash(&mut h);
    match overlay {
        Overlay::None => 0u8.hash(&mut h),
        Overlay::Settings(dialog) => {
            1u8.hash(&mut h);
            dialog.card_count().hash(&mut h);
            dialog.countdown_secs().hash(&mut h);
            matches!(dialog.field(), SettingsField::Countdown).hash(&mut h);
            dialog.error().is_some().hash(&mut h);
        }
        Overlay::TimeUp(dialog) => {
            2u8.hash(&mut h);
            dialog.won().hash(&mut h);
        }
    }
    h.finish()
}
