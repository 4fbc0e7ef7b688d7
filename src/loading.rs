//! Indeterminate loading strip rendered under the text line.
//!
//! While active, a short highlighted segment sweeps across a dim track,
//! advanced by tick messages. Ticks carry the instance id and a sequence
//! tag so a strip that was stopped and restarted ignores ticks scheduled
//! for the earlier run.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const DEFAULT_FPS: Duration = Duration::from_millis(80);
const TRACK_RUNE: char = '─';
const SEGMENT_RUNE: char = '━';

/// Message that advances the sweep by one frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the strip instance this tick targets.
    pub id: i64,
    tag: i64,
}

/// Loading strip state and styling.
#[derive(Debug)]
pub struct Model {
    /// Style of the sweeping segment.
    pub style: Style,
    /// Style of the track behind the segment.
    pub track_style: Style,
    /// Delay between frames; smaller is faster.
    pub fps: Duration,
    frame: usize,
    active: bool,
    id: i64,
    tag: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an inactive strip with default styling.
    pub fn new() -> Self {
        Self {
            style: Style::new().foreground(Color::from("12")),
            track_style: Style::new().foreground(Color::from("238")),
            fps: DEFAULT_FPS,
            frame: 0,
            active: false,
            id: next_id(),
            tag: 0,
        }
    }

    /// Returns the strip's unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns whether the strip is animating.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts the animation, returning the command that drives it.
    ///
    /// Starting an already running strip is a no-op.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.active {
            return None;
        }
        self.active = true;
        self.frame = 0;
        Some(self.tick())
    }

    /// Stops the animation. In-flight ticks become stale and are dropped.
    pub fn stop(&mut self) {
        self.active = false;
        self.tag += 1;
    }

    /// Handles tick messages; other messages are ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;
        if !self.active || tick_msg.id != self.id || tick_msg.tag != self.tag {
            return None;
        }
        self.frame = self.frame.wrapping_add(1);
        Some(self.tick())
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.fps, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Renders the strip at the given width. Inactive or zero-width strips
    /// render nothing.
    pub fn view(&self, width: usize) -> String {
        if !self.active || width == 0 {
            return String::new();
        }

        let segment = (width / 4).max(1);
        let cycle = width + segment;
        let head = self.frame % cycle;

        let mut out = String::new();
        for i in 0..width {
            // The segment occupies [head - segment, head).
            let lit = i + segment > head && i < head;
            if lit {
                out.push_str(&self.style.render(&SEGMENT_RUNE.to_string()));
            } else {
                out.push_str(&self.track_style.render(&TRACK_RUNE.to_string()));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_renders_nothing() {
        let m = Model::new();
        assert_eq!(m.view(20), "");
    }

    #[test]
    fn start_is_idempotent() {
        let mut m = Model::new();
        assert!(m.start().is_some());
        assert!(m.start().is_none());
        assert!(m.is_active());
    }

    #[test]
    fn ticks_advance_frames_and_stale_ticks_are_dropped() {
        let mut m = Model::new();
        let _ = m.start();

        let live: Msg = Box::new(TickMsg { id: m.id, tag: m.tag });
        assert!(m.update(&live).is_some());
        assert_eq!(m.frame, 1);

        m.stop();
        let stale: Msg = Box::new(TickMsg { id: m.id, tag: m.tag - 1 });
        assert!(m.update(&stale).is_none());
        assert_eq!(m.frame, 1);
    }

    #[test]
    fn view_width_is_stable_across_frames() {
        let mut m = Model::new();
        let _ = m.start();
        for _ in 0..50 {
            let line = m.view(10);
            let visible: usize = line.chars().filter(|c| *c == TRACK_RUNE || *c == SEGMENT_RUNE).count();
            assert_eq!(visible, 10);
            let live: Msg = Box::new(TickMsg { id: m.id, tag: m.tag });
            let _ = m.update(&live);
        }
    }
}
