//! Popup lifecycle: a controller resource owning at most one live session.
//!
//! The session tracks the transient interaction state the popup needs between
//! frames: where it was opened, whether a button press is in flight, and the
//! modifier state captured when that press began. Shift-release detection is
//! the one periodic concern; it runs on a repeating [`Timer`] so dismissal
//! lands within one poll interval of the key going up.

use std::time::Duration;

use bevy::prelude::*;

/// Keyboard modifier state captured at an event boundary (press/release).
#[derive(Clone, Copy, Default, Debug)]
pub struct ModifierSnapshot {
    pub shift: bool,
    pub alt: bool,
}

/// Transient state for one popup invocation.
#[derive(Debug)]
pub struct PopupSession {
    anchor: Vec2,
    pressed: bool,
    shift_at_press: bool,
    alt_held: bool,
    shift_poll: Option<Timer>,
}

impl PopupSession {
    pub fn new(anchor: Vec2) -> Self {
        Self {
            anchor,
            pressed: false,
            shift_at_press: false,
            alt_held: false,
            shift_poll: None,
        }
    }

    /// Cursor position the popup is centered on, in window coordinates.
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Alt state captured at the most recent press.
    pub fn alt_held(&self) -> bool {
        self.alt_held
    }

    /// Record a pointer press inside the popup. Modifier state is snapshotted
    /// here so the click that follows uses press-time modifiers, never stale
    /// ones from an earlier press.
    pub fn note_press(&mut self, mods: ModifierSnapshot, poll_interval: Duration) {
        self.pressed = true;
        self.alt_held = mods.alt;
        self.shift_at_press = mods.shift;
        if mods.shift && self.shift_poll.is_none() {
            self.shift_poll = Some(Timer::new(poll_interval, TimerMode::Repeating));
        }
    }

    /// Record a pointer release. Returns `true` when the popup should close:
    /// a completed press-release cycle that did not start with Shift held.
    pub fn note_release(&mut self) -> bool {
        let close = self.pressed && !self.shift_at_press;
        self.pressed = false;
        close
    }

    /// Advance the Shift-release poll. Returns `true` when Shift was held at
    /// press time but is no longer down, i.e. the popup should close.
    ///
    /// Sampling happens only when the timer fires, keeping the cadence at the
    /// configured interval rather than per frame.
    pub fn tick(&mut self, delta: Duration, shift_down: bool) -> bool {
        let Some(timer) = self.shift_poll.as_mut() else {
            return false;
        };
        timer.tick(delta);
        if !timer.just_finished() {
            return false;
        }
        if shift_down {
            return false;
        }

        self.shift_poll = None;
        let close = self.shift_at_press;
        self.shift_at_press = false;
        close
    }
}

/// Controller resource owning at most one live [`PopupSession`].
///
/// Invoking [`SnapPopup::open_at`] while a session exists drops the old one
/// before the new one is created, so two popups can never be visible at once.
#[derive(Resource, Default, Debug)]
pub struct SnapPopup {
    session: Option<PopupSession>,
}

impl SnapPopup {
    /// Open a popup centered on `anchor`, replacing any existing session.
    pub fn open_at(&mut self, anchor: Vec2) {
        if self.session.take().is_some() {
            debug!("snap popup reopened, replacing previous session");
        }
        self.session = Some(PopupSession::new(anchor));
    }

    /// Dismiss the popup.
    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PopupSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PopupSession> {
        self.session.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLL: Duration = Duration::from_millis(100);

    fn mods(shift: bool, alt: bool) -> ModifierSnapshot {
        ModifierSnapshot { shift, alt }
    }

    #[test]
    fn release_without_shift_closes() {
        let mut session = PopupSession::new(Vec2::ZERO);
        session.note_press(mods(false, false), POLL);
        assert!(session.note_release());
    }

    #[test]
    fn release_with_shift_held_at_press_keeps_open() {
        let mut session = PopupSession::new(Vec2::ZERO);
        session.note_press(mods(true, false), POLL);
        assert!(!session.note_release());
    }

    #[test]
    fn release_without_prior_press_does_not_close() {
        let mut session = PopupSession::new(Vec2::ZERO);
        assert!(!session.note_release());
    }

    #[test]
    fn shift_release_detected_within_one_poll_interval() {
        let mut session = PopupSession::new(Vec2::ZERO);
        session.note_press(mods(true, false), POLL);
        session.note_release();

        // Shift still down: poll fires but nothing happens
        assert!(!session.tick(POLL, true));
        // Shift released: the very next poll closes the popup
        assert!(session.tick(POLL, false));
    }

    #[test]
    fn shift_release_between_polls_waits_for_the_tick() {
        let mut session = PopupSession::new(Vec2::ZERO);
        session.note_press(mods(true, false), POLL);

        // 50ms in, shift already up, but the poll has not fired yet
        assert!(!session.tick(Duration::from_millis(50), false));
        // 100ms mark reached: dismissal resolves
        assert!(session.tick(Duration::from_millis(50), false));
    }

    #[test]
    fn tick_is_inert_without_a_shift_press() {
        let mut session = PopupSession::new(Vec2::ZERO);
        session.note_press(mods(false, true), POLL);
        assert!(!session.tick(POLL, false));
        assert!(!session.tick(POLL, true));
    }

    #[test]
    fn alt_snapshot_refreshes_on_every_press() {
        let mut session = PopupSession::new(Vec2::ZERO);
        session.note_press(mods(false, true), POLL);
        assert!(session.alt_held());

        session.note_release();
        session.note_press(mods(false, false), POLL);
        assert!(!session.alt_held());
    }

    #[test]
    fn open_at_replaces_existing_session() {
        let mut popup = SnapPopup::default();
        popup.open_at(Vec2::new(10.0, 10.0));
        assert!(popup.is_open());

        popup.open_at(Vec2::new(200.0, 300.0));
        assert!(popup.is_open());
        let session = popup.session().unwrap();
        assert_eq!(session.anchor(), Vec2::new(200.0, 300.0));
    }

    #[test]
    fn replacement_discards_in_flight_press_state() {
        let mut popup = SnapPopup::default();
        popup.open_at(Vec2::ZERO);
        popup
            .session_mut()
            .unwrap()
            .note_press(mods(true, true), POLL);

        popup.open_at(Vec2::ZERO);
        let session = popup.session_mut().unwrap();
        assert!(!session.alt_held());
        assert!(!session.note_release());
        assert!(!session.tick(POLL, false));
    }

    #[test]
    fn close_drops_the_session() {
        let mut popup = SnapPopup::default();
        popup.open_at(Vec2::ZERO);
        popup.close();
        assert!(!popup.is_open());
        assert!(popup.session().is_none());
    }
}
