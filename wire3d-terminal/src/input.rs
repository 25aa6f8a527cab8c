/// Keyboard state from crossterm key events
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wire3d_core::KeySet;

/// Map a key to the viewer key it stands for
pub fn key_flag(code: KeyCode) -> Option<KeySet> {
    let flag = match code {
        KeyCode::Left => KeySet::LEFT,
        KeyCode::Right => KeySet::RIGHT,
        KeyCode::Up => KeySet::UP,
        KeyCode::Down => KeySet::DOWN,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => KeySet::W,
            'a' => KeySet::A,
            's' => KeySet::S,
            'd' => KeySet::D,
            'q' => KeySet::Q,
            'e' => KeySet::E,
            'n' => KeySet::N,
            'm' => KeySet::M,
            'r' => KeySet::R,
            _ => return None,
        },
        _ => return None,
    };
    Some(flag)
}

fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Tracks which keys count as held for the current frame.
///
/// Terminals that report key releases keep a key held from press to release.
/// Otherwise each press or auto-repeat holds the key for the frame it arrives in.
#[derive(Debug, Default)]
pub struct KeyTracker {
    reports_releases: bool,
    held: KeySet,
    pulsed: KeySet,
    quit: bool,
}

impl KeyTracker {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            reports_releases,
            ..Self::default()
        }
    }

    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }

    pub fn handle(&mut self, event: &KeyEvent) {
        if event.kind != KeyEventKind::Release && is_quit(event) {
            self.quit = true;
            return;
        }
        let Some(flag) = key_flag(event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat if self.reports_releases => self.held.insert(flag),
            KeyEventKind::Press | KeyEventKind::Repeat => self.pulsed.insert(flag),
            KeyEventKind::Release => self.held.remove(flag),
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Keys for this frame; single-frame presses are consumed
    pub fn take_frame_keys(&mut self) -> KeySet {
        let keys = self.held | self.pulsed;
        self.pulsed = KeySet::empty();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_flag(KeyCode::Char('w')), Some(KeySet::W));
        assert_eq!(key_flag(KeyCode::Char('W')), Some(KeySet::W));
        assert_eq!(key_flag(KeyCode::Left), Some(KeySet::LEFT));
        assert_eq!(key_flag(KeyCode::Char('r')), Some(KeySet::R));
        assert_eq!(key_flag(KeyCode::Char('x')), None);
        assert_eq!(key_flag(KeyCode::Tab), None);
    }

    #[test]
    fn test_presses_last_one_frame_without_release_reports() {
        let mut tracker = KeyTracker::new(false);
        tracker.handle(&press(KeyCode::Char('a')));
        tracker.handle(&press(KeyCode::Right));

        assert_eq!(tracker.take_frame_keys(), KeySet::A | KeySet::RIGHT);
        assert_eq!(tracker.take_frame_keys(), KeySet::empty());
    }

    #[test]
    fn test_keys_held_until_release() {
        let mut tracker = KeyTracker::new(true);
        tracker.handle(&press(KeyCode::Char('s')));
        assert_eq!(tracker.take_frame_keys(), KeySet::S);
        assert_eq!(tracker.take_frame_keys(), KeySet::S);

        tracker.handle(&release(KeyCode::Char('s')));
        assert_eq!(tracker.take_frame_keys(), KeySet::empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut tracker = KeyTracker::new(false);
        tracker.handle(&press(KeyCode::Char('c')));
        assert!(!tracker.quit_requested());

        tracker.handle(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(tracker.quit_requested());

        let mut tracker = KeyTracker::new(true);
        tracker.handle(&release(KeyCode::Esc));
        assert!(!tracker.quit_requested());
        tracker.handle(&press(KeyCode::Esc));
        assert!(tracker.quit_requested());
    }
}
