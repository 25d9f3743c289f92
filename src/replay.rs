//! Timed "reveal over time" engines for the hero section.
//!
//! Engines never own a timer. The UI asks for [`Playback::next_delay`], sleeps that
//! long with the single timer it owns for the engine, then calls
//! [`Playback::advance`]. A `None` delay means the engine is finished until
//! something resets it.

use std::time::Duration;

pub trait Playback {
    fn next_delay(&self) -> Option<Duration>;
    fn advance(&mut self);
}

/// A scheduled callback that can be called off, e.g. a browser timeout.
pub trait Cancel {
    fn cancel(self);
}

/// Holds at most one pending handle. Installing a new one cancels the previous.
#[derive(Debug)]
pub struct Pending<H: Cancel>(Option<H>);

impl<H: Cancel> Default for Pending<H> {
    fn default() -> Self {
        Self(None)
    }
}

impl<H: Cancel> Pending<H> {
    pub fn install(&mut self, handle: H) {
        self.cancel();
        self.0 = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub full_dwell: Duration,
    pub empty_dwell: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            full_dwell: Duration::from_millis(2000),
            empty_dwell: Duration::from_millis(500),
        }
    }
}

/// Types a title one character at a time, holds it, deletes it, moves to the next.
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: &'static [&'static str],
    index: usize,
    /// Number of chars of the current title on display.
    shown: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(titles: &'static [&'static str]) -> Self {
        Self::with_timing(titles, TypewriterTiming::default())
    }

    pub fn with_timing(titles: &'static [&'static str], timing: TypewriterTiming) -> Self {
        Self {
            titles,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            timing,
        }
    }

    fn title(&self) -> &'static str {
        self.titles.get(self.index).copied().unwrap_or_default()
    }

    fn title_len(&self) -> usize {
        self.title().chars().count()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn title_index(&self) -> usize {
        self.index
    }

    /// The visible prefix of the current title.
    pub fn text(&self) -> &'static str {
        let title = self.title();
        let end = title
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(title.len());
        &title[..end]
    }

    fn type_char(&mut self) {
        self.shown = (self.shown + 1).min(self.title_len());
    }

    fn delete_char(&mut self) {
        self.shown = self.shown.saturating_sub(1);
    }
}

impl Playback for Typewriter {
    fn next_delay(&self) -> Option<Duration> {
        let delay = match self.phase {
            Phase::Typing => self.timing.type_delay,
            Phase::PausedFull => self.timing.full_dwell,
            Phase::Deleting => self.timing.delete_delay,
            Phase::PausedEmpty => self.timing.empty_dwell,
        };
        Some(delay)
    }

    fn advance(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.shown < self.title_len() {
                    self.type_char();
                } else {
                    self.phase = Phase::PausedFull;
                }
            }
            Phase::PausedFull => {
                self.phase = Phase::Deleting;
                self.delete_char();
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.delete_char();
                } else {
                    self.index = match self.titles.len() {
                        0 => 0,
                        n => (self.index + 1) % n,
                    };
                    self.phase = Phase::PausedEmpty;
                }
            }
            Phase::PausedEmpty => {
                self.phase = Phase::Typing;
                self.type_char();
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: &'static str,
}

impl TerminalLine {
    pub const fn new(kind: LineKind, text: &'static str) -> Self {
        Self { kind, text }
    }
}

pub const DEFAULT_REPLAY_INTERVAL: Duration = Duration::from_millis(500);

/// Reveals a fixed script one line per interval.
#[derive(Debug, Clone)]
pub struct TerminalReplay {
    lines: &'static [TerminalLine],
    revealed: usize,
    interval: Duration,
}

impl TerminalReplay {
    pub fn new(lines: &'static [TerminalLine], interval: Duration) -> Self {
        Self {
            lines,
            revealed: 0,
            interval,
        }
    }

    pub fn revealed_lines(&self) -> &'static [TerminalLine] {
        &self.lines[..self.revealed]
    }

    /// True while more lines are still to come.
    pub fn is_typing(&self) -> bool {
        self.revealed < self.lines.len()
    }

    pub fn reset(&mut self) {
        self.revealed = 0;
    }
}

impl Playback for TerminalReplay {
    fn next_delay(&self) -> Option<Duration> {
        self.is_typing().then_some(self.interval)
    }

    fn advance(&mut self) {
        if self.is_typing() {
            self.revealed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// Timer handle that records its id when cancelled.
    struct FakeTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for FakeTimer {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    /// Runs an engine against a virtual clock; returns how many ticks fired.
    fn run_for<P: Playback>(engine: &mut P, elapsed: Duration) -> usize {
        let mut now = Duration::ZERO;
        let mut fired = 0;
        while let Some(delay) = engine.next_delay() {
            if now + delay > elapsed {
                break;
            }
            now += delay;
            engine.advance();
            fired += 1;
        }
        fired
    }

    const SCRIPT: &[TerminalLine] = &[
        TerminalLine::new(LineKind::Command, "$ whoami"),
        TerminalLine::new(LineKind::Output, "someone"),
        TerminalLine::new(LineKind::Command, "$ exit"),
    ];

    #[test]
    fn test_replay_reveals_on_interval() {
        let t = Duration::from_millis(500);
        let mut replay = TerminalReplay::new(SCRIPT, t);
        assert!(replay.revealed_lines().is_empty());

        run_for(&mut replay, t * 5 / 2);
        assert_eq!(replay.revealed_lines(), &SCRIPT[..2]);
        assert!(replay.is_typing());

        let mut replay = TerminalReplay::new(SCRIPT, t);
        let fired = run_for(&mut replay, t * 3 + Duration::from_millis(1));
        assert_eq!(fired, 3);
        assert_eq!(replay.revealed_lines(), SCRIPT);
        assert!(!replay.is_typing());
        assert_eq!(replay.next_delay(), None);

        // nothing left to schedule, however long we wait
        assert_eq!(run_for(&mut replay, t * 100), 0);
    }

    #[test]
    fn test_replay_prefix_grows_monotonically() {
        let mut replay = TerminalReplay::new(SCRIPT, DEFAULT_REPLAY_INTERVAL);
        let mut last = 0;
        for _ in 0..10 {
            replay.advance();
            let shown = replay.revealed_lines();
            assert!(shown.len() >= last);
            assert_eq!(shown, &SCRIPT[..shown.len()]);
            last = shown.len();
        }
        assert_eq!(last, SCRIPT.len());
    }

    #[test]
    fn test_replay_reset_restarts() {
        let mut replay = TerminalReplay::new(SCRIPT, DEFAULT_REPLAY_INTERVAL);
        replay.advance();
        replay.reset();
        assert!(replay.revealed_lines().is_empty());
        assert_eq!(replay.next_delay(), Some(DEFAULT_REPLAY_INTERVAL));

        run_for(&mut replay, Duration::from_secs(60));
        replay.reset();
        assert!(replay.is_typing());
    }

    #[test]
    fn test_typewriter_trace() {
        static TITLES: &[&str] = &["A", "BB"];
        let mut tw = Typewriter::new(TITLES);
        let mut trace = vec![tw.text()];
        for _ in 0..11 {
            tw.advance();
            trace.push(tw.text());
        }
        assert_eq!(
            trace,
            vec!["", "A", "A", "", "", "B", "BB", "BB", "B", "", "", "A"]
        );
        assert_eq!(tw.title_index(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_typewriter_phase_delays() {
        static TITLES: &[&str] = &["ok"];
        let timing = TypewriterTiming::default();
        let mut tw = Typewriter::new(TITLES);
        let mut delays = Vec::new();
        for _ in 0..7 {
            delays.push((tw.phase(), tw.next_delay()));
            tw.advance();
        }
        assert_eq!(
            delays,
            vec![
                (Phase::Typing, Some(timing.type_delay)),
                (Phase::Typing, Some(timing.type_delay)),
                (Phase::Typing, Some(timing.type_delay)),
                (Phase::PausedFull, Some(timing.full_dwell)),
                (Phase::Deleting, Some(timing.delete_delay)),
                (Phase::Deleting, Some(timing.delete_delay)),
                (Phase::PausedEmpty, Some(timing.empty_dwell)),
            ]
        );
    }

    #[test]
    fn test_typewriter_shows_prefix_on_char_boundaries() {
        static TITLES: &[&str] = &["héllo 🟢", "x"];
        let mut tw = Typewriter::new(TITLES);
        for _ in 0..40 {
            let title = TITLES[tw.title_index()];
            assert!(title.starts_with(tw.text()));
            tw.advance();
        }
    }

    #[test]
    fn test_typewriter_without_titles() {
        let mut tw = Typewriter::new(&[]);
        for _ in 0..5 {
            tw.advance();
            assert_eq!(tw.text(), "");
        }
    }

    #[test]
    fn test_pending_keeps_a_single_timer() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let timer = |id| FakeTimer {
            id,
            cancelled: cancelled.clone(),
        };
        let mut pending = Pending::default();
        assert!(!pending.is_pending());

        pending.install(timer(1));
        pending.install(timer(2));
        assert_eq!(*cancelled.borrow(), vec![1]);
        assert!(pending.is_pending());

        pending.cancel();
        pending.cancel();
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
        assert!(!pending.is_pending());
    }

    #[test]
    fn test_restarting_replay_replaces_the_pending_tick() {
        // every tick arms one timer; a reset mid-run arms again without waiting
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut pending = Pending::default();
        let mut replay = TerminalReplay::new(SCRIPT, DEFAULT_REPLAY_INTERVAL);
        let mut armed = 0;
        let mut arm = |pending: &mut Pending<FakeTimer>, replay: &TerminalReplay| {
            if replay.next_delay().is_some() {
                armed += 1;
                pending.install(FakeTimer {
                    id: armed,
                    cancelled: cancelled.clone(),
                });
            }
        };

        arm(&mut pending, &replay);
        replay.advance();
        arm(&mut pending, &replay);
        replay.reset();
        arm(&mut pending, &replay);

        assert!(pending.is_pending());
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
    }
}
