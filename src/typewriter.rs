//! Character-by-character text reveal.
//!
//! ARCHITECTURE
//! ============
//! Each animated element owns a [`Typewriter`]: the source text, a cursor into
//! it, and its timing. A single [`TypewriterScheduler`] advances every
//! typewriter against one virtual clock and reports what changed, so the host
//! only needs one interval timer and tests can step time by hand.
//!
//! Timeline for a text of N characters starting at `S` with cadence `c` and
//! caret hold `h`: character k appears at `S + (k - 1)c`, typing is found
//! complete at `S + Nc`, and the caret disappears at `S + Nc + h`. Empty text
//! skips straight to the hold.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::config::TypewriterConfig;
use crate::consts::CARET_BORDER;

/// Which part of the hero an element belongs to, read from its classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextCategory {
    Greeting,
    Name,
    HeroDescription,
    Other,
}

impl TextCategory {
    #[must_use]
    pub fn from_classes<'a, I>(classes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut category = Self::Other;
        for class in classes {
            let candidate = match class {
                "greeting" => Self::Greeting,
                "name" => Self::Name,
                "hero-description" => Self::HeroDescription,
                _ => continue,
            };
            if candidate.rank() < category.rank() {
                category = candidate;
            }
        }
        category
    }

    fn rank(self) -> u8 {
        match self {
            Self::Greeting => 0,
            Self::Name => 1,
            Self::HeroDescription => 2,
            Self::Other => 3,
        }
    }
}

/// Cadence, start delay and caret hold for one element, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypewriterTiming {
    pub cadence_ms: f64,
    pub start_delay_ms: f64,
    pub caret_hold_ms: f64,
}

impl TypewriterTiming {
    /// Slow reveal for a name heading animated on its own.
    #[must_use]
    pub fn name_only(config: &TypewriterConfig) -> Self {
        Self {
            cadence_ms: config.name_cadence_ms,
            start_delay_ms: config.name_only_start_ms,
            caret_hold_ms: config.name_caret_hold_ms,
        }
    }

    /// Staggered reveal for a `.typewriter-text` element at document position `index`.
    #[must_use]
    pub fn sequenced(category: TextCategory, index: usize, config: &TypewriterConfig) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let position = index as f64;
        let start_delay_ms = match category {
            TextCategory::Greeting => config.greeting_start_ms,
            TextCategory::Name => config.name_start_ms,
            TextCategory::HeroDescription => config.hero_description_start_ms,
            TextCategory::Other => config.other_start_base_ms + position * config.other_start_step_ms,
        };
        Self { cadence_ms: config.text_cadence_ms, start_delay_ms, caret_hold_ms: config.text_caret_hold_ms }
    }
}

/// CSS `animation-delay` for the hero line at `index`, formatted for a style property.
#[must_use]
pub fn stagger_delay(index: usize, config: &TypewriterConfig) -> String {
    #[allow(clippy::cast_precision_loss)]
    let seconds = index as f64 * config.stagger_step_s;
    format!("{seconds}s")
}

/// Inline styles set on an element before its text is blanked: the caret,
/// plus a single-line box when partial text must not reflow.
#[must_use]
pub fn typing_styles(nowrap: bool) -> Vec<(&'static str, &'static str)> {
    let mut styles = vec![("border-right", CARET_BORDER)];
    if nowrap {
        styles.extend([("white-space", "nowrap"), ("overflow", "hidden")]);
    }
    styles
}

/// Inline styles applied once the caret is removed.
#[must_use]
pub fn finished_styles(rewrap: bool) -> Vec<(&'static str, &'static str)> {
    let mut styles = vec![("border-right", "none")];
    if rewrap {
        styles.push(("white-space", "normal"));
    }
    styles
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Scheduled but the start delay has not elapsed.
    Waiting,
    Typing,
    /// Text complete, caret still showing.
    Holding,
    Done,
}

/// What a typewriter changed during one advance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// New displayed text, when at least one character was revealed.
    pub text: Option<String>,
    pub caret_removed: bool,
}

/// Reveal state for one element.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: Vec<char>,
    cursor: usize,
    timing: TypewriterTiming,
    phase: Phase,
    next_at_ms: f64,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str, timing: TypewriterTiming) -> Self {
        Self {
            text: text.chars().collect(),
            cursor: 0,
            timing,
            phase: Phase::Waiting,
            next_at_ms: timing.start_delay_ms.max(0.0),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// The caret shows from scheduling until the hold after completion.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.phase != Phase::Done
    }

    /// Exactly the first `cursor` characters of the source text.
    #[must_use]
    pub fn displayed(&self) -> String {
        self.text[..self.cursor].iter().collect()
    }

    /// Reveal the next character. Returns `false` once the text is exhausted.
    pub fn tick(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.cursor += 1;
        self.phase = Phase::Typing;
        true
    }

    /// Run every timer firing due at or before `now_ms`.
    pub fn advance_to(&mut self, now_ms: f64) -> Option<Frame> {
        let mut revealed = false;
        let mut caret_removed = false;

        while self.phase != Phase::Done && now_ms >= self.next_at_ms {
            match self.phase {
                Phase::Waiting | Phase::Typing => {
                    if self.tick() {
                        revealed = true;
                        self.next_at_ms += self.timing.cadence_ms.max(0.0);
                    } else {
                        self.phase = Phase::Holding;
                        self.next_at_ms += self.timing.caret_hold_ms.max(0.0);
                    }
                }
                Phase::Holding => {
                    self.phase = Phase::Done;
                    caret_removed = true;
                }
                Phase::Done => break,
            }
        }

        if !revealed && !caret_removed {
            return None;
        }
        Some(Frame { text: revealed.then(|| self.displayed()), caret_removed })
    }
}

/// A change the host should apply to the element in `slot`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterUpdate {
    pub slot: usize,
    pub frame: Frame,
}

/// Drives every registered typewriter from one clock.
#[derive(Debug, Default)]
pub struct TypewriterScheduler {
    clock_ms: f64,
    active: Vec<(usize, Typewriter)>,
}

impl TypewriterScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a typewriter. Its start delay counts from the current clock.
    pub fn schedule(&mut self, slot: usize, mut typewriter: Typewriter) {
        typewriter.next_at_ms += self.clock_ms;
        self.active.push((slot, typewriter));
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Number of typewriters still running.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Step the clock forward by `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<TypewriterUpdate> {
        self.advance_to(self.clock_ms + elapsed_ms.max(0.0))
    }

    /// Move the clock to `now_ms` (never backwards) and collect every change.
    ///
    /// Finished typewriters are dropped once their caret is removed.
    pub fn advance_to(&mut self, now_ms: f64) -> Vec<TypewriterUpdate> {
        self.clock_ms = self.clock_ms.max(now_ms);
        let now = self.clock_ms;
        let mut updates = Vec::new();
        for (slot, typewriter) in &mut self.active {
            if let Some(frame) = typewriter.advance_to(now) {
                updates.push(TypewriterUpdate { slot: *slot, frame });
            }
        }
        self.active.retain(|(_, typewriter)| !typewriter.is_done());
        updates
    }
}
