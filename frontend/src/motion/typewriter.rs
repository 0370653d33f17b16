use std::rc::Rc;

use yew::prelude::*;

use super::scheduler::{BrowserScheduler, ChainedTimer};

pub const TYPE_MS: u32 = 100;
pub const HOLD_MS: u32 = 2000;

/// Types phrases one character at a time, holds the finished phrase, then
/// clears it and moves on to the next one.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    typed: usize,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases, index: 0, typed: 0 }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.typed) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.typed >= self.phrase().chars().count()
    }

    /// Moves one tick forward and returns the delay before the next tick.
    pub fn advance(&mut self) -> u32 {
        if self.phrases.is_empty() {
            return HOLD_MS;
        }
        if self.is_complete() {
            self.typed = 0;
            self.index = (self.index + 1) % self.phrases.len();
            return TYPE_MS;
        }
        self.typed += 1;
        if self.is_complete() {
            HOLD_MS
        } else {
            TYPE_MS
        }
    }
}

#[hook]
pub fn use_typewriter(phrases: &'static [&'static str]) -> String {
    let text = use_state_eq(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |phrases| {
                let mut writer = Typewriter::new(*phrases);
                let timer = ChainedTimer::start(Rc::new(BrowserScheduler), TYPE_MS, move || {
                    let delay = writer.advance();
                    text.set(writer.text().to_string());
                    Some(delay)
                });
                move || drop(timer)
            },
            phrases,
        );
    }

    (*text).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scheduler::testing::ManualScheduler;
    use std::cell::RefCell;

    const PHRASES: &[&str] = &["Ab", "Cd"];

    #[test]
    fn types_holds_then_rotates() {
        let mut writer = Typewriter::new(PHRASES);
        assert_eq!(writer.text(), "");
        assert_eq!(writer.advance(), TYPE_MS);
        assert_eq!(writer.text(), "A");
        assert_eq!(writer.advance(), HOLD_MS);
        assert_eq!(writer.text(), "Ab");
        assert_eq!(writer.advance(), TYPE_MS);
        assert_eq!(writer.text(), "");
        assert_eq!(writer.index(), 1);
    }

    #[test]
    fn rotation_wraps_around() {
        let mut writer = Typewriter::new(PHRASES);
        // three ticks per two-letter phrase: two letters and the clear
        for _ in 0..6 {
            writer.advance();
        }
        assert_eq!(writer.index(), 0);
        assert_eq!(writer.text(), "");
    }

    #[test]
    fn never_splits_a_multibyte_character() {
        const UZ: &[&str] = &["G'oya ✓"];
        let mut writer = Typewriter::new(UZ);
        let mut seen = Vec::new();
        while !writer.is_complete() {
            writer.advance();
            seen.push(writer.text());
        }
        assert_eq!(seen.last().copied(), Some("G'oya ✓"));
        assert_eq!(seen.len(), "G'oya ✓".chars().count());
    }

    #[test]
    fn empty_phrase_list_is_harmless() {
        let mut writer = Typewriter::new(&[]);
        assert_eq!(writer.advance(), HOLD_MS);
        assert_eq!(writer.text(), "");
    }

    #[test]
    fn scheduled_typing_follows_tick_timing() {
        let scheduler = ManualScheduler::new();
        let shown = Rc::new(RefCell::new(String::new()));
        let timer = {
            let shown = shown.clone();
            let mut writer = Typewriter::new(PHRASES);
            ChainedTimer::start(Rc::new(scheduler.clone()), TYPE_MS, move || {
                let delay = writer.advance();
                *shown.borrow_mut() = writer.text().to_string();
                Some(delay)
            })
        };

        scheduler.advance(200);
        assert_eq!(*shown.borrow(), "Ab");
        scheduler.advance(1_999);
        assert_eq!(*shown.borrow(), "Ab");
        scheduler.advance(1);
        assert_eq!(*shown.borrow(), "");
        scheduler.advance(100);
        assert_eq!(*shown.borrow(), "C");

        drop(timer);
        scheduler.advance(10_000);
        assert_eq!(*shown.borrow(), "C");
    }
}
