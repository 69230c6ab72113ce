//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `Shift+Tab`             | `FocusPrev`                |
//! | `Ctrl+n`                | `NewQuery`                 |
//! | `Ctrl+r`                | `Summarize`                |
//! | `F1`, `F2`              | `SwitchTab(0)`, `SwitchTab(1)` |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | `Esc`                   | `Escape`                   |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! While a text field or the command bar is focused the event loop calls
//! [`to_app_event_insert`] instead: `hjkl`, `q`, `?` and `:` type their
//! literal characters, arrow keys still navigate, and the Ctrl / function
//! key bindings keep working.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for cursor movement, state cycling and scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Next form field, then the result pane.
    FocusNext,
    FocusPrev,
    /// Clear the active form and its result.
    NewQuery,
    /// Request the AI summary of the displayed process.
    Summarize,
    /// Show the tab with the given index (0 = process, 1 = case law).
    SwitchTab(usize),
    /// Scroll the result pane up one page.
    ScrollUp,
    ScrollDown,
    Nav(Direction),
    Char(char),
    Backspace,
    /// Submit the form, add a keyword, or confirm the command bar.
    Enter,
    /// Close the popup / modal / command bar, or leave a text field.
    Escape,
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (navigation mode).
///
/// Returns `None` for mouse events and unbound keys.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

/// Bindings shared by both modes: Ctrl chords, function keys, paging,
/// arrows and the editing keys.
fn map_common(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('n') if key.modifiers == Mod::CONTROL => Some(AppEvent::NewQuery),
        Char('r') if key.modifiers == Mod::CONTROL => Some(AppEvent::Summarize),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

        F(1) => Some(AppEvent::SwitchTab(0)),
        F(2) => Some(AppEvent::SwitchTab(1)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        // Terminals report Shift+Tab as BackTab, with or without SHIFT set.
        BackTab => Some(AppEvent::FocusPrev),

        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    if let Some(ev) = map_common(key) {
        return Some(ev);
    }
    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),

        Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        // `?` and `:` usually arrive with SHIFT held.
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }
        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    if let Some(ev) = map_common(key) {
        return Some(ev);
    }
    match key.code {
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
