//! CLI color functions.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    owo_colors::set_override(false);
}

// Ice (identifiers): #7CB4C8
const ICE: (u8, u8, u8) = (124, 180, 200);

// Aurora (ok/kept): #6B8F5E
const AURORA: (u8, u8, u8) = (107, 143, 94);

// Ember (destructive): #B87060
const EMBER: (u8, u8, u8) = (184, 112, 96);

// Text muted: #5C6370
const MUTED: (u8, u8, u8) = (92, 99, 112);

/// Apply ice blue (resource names, ids).
pub fn ice(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(ICE.0, ICE.1, ICE.2))
        .to_string()
}

/// Apply aurora green (success).
pub fn aurora(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(AURORA.0, AURORA.1, AURORA.2))
        .to_string()
}

/// Apply ember red (resources that will be deleted).
pub fn ember(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(EMBER.0, EMBER.1, EMBER.2))
        .to_string()
}

/// Apply bold bright text (headers).
pub fn bold(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Apply muted gray (skipped resources, hints).
pub fn muted(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MUTED.0, MUTED.1, MUTED.2))
        .to_string()
}

/// Apply error styling (ember red, for stderr messages).
pub fn error(text: &str) -> String {
    text.if_supports_color(owo_colors::Stream::Stderr, |t| {
        t.truecolor(EMBER.0, EMBER.1, EMBER.2)
    })
    .to_string()
}

/// Color-code a sweep decision label.
pub fn decision(eligible: bool) -> String {
    if eligible { ember("sweep") } else { muted("skip") }
}
