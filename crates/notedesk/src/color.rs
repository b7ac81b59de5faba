//! Centralized CLI color functions.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an
//! internal flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{self, Stderr, Stdout};

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

/// Type-safe RGB color with compile-time hex-to-component conversion.
#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const ACCENT: Rgb = Rgb::from_hex(0x7CB4C8); // Identifiers
const SUCCESS: Rgb = Rgb::from_hex(0x6B8F5E);
const WARNING: Rgb = Rgb::from_hex(0xC49A5C);
const DANGER: Rgb = Rgb::from_hex(0xB87060);
const MUTED: Rgb = Rgb::from_hex(0x5C6370); // Secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, stream: Stream, color: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(stream, |t| t.truecolor(color.r, color.g, color.b))
        .to_string()
}

/// Identifiers and resource names.
pub fn accent(text: &str) -> String {
    paint(text, Stdout, ACCENT)
}

pub fn success(text: &str) -> String {
    paint(text, Stdout, SUCCESS)
}

pub fn warning(text: &str) -> String {
    paint(text, Stdout, WARNING)
}

pub fn danger(text: &str) -> String {
    paint(text, Stdout, DANGER)
}

pub fn muted(text: &str) -> String {
    paint(text, Stdout, MUTED)
}

/// Error text written to stderr.
pub fn danger_stderr(text: &str) -> String {
    paint(text, Stderr, DANGER)
}
