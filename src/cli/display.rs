// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed, colored terminal output for the fitsearch CLI.
//!
//! Colors come from a OneDark / One Light pair chosen by `FITSEARCH_THEME`
//! (`dark` unless it says `light`). Nothing is colored when `NO_COLOR` is set
//! or stdout is not a terminal, so piped output stays plain.

use fitsearch::DocumentType;
use std::sync::OnceLock;

/// Inner width of every box, between the two `│` borders.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// The handful of roles the CLI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Calculator,
    Article,
    Page,
    Category,
    Border,
    Label,
    Title,
    ScoreHigh,
    ScoreLow,
}

impl Tone {
    /// True-color RGB for this tone: `(dark, light)`.
    fn rgb(self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            Tone::Calculator => ((152, 195, 121), (80, 161, 79)),
            Tone::Article => ((97, 175, 239), (64, 120, 242)),
            Tone::Page => ((198, 120, 221), (166, 38, 164)),
            Tone::Category => ((229, 192, 123), (193, 132, 1)),
            Tone::Border => ((92, 99, 112), (160, 161, 167)),
            Tone::Label => ((86, 182, 194), (1, 132, 188)),
            Tone::Title => ((102, 217, 239), (1, 112, 158)),
            Tone::ScoreHigh => ((166, 226, 46), (68, 140, 39)),
            Tone::ScoreLow => ((92, 99, 112), (160, 161, 167)),
        }
    }

    fn escape(self) -> String {
        let (dark, light) = self.rgb();
        let (r, g, b) = if light_theme() { light } else { dark };
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

fn light_theme() -> bool {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    *LIGHT.get_or_init(|| {
        std::env::var("FITSEARCH_THEME")
            .map(|t| t.eq_ignore_ascii_case("light"))
            .unwrap_or(false)
    })
}

fn use_colors() -> bool {
    static COLORS: OnceLock<bool> = OnceLock::new();
    *COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// Wrap `text` in a tone, optionally bold. Plain text when colors are off.
pub fn paint(tone: Tone, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, tone.escape(), text, RESET)
}

/// Printed width of `s`, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, ending in an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ---------------------------------------------------------------------------
// Boxes
// ---------------------------------------------------------------------------

fn border(s: &str) -> String {
    paint(Tone::Border, false, s)
}

/// Horizontal rule between two corner glyphs, with an optional label.
fn rule(left: &str, label: Option<&str>, right: &str) -> String {
    let head = match label {
        Some(label) => format!("─ {} ", paint(Tone::Label, true, label)),
        None => String::new(),
    };
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&head)));
    format!("{}{}{}{}", border(left), head, border(&fill), border(right))
}

/// `│ content          │`
pub fn row(content: &str) {
    let pad = " ".repeat(BOX_WIDTH.saturating_sub(visible_len(content)));
    println!("{}{}{}{}", border("│"), content, pad, border("│"));
}

/// `┌─ label ─────┐`
pub fn section_top(label: &str) {
    println!("{}", rule("┌", Some(label), "┐"));
}

/// `├─ label ─────┤`
pub fn section_mid(label: &str) {
    println!("{}", rule("├", Some(label), "┤"));
}

/// `└─────────────┘`
pub fn section_bot() {
    println!("{}", rule("└", None, "┘"));
}

// ---------------------------------------------------------------------------
// Formatters
// ---------------------------------------------------------------------------

pub fn type_badge(kind: DocumentType) -> String {
    let tone = match kind {
        DocumentType::Calculator => Tone::Calculator,
        DocumentType::Article => Tone::Article,
        DocumentType::Page => Tone::Page,
    };
    paint(tone, false, &format!("[{}]", kind.label()))
}

pub fn category_badge(category: &str) -> String {
    paint(Tone::Category, false, &format!("#{}", category))
}

/// Right-aligned score; bright once a title-level match is in.
pub fn score_value(score: f64) -> String {
    let tone = if score >= 25.0 {
        Tone::ScoreHigh
    } else {
        Tone::ScoreLow
    };
    paint(tone, score >= 25.0, &format!("{:>7.1}", score))
}

pub fn heading(text: &str) -> String {
    paint(Tone::Title, true, text)
}
