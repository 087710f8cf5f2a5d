// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the kindred CLI.
//!
//! Box drawing, score coloring, and count bars - the little touches that make
//! ranked output scannable. Respects `NO_COLOR` for the purists and non-TTY
//! detection for pipelines.

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}{}{}{}",
        styled(&[GRAY], "│"),
        content,
        " ".repeat(pad),
        styled(&[GRAY], "│")
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}{}",
        styled(&[GRAY], "┌"),
        label_part,
        styled(&[GRAY], &"─".repeat(remaining)),
        styled(&[GRAY], "┐")
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", styled(&[GRAY], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Color-coded relevance score, right-aligned
pub fn score_value(score: u32) -> String {
    let text = format!("{:>5}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 150 {
        BRIGHT_GREEN
    } else if score >= 100 {
        GREEN
    } else if score >= 50 {
        YELLOW
    } else {
        GRAY
    };
    format!("{}{}{}", color, text, RESET)
}

/// Horizontal usage bar for tag counts: █████░░░░░
pub fn count_bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || count == 0 {
        return "░".repeat(width);
    }
    let filled = ((count as f64 / max as f64 * width as f64) as usize).clamp(1, width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a title to fit in the given width
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
