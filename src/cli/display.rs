// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docsift CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `DOCSIFT_THEME` wins
//! if set, then `COLORFGBG`, then dark. Colors are dropped entirely under
//! `NO_COLOR` or when stdout isn't a terminal.

use std::sync::OnceLock;
use std::time::Duration;

use docsift::{IndexedDoc, SearchResult};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where a background of 7 or above (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length without ANSI escapes.
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

/// Cut to `max` visible characters, ending in "…" when cut.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{border}│{reset}{content}{}{border}│{reset}", " ".repeat(pad));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{border}┌{reset}{label_part}{border}{}┐{reset}", "─".repeat(remaining));
}

/// └──────────────────┘
pub fn section_bot() {
    let border = if use_colors() { GRAY() } else { String::new() };
    let reset = if use_colors() { RESET } else { "" };
    println!("{border}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.1}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 100.0 {
        BRIGHT_GREEN()
    } else if score >= 50.0 {
        GREEN()
    } else if score >= 20.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

pub fn timing_ms(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    let text = format!("{:.3} ms", ms);
    if !use_colors() {
        return text;
    }
    let color = if ms < 5.0 {
        GREEN()
    } else if ms < 20.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT VIEWS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_results(label: &str, query: &str, results: &[SearchResult], elapsed: Duration) {
    section_top(label);
    row(&format!(
        " query {}  {} result(s) in {}",
        themed(BRIGHT_CYAN, &[BOLD], &format!("{query:?}")),
        results.len(),
        timing_ms(elapsed)
    ));
    for (rank, result) in results.iter().enumerate() {
        row("");
        row(&format!(
            " {:>2}. {} {}",
            rank + 1,
            score_value(result.score),
            themed(BLUE, &[BOLD], &truncate_text(&result.doc.title, 50))
        ));
        row(&format!("          {}", themed(GRAY, &[], &truncate_text(&result.href(), 68))));
        if let Some(snippet) = &result.snippet {
            row(&format!("          {}", themed(GRAY, &[DIM], &truncate_text(snippet, 68))));
        }
    }
    section_bot();
}

pub fn print_index(docs: &[IndexedDoc]) {
    section_top("INDEX");
    row(&format!(" {} document(s)", docs.len()));
    for doc in docs {
        row("");
        row(&format!(" {}", themed(BLUE, &[BOLD], &truncate_text(&doc.slug, 76))));
        row(&format!("   title     {}", truncate_text(&doc.title, 64)));
        if !doc.description.is_empty() {
            row(&format!("   desc      {}", truncate_text(&doc.description, 64)));
        }
        row(&format!(
            "   words     {} title, {} slug, {} heading",
            doc.title_words.len(),
            doc.slug_words.len(),
            doc.heading_words.len()
        ));
        for heading in &doc.headings {
            row(&format!(
                "   h{}        {} {}",
                heading.level,
                truncate_text(&heading.normalized, 48),
                themed(GRAY, &[], &format!("#{}", heading.id))
            ));
        }
        row(&format!("   content   {} chars", doc.content.chars().count()));
    }
    section_bot();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_len_with_escapes() {
        assert_eq!(visible_len("hello"), 5);
        assert_eq!(visible_len("\x1b[32mhello\x1b[0m"), 5);
    }

    #[test]
    fn test_rgb_format() {
        assert_eq!(rgb(255, 128, 64), "\x1b[38;2;255;128;64m");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly", 7), "exactly");
        assert_eq!(truncate_text("truncated", 5), "trun…");
        assert_eq!(truncate_text("héllo wörld", 6), "héllo…");
    }

    #[test]
    fn test_theme_colors_are_different() {
        assert_ne!(onedark::GREEN, onelight::GREEN);
        assert_ne!(onedark::BLUE, onelight::BLUE);
    }
}
