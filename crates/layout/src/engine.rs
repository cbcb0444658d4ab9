use std::sync::Arc;

use core_types::{FontSpec, FontStyle, FontWeight};
use html::Token;

use crate::font_cache::{CachedFont, FontCache};
use crate::options::LayoutOptions;
use crate::{FontProvider, LayoutError};

/// Extra space reserved above the tallest ascent and below the deepest
/// descent of every line.
const LEADING: f32 = 1.25;

/// One word at its final position. `y` is the top of the word's font box.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayEntry {
    pub x: f32,
    pub y: f32,
    pub word: String,
    pub font: FontSpec,
}

/// Lays out `tokens` into a flat display list, top to bottom.
///
/// Style tags adjust flat counters rather than a stack, so mis-nested markup
/// such as `<b><i>x</b>y</i>` ends in whatever state the tag sequence implies.
pub fn layout<P: FontProvider>(
    tokens: &[Token],
    fonts: &FontCache<P>,
    options: &LayoutOptions,
) -> Result<Vec<DisplayEntry>, LayoutError> {
    let mut state = LayoutState::new(fonts, options);
    for token in tokens {
        state.apply(token)?;
    }
    state.finish_line();

    log::debug!(
        target: "layout",
        "laid out {} tokens into {} entries, content ends at y={:.1}",
        tokens.len(),
        state.entries.len(),
        state.cursor_y
    );
    Ok(state.entries)
}

/// Largest entry y, or 0 for an empty list.
///
/// Smaller words on a mixed-size line sit lower than their neighbours, so the
/// last entry is not always the lowest one.
pub fn content_height(entries: &[DisplayEntry]) -> f32 {
    entries.iter().map(|e| e.y).fold(0.0, f32::max)
}

struct PendingWord<F> {
    x: f32,
    word: String,
    font: Arc<CachedFont<F>>,
}

struct LayoutState<'a, P: FontProvider> {
    fonts: &'a FontCache<P>,
    options: &'a LayoutOptions,
    entries: Vec<DisplayEntry>,
    line: Vec<PendingWord<P::Font>>,
    cursor_x: f32,
    cursor_y: f32,
    size: i32,
    weight: FontWeight,
    style: FontStyle,
}

impl<'a, P: FontProvider> LayoutState<'a, P> {
    fn new(fonts: &'a FontCache<P>, options: &'a LayoutOptions) -> Self {
        Self {
            fonts,
            options,
            entries: Vec::new(),
            line: Vec::new(),
            cursor_x: options.hstep,
            cursor_y: options.vstep,
            size: options.base_size,
            weight: FontWeight::Normal,
            style: FontStyle::Roman,
        }
    }

    fn apply(&mut self, token: &Token) -> Result<(), LayoutError> {
        match token {
            Token::Text(text) => {
                for word in text.split_whitespace() {
                    self.place_word(word)?;
                }
            }
            Token::Tag(name) => self.apply_tag(name),
        }
        Ok(())
    }

    fn apply_tag(&mut self, name: &str) {
        match name {
            "i" => self.style = FontStyle::Italic,
            "/i" => self.style = FontStyle::Roman,
            "b" => self.weight = FontWeight::Bold,
            "/b" => self.weight = FontWeight::Normal,
            "small" => self.size -= 2,
            "/small" => self.size += 2,
            "big" => self.size += 4,
            "/big" => self.size -= 4,
            "br" => self.finish_line(),
            "/p" => {
                self.finish_line();
                self.cursor_y += self.options.vstep;
            }
            _ => {}
        }
    }

    fn current_spec(&self) -> FontSpec {
        FontSpec::new(self.size, self.weight, self.style)
    }

    fn place_word(&mut self, word: &str) -> Result<(), LayoutError> {
        let font = self.fonts.get(self.current_spec())?;
        let width = self.fonts.measure(word, &font);

        // A word wider than the whole line still goes on a line of its own.
        if self.cursor_x + width > self.options.line_limit() && !self.line.is_empty() {
            self.finish_line();
        }

        let advance = width + font.space_width();
        self.line.push(PendingWord {
            x: self.cursor_x,
            word: word.to_string(),
            font,
        });
        self.cursor_x += advance;
        Ok(())
    }

    /// Commits the pending line, aligning every word to a shared baseline.
    /// No-op for an empty line.
    fn finish_line(&mut self) {
        if self.line.is_empty() {
            return;
        }

        let (max_ascent, max_descent) = self.line.iter().fold((0.0f32, 0.0f32), |acc, w| {
            let m = w.font.metrics();
            (acc.0.max(m.ascent), acc.1.max(m.descent))
        });
        let baseline = self.cursor_y + LEADING * max_ascent;

        for pending in self.line.drain(..) {
            self.entries.push(DisplayEntry {
                x: pending.x,
                y: baseline - pending.font.metrics().ascent,
                word: pending.word,
                font: pending.font.spec(),
            });
        }

        self.cursor_y = baseline + LEADING * max_descent;
        self.cursor_x = self.options.hstep;
    }
}
