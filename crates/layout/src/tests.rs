use std::cell::Cell;
use std::sync::Arc;

use core_types::{FontSpec, FontStyle, FontWeight};
use html::{Token, tokenize};

use crate::{
    DisplayEntry, FontCache, FontMetrics, FontProvider, LayoutError, LayoutOptions, content_height,
    layout,
};

/// Monospace fake: every char is half the font size wide, ascent/descent
/// split the em box 80/20.
#[derive(Default)]
struct TestProvider {
    resolves: Cell<usize>,
}

impl FontProvider for TestProvider {
    type Font = FontSpec;

    fn resolve(&self, spec: FontSpec) -> Result<FontSpec, LayoutError> {
        self.resolves.set(self.resolves.get() + 1);
        if spec.size <= 0 {
            return Err(LayoutError::UnresolvableFont(spec));
        }
        Ok(spec)
    }

    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size as f32 * 0.5
    }

    fn metrics(&self, font: &FontSpec) -> FontMetrics {
        let px = font.size as f32;
        FontMetrics {
            ascent: px * 0.8,
            descent: px * 0.2,
            line_height: px * 1.2,
        }
    }
}

fn assert_approx_eq(got: f32, want: f32) {
    let eps = 0.01;
    assert!(
        (got - want).abs() <= eps,
        "expected {want:.4}, got {got:.4}"
    );
}

fn run(markup: &str) -> Vec<DisplayEntry> {
    let fonts = FontCache::new(TestProvider::default());
    layout(&tokenize(markup), &fonts, &LayoutOptions::default()).expect("layout")
}

fn words(entries: &[DisplayEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.word.as_str()).collect()
}

const ROMAN: FontSpec = FontSpec::new(12, FontWeight::Normal, FontStyle::Roman);

#[test]
fn cache_returns_identical_handle_and_resolves_once() {
    let fonts = FontCache::new(TestProvider::default());
    let a = fonts.get(ROMAN).unwrap();
    let b = fonts.get(ROMAN).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(fonts.provider().resolves.get(), 1);
    assert_eq!(fonts.len(), 1);
    assert_approx_eq(a.space_width(), 6.0);
}

#[test]
fn cache_does_not_store_failed_resolution() {
    let fonts = FontCache::new(TestProvider::default());
    let spec = FontSpec::new(0, FontWeight::Normal, FontStyle::Roman);
    assert_eq!(fonts.get(spec).unwrap_err(), LayoutError::UnresolvableFont(spec));
    assert!(fonts.is_empty());
}

#[test]
fn style_tags_apply_in_order_on_one_line() {
    let entries = run("<b>bold</b> normal <i>ital</i>");
    assert_eq!(words(&entries), ["bold", "normal", "ital"]);

    let specs: Vec<_> = entries.iter().map(|e| (e.font.weight, e.font.style)).collect();
    assert_eq!(
        specs,
        [
            (FontWeight::Bold, FontStyle::Roman),
            (FontWeight::Normal, FontStyle::Roman),
            (FontWeight::Normal, FontStyle::Italic),
        ]
    );

    // x advances by word width plus one space: 13, 13 + 24 + 6, 43 + 36 + 6.
    assert_approx_eq(entries[0].x, 13.0);
    assert_approx_eq(entries[1].x, 43.0);
    assert_approx_eq(entries[2].x, 85.0);

    // baseline = 18 + 1.25 * 9.6 = 30; y = baseline - ascent.
    for e in &entries {
        assert_approx_eq(e.y, 20.4);
    }
}

#[test]
fn paragraph_end_adds_one_vstep_beyond_line_spacing() {
    let plain = run("a<br>b");
    let para = run("<p>a</p><p>b</p>");
    assert_eq!(words(&para), ["a", "b"]);

    let line_pitch = plain[1].y - plain[0].y;
    // 1.25 * (ascent + descent) for a 12px font.
    assert_approx_eq(line_pitch, 15.0);
    assert_approx_eq(para[1].y - para[0].y, line_pitch + crate::VSTEP);
}

#[test]
fn repeated_breaks_do_not_compound() {
    let once = run("a<br>b");
    let many = run("a<br><br><br>b");
    assert_eq!(once, many);

    // Only the first `/p` flushes a line; later ones only add the gap.
    let one_gap = run("a</p>b");
    let two_gaps = run("a</p></p>b");
    assert_approx_eq(two_gaps[1].y - one_gap[1].y, crate::VSTEP);
}

#[test]
fn words_wrap_when_pair_exceeds_line() {
    let fonts = FontCache::new(TestProvider::default());
    let options = LayoutOptions {
        width: 100.0,
        hstep: 10.0,
        ..LayoutOptions::default()
    };
    // 36 + 6 + 42 = 84 > 100 - 2 * 10, but each word fits alone.
    let entries = layout(&tokenize("aaaaaa bbbbbbb"), &fonts, &options).unwrap();
    assert_eq!(words(&entries), ["aaaaaa", "bbbbbbb"]);
    assert_approx_eq(entries[0].x, 10.0);
    assert_approx_eq(entries[1].x, 10.0);
    assert!(entries[1].y > entries[0].y);
}

#[test]
fn oversized_word_is_placed_alone_and_unsplit() {
    let fonts = FontCache::new(TestProvider::default());
    let options = LayoutOptions {
        width: 100.0,
        hstep: 10.0,
        ..LayoutOptions::default()
    };
    let huge = "x".repeat(20);
    let entries = layout(&tokenize(&format!("a {huge} b")), &fonts, &options).unwrap();
    assert_eq!(words(&entries), ["a", huge.as_str(), "b"]);
    for e in &entries {
        assert_approx_eq(e.x, 10.0);
    }
    assert!(entries[0].y < entries[1].y && entries[1].y < entries[2].y);

    let alone = layout(&tokenize(&huge), &fonts, &options).unwrap();
    assert_eq!(alone.len(), 1);
    assert_approx_eq(alone[0].x, 10.0);
}

#[test]
fn mixed_sizes_share_a_baseline() {
    let entries = run("a<big>B</big><small>c</small>");
    assert_eq!(words(&entries), ["a", "B", "c"]);
    assert_eq!(entries[1].font.size, 16);
    assert_eq!(entries[2].font.size, 10);

    // Tallest ascent is 12.8 (16px), baseline = 18 + 1.25 * 12.8 = 34.
    let baseline = |e: &DisplayEntry| e.y + e.font.size as f32 * 0.8;
    for e in &entries {
        assert_approx_eq(baseline(e), 34.0);
    }
}

#[test]
fn y_is_non_decreasing_for_uniform_text() {
    let text = "lorem ipsum dolor sit amet ".repeat(200);
    let entries = run(&format!("<p>{text}</p><p>{text}</p>"));
    assert!(entries.len() > 100);
    assert!(entries.windows(2).all(|w| w[0].y <= w[1].y));
}

#[test]
fn later_lines_sit_below_earlier_lines() {
    let text = "tiny <big><big>HUGE</big></big> <small>wee</small> ".repeat(100);
    let entries = run(&text);

    // Group by line: a new line starts whenever x returns to the margin.
    let mut lines: Vec<Vec<&DisplayEntry>> = Vec::new();
    for e in &entries {
        if (e.x - crate::HSTEP).abs() < 0.01 || lines.is_empty() {
            lines.push(Vec::new());
        }
        lines.last_mut().unwrap().push(e);
    }
    assert!(lines.len() > 1);
    for pair in lines.windows(2) {
        let prev_max = pair[0].iter().map(|e| e.y).fold(f32::MIN, f32::max);
        let next_min = pair[1].iter().map(|e| e.y).fold(f32::MAX, f32::min);
        assert!(next_min > prev_max);
    }
}

#[test]
fn layout_is_idempotent_with_reused_cache() {
    let fonts = FontCache::new(TestProvider::default());
    let tokens = tokenize("<b>one</b> <i>two <big>three</big></i> four<br>five</p>six");
    let first = layout(&tokens, &fonts, &LayoutOptions::default()).unwrap();
    let resolves = fonts.provider().resolves.get();
    let second = layout(&tokens, &fonts, &LayoutOptions::default()).unwrap();

    assert_eq!(first, second);
    assert_eq!(fonts.provider().resolves.get(), resolves);
    assert_eq!(resolves, fonts.len());
}

#[test]
fn mis_nested_tags_follow_flags_not_a_stack() {
    let entries = run("<b><i>x</b>y</i>z");
    let specs: Vec<_> = entries.iter().map(|e| (e.font.weight, e.font.style)).collect();
    assert_eq!(
        specs,
        [
            (FontWeight::Bold, FontStyle::Italic),
            (FontWeight::Normal, FontStyle::Italic),
            (FontWeight::Normal, FontStyle::Roman),
        ]
    );

    // An unmatched close just overwrites the flag or shifts the counter.
    let entries = run("</b></small>w");
    assert_eq!(entries[0].font, FontSpec::new(14, FontWeight::Normal, FontStyle::Roman));
}

#[test]
fn unknown_and_case_variant_tags_are_ignored() {
    let entries = run("<p>a <div class=x>b <B>c <br/>d");
    assert_eq!(words(&entries), ["a", "b", "c", "d"]);
    assert!(entries.iter().all(|e| e.font == ROMAN));
    assert!(entries.iter().all(|e| (e.y - entries[0].y).abs() < 0.01));
}

#[test]
fn unresolvable_size_aborts_layout() {
    let fonts = FontCache::new(TestProvider::default());
    let tokens = tokenize(&format!("ok {}gone", "<small>".repeat(6)));
    let err = layout(&tokens, &fonts, &LayoutOptions::default()).unwrap_err();
    assert_eq!(
        err,
        LayoutError::UnresolvableFont(FontSpec::new(0, FontWeight::Normal, FontStyle::Roman))
    );
}

#[test]
fn empty_and_whitespace_only_documents_produce_nothing() {
    assert!(run("").is_empty());
    assert!(run("  \n\t <p> </p> <br>").is_empty());
    assert_eq!(content_height(&[]), 0.0);
}

#[test]
fn content_height_is_last_entry_y() {
    let entries = run("a<br>b<br>c");
    assert_eq!(content_height(&entries), entries[2].y);
}

#[test]
fn content_height_covers_lower_small_word_before_line_end() {
    let entries = run("<small>lo</small> Hi");
    assert_eq!(words(&entries), ["lo", "Hi"]);
    // Shared baseline: the smaller ascent puts "lo" lower on the page.
    assert!(entries[0].y > entries[1].y);
    assert_eq!(content_height(&entries), entries[0].y);
}

#[test]
fn token_slice_can_be_built_by_hand() {
    let tokens = vec![Token::Tag("b".into()), Token::Text("  hi   there ".into())];
    let fonts = FontCache::new(TestProvider::default());
    let entries = layout(&tokens, &fonts, &LayoutOptions::default()).unwrap();
    assert_eq!(words(&entries), ["hi", "there"]);
    assert!(entries.iter().all(|e| e.font.is_bold()));
}
