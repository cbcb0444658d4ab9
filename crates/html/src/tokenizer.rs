//! Flat markup tokenizer.
//!
//! Splits a document into text runs and raw tag contents. There is no tree,
//! no entity decoding and no attribute parsing: a tag token carries whatever
//! sat between `<` and `>`, verbatim.
//!
//! Scanning rules:
//! - `<` opens a tag (flushing pending text). Inside a tag a further `<` is
//!   just content.
//! - `>` closes a tag and emits its content, even when empty. A `>` seen
//!   outside a tag also emits the preceding run as a tag.
//! - A tag still open at end of input is dropped.
use crate::types::Token;
use memchr::{memchr, memchr2};

/// Tokenizes `input` into text and tag tokens. Total over every input.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0;
    let mut in_tag = false;
    // Invariant: `start` and every cut point sit next to an ASCII `<` or `>`,
    // so all slices below fall on UTF-8 char boundaries.
    while start < bytes.len() {
        if in_tag {
            let Some(rel) = memchr(b'>', &bytes[start..]) else {
                // Unterminated tag at end of input.
                log::trace!(
                    target: "html.tokenizer",
                    "dropping unterminated tag at byte {}",
                    start - 1
                );
                return out;
            };
            let end = start + rel;
            emit(&mut out, Token::Tag(input[start..end].to_string()));
            in_tag = false;
            start = end + 1;
            continue;
        }

        let Some(rel) = memchr2(b'<', b'>', &bytes[start..]) else {
            break;
        };
        let end = start + rel;
        debug_assert!(input.is_char_boundary(end));
        let run = &input[start..end];
        if bytes[end] == b'<' {
            if !run.is_empty() {
                emit(&mut out, Token::Text(run.to_string()));
            }
            in_tag = true;
        } else {
            // Stray `>`: the pending run is closed as if it were a tag.
            emit(&mut out, Token::Tag(run.to_string()));
        }
        start = end + 1;
    }

    if !in_tag && start < bytes.len() {
        emit(&mut out, Token::Text(input[start..].to_string()));
    }
    out
}

#[inline]
fn emit(out: &mut Vec<Token>, token: Token) {
    log::trace!(target: "html.tokenizer", "emit token: {token:?}");
    out.push(token);
}
