//! Terminal styling markers and the visible length of styled text.
//!
//! A marker is either a control sequence `ESC '[' P* I* F` (parameter bytes
//! `0x30..=0x3F`, intermediate bytes `0x20..=0x2F`, one final byte
//! `0x40..=0x7E`) or a two-character escape `ESC x`. Everything outside a
//! marker is printable text.

use std::borrow::Cow;

const ESC: char = '\x1b';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Marker(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Escape,
    Parameters,
    Intermediates,
}

/// Splits styled text into printable runs and markers.
pub struct Segments<'a> {
    source: &'a str,
    pos: usize,
}

pub fn segments(value: &str) -> Segments<'_> {
    Segments {
        source: value,
        pos: 0,
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.source[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if !rest.starts_with(ESC) {
            let end = rest.find(ESC).unwrap_or(rest.len());
            self.pos += end;
            return Some(Segment::Text(&rest[..end]));
        }

        let end = marker_len(rest);
        self.pos += end;
        Some(Segment::Marker(&rest[..end]))
    }
}

/// Byte length of the marker at the start of `value`, which begins with ESC.
/// An unterminated marker runs to the end of the input.
fn marker_len(value: &str) -> usize {
    let mut state = State::Escape;
    for (idx, ch) in value.char_indices().skip(1) {
        state = match (state, ch) {
            (State::Escape, '[') => State::Parameters,
            (State::Escape, _) => return idx + ch.len_utf8(),
            (State::Parameters, '\x30'..='\x3f') => State::Parameters,
            (State::Parameters | State::Intermediates, '\x20'..='\x2f') => State::Intermediates,
            (State::Parameters | State::Intermediates, '\x40'..='\x7e') => {
                return idx + ch.len_utf8();
            }
            // Anything else aborts the sequence; the offending char stays printable.
            (State::Parameters | State::Intermediates, _) => return idx,
        };
    }
    value.len()
}

pub fn strip_markers(value: &str) -> Cow<'_, str> {
    if !value.contains(ESC) {
        return Cow::Borrowed(value);
    }
    let mut plain = String::with_capacity(value.len());
    for segment in segments(value) {
        if let Segment::Text(text) = segment {
            plain.push_str(text);
        }
    }
    Cow::Owned(plain)
}

/// Characters left in `value` once its markers are removed, one unit each.
pub fn visible_len(value: &str) -> usize {
    segments(value)
        .map(|segment| match segment {
            Segment::Text(text) => text.chars().count(),
            Segment::Marker(_) => 0,
        })
        .sum()
}
