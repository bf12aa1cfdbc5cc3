//! Parser for the compact mask grammar.
//!
//! ```text
//! mask := '!'? (term (',' term)*)?
//! term := name ('{' mask '}')?
//! ```
//!
//! Whitespace between tokens is ignored; a name ends at the first delimiter
//! or whitespace character. A leading `!` inverts the level it opens (see
//! [`Mask::invert`]), which is how exclusion masks are written. Without it
//! every level parses to an inclusion mask.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::debug_mask::{MaskSource, trace_mask_built, trace_mask_rejected};
use crate::mask::merge_inclusion_entry;
use crate::{FormatError, Mask, ParseOptions, ParseResult};

const INVERT: char = '!';

impl Mask {
    /// Parses compact mask text such as `a,b,c{d,e{f,g}}` with default
    /// options.
    ///
    /// Empty or whitespace-only text yields [`Mask::all`]. Repeated names
    /// merge as in [`Mask::merge`].
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] for stray delimiters, unmatched braces,
    /// names that are not separated by `,`, or nesting deeper than
    /// [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH).
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldmask::{FormatError, Mask};
    ///
    /// let mask = Mask::parse("a, b{c}").unwrap();
    /// assert_eq!(mask.to_string(), "a,b{c}");
    ///
    /// assert!(matches!(
    ///     Mask::parse("a,,b"),
    ///     Err(FormatError::UnexpectedDelimiter { delimiter: ',', offset: 2 })
    /// ));
    /// ```
    pub fn parse(text: &str) -> ParseResult<Self> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parses compact mask text with explicit options.
    ///
    /// # Errors
    ///
    /// See [`Mask::parse`].
    pub fn parse_with(text: &str, options: &ParseOptions) -> ParseResult<Self> {
        let mut cursor = Cursor::new(text);
        let result = parse_level(&mut cursor, 1, None, options.max_depth);
        match &result {
            Ok(mask) => trace_mask_built(MaskSource::Compact, mask),
            Err(error) => trace_mask_rejected(MaskSource::Compact, error),
        }
        result
    }
}

impl FromStr for Mask {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Scan position over the mask text, threaded through the recursive descent.
#[derive(Debug)]
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.text[self.pos..].chars().next().map(|ch| (self.pos, ch))
    }

    fn bump(&mut self) {
        if let Some((_, ch)) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, ch)) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn name(&mut self) -> &'a str {
        let start = self.pos;
        while let Some((_, ch)) = self.peek() {
            if is_delimiter(ch) || ch.is_whitespace() {
                break;
            }
            self.bump();
        }
        &self.text[start..self.pos]
    }
}

const fn is_delimiter(ch: char) -> bool {
    matches!(ch, ',' | '{' | '}' | INVERT)
}

/// Parses one brace level. `opened_at` is the offset of the `{` that opened
/// it, or `None` for the top level.
fn parse_level(
    cursor: &mut Cursor<'_>,
    depth: usize,
    opened_at: Option<usize>,
    max_depth: usize,
) -> ParseResult<Mask> {
    if depth > max_depth {
        return Err(FormatError::DepthExceeded { max_depth });
    }

    cursor.skip_whitespace();
    let inverted = matches!(cursor.peek(), Some((_, INVERT)));
    if inverted {
        cursor.bump();
        cursor.skip_whitespace();
    }

    let mut fields = BTreeMap::new();
    match (cursor.peek(), opened_at) {
        (None, None) => return Ok(finish(fields, inverted)),
        (None, Some(offset)) => return Err(FormatError::UnclosedBrace { offset }),
        (Some((_, '}')), Some(_)) => {
            cursor.bump();
            return Ok(finish(fields, inverted));
        }
        _ => {}
    }

    loop {
        cursor.skip_whitespace();
        let name = cursor.name();
        if name.is_empty() {
            return Err(match cursor.peek() {
                Some((offset, ch)) if ch == INVERT => FormatError::UnexpectedCharacter {
                    character: ch,
                    offset,
                },
                Some((offset, delimiter)) => FormatError::UnexpectedDelimiter { delimiter, offset },
                None => match opened_at {
                    Some(offset) => FormatError::UnclosedBrace { offset },
                    None => FormatError::UnexpectedCharacter {
                        character: ',',
                        offset: cursor.pos.saturating_sub(1),
                    },
                },
            });
        }

        cursor.skip_whitespace();
        let child = match cursor.peek() {
            Some((offset, '{')) => {
                cursor.bump();
                parse_level(cursor, depth + 1, Some(offset), max_depth)?
            }
            _ => Mask::all(),
        };
        merge_inclusion_entry(&mut fields, name.to_owned(), child);

        cursor.skip_whitespace();
        match cursor.peek() {
            None => match opened_at {
                Some(offset) => return Err(FormatError::UnclosedBrace { offset }),
                None => break,
            },
            Some((offset, ',')) => {
                cursor.bump();
                cursor.skip_whitespace();
                if cursor.peek().is_none() {
                    return Err(match opened_at {
                        Some(open) => FormatError::UnclosedBrace { offset: open },
                        None => FormatError::UnexpectedDelimiter {
                            delimiter: ',',
                            offset,
                        },
                    });
                }
            }
            Some((offset, '}')) => {
                if opened_at.is_none() {
                    return Err(FormatError::UnexpectedDelimiter {
                        delimiter: '}',
                        offset,
                    });
                }
                cursor.bump();
                break;
            }
            Some((offset, character)) => {
                return Err(FormatError::UnexpectedCharacter { character, offset });
            }
        }
    }

    Ok(finish(fields, inverted))
}

fn finish(fields: BTreeMap<String, Mask>, inverted: bool) -> Mask {
    let mask = Mask::Inclusion(fields);
    if inverted { mask.invert() } else { mask }
}
