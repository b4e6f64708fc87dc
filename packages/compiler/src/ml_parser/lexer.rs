//! ML Parser Lexer
//!
//! Tag scanner: walks the template once, left to right, and splits it
//! into untouched text and component/slot tags.
//!
//! Only text that matches the tag grammar becomes a tag. Anything else
//! starting with `<` (plain HTML, comparison operators, half-written
//! tags) stays in the surrounding text.

use super::tokens::{Segment, TagKind, TagMatch};
use crate::chars;
use crate::parse_util::{ParseLocation, ParseSourceSpan};

const SLOT: &str = "slot";
const ATTRIBUTES_VARIABLE: &str = "$attributes";
const CLASS_HELPER: &str = "@class(";
const STYLE_HELPER: &str = "@style(";

/// Scan a whole template into text and tag segments.
pub fn scan(source: &str) -> Vec<Segment<'_>> {
    let mut scanner = TagScanner::new(source);
    scanner.scan();
    scanner.segments
}

/// Length of the balanced parenthesised group at the start of `input`,
/// including both parentheses. Quoted regions are opaque and may contain
/// backslash escapes. Returns `None` if `input` does not start with `(`
/// or the group never closes.
pub fn scan_balanced_parens(input: &str) -> Option<usize> {
    if !input.starts_with(chars::LPAREN) {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, ch) in input.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == chars::BACKSLASH {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            chars::SQ | chars::DQ => quote = Some(ch),
            chars::LPAREN => depth += 1,
            chars::RPAREN => {
                depth -= 1;
                if depth == 0 {
                    return Some(index + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Cursor over the text of one candidate tag
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or(chars::EOF)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    fn eat(&mut self, ch: char) -> bool {
        if !self.at_end() && self.peek() == ch {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume while `pred` holds, returning the consumed text
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while !self.at_end() && pred(self.peek()) {
            self.pos += self.peek().len_utf8();
        }
        &self.input[start..self.pos]
    }

    fn skip_whitespace(&mut self) -> usize {
        self.take_while(chars::is_whitespace).len()
    }

    /// The character just before the cursor
    fn previous(&self) -> Option<char> {
        self.input[..self.pos].chars().next_back()
    }
}

/// Result of matching one tag at a `<`
struct Matched<'a> {
    kind: TagKind,
    name: &'a str,
    attributes: &'a str,
    inline_name: Option<&'a str>,
    self_closing: bool,
    len: usize,
}

struct TagScanner<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
    location: ParseLocation,
}

impl<'a> TagScanner<'a> {
    fn new(source: &'a str) -> Self {
        TagScanner {
            source,
            segments: Vec::new(),
            location: ParseLocation::default(),
        }
    }

    fn scan(&mut self) {
        let mut text_start = 0;
        let mut search = 0;

        while let Some(found) = self.source[search..].find(chars::LT) {
            let at = search + found;
            match match_tag(&self.source[at..]) {
                Some(matched) => {
                    if at > text_start {
                        self.segments
                            .push(Segment::Text(&self.source[text_start..at]));
                    }
                    let end = at + matched.len;
                    self.location.advance_to(self.source, at);
                    let start_location = self.location;
                    self.location.advance_to(self.source, end);

                    log::trace!(
                        "scanned {:?} tag `{}` at {}",
                        matched.kind,
                        matched.name,
                        start_location
                    );

                    self.segments.push(Segment::Tag(TagMatch {
                        kind: matched.kind,
                        name: matched.name,
                        attributes: matched.attributes,
                        inline_name: matched.inline_name,
                        self_closing: matched.self_closing,
                        source_span: ParseSourceSpan::new(start_location, self.location),
                    }));
                    text_start = end;
                    search = end;
                }
                None => search = at + 1,
            }
        }

        if text_start < self.source.len() {
            self.segments.push(Segment::Text(&self.source[text_start..]));
        }
    }
}

/// Try to match a tag at the start of `input` (which starts with `<`).
fn match_tag(input: &str) -> Option<Matched<'_>> {
    let mut cursor = Cursor::new(input);
    cursor.eat(chars::LT);
    let closing = cursor.eat(chars::SLASH);
    cursor.skip_whitespace();

    if !cursor.eat('x') || !(cursor.eat(chars::MINUS) || cursor.eat(chars::COLON)) {
        return None;
    }

    if closing {
        return match_closing_tag(cursor);
    }

    let after_prefix = cursor.pos;
    if let Some(matched) = match_slot_tag(&mut cursor) {
        return Some(matched);
    }
    cursor.pos = after_prefix;
    match_component_tag(cursor)
}

/// `</x-slot...>` or `</x-name>`
fn match_closing_tag(mut cursor: Cursor<'_>) -> Option<Matched<'_>> {
    if is_slot_keyword(&cursor) {
        let len = cursor.pos + cursor.rest().find(chars::GT)? + 1;
        return Some(Matched {
            kind: TagKind::SlotClosing,
            name: SLOT,
            attributes: "",
            inline_name: None,
            self_closing: false,
            len,
        });
    }

    let name = cursor.take_while(chars::is_tag_name_char);
    cursor.skip_whitespace();
    if !cursor.eat(chars::GT) {
        return None;
    }
    Some(Matched {
        kind: TagKind::Closing,
        name,
        attributes: "",
        inline_name: None,
        self_closing: false,
        len: cursor.pos,
    })
}

/// `slot` followed by something that cannot continue a tag name
fn is_slot_keyword(cursor: &Cursor<'_>) -> bool {
    if !cursor.starts_with(SLOT) {
        return false;
    }
    match cursor.rest()[SLOT.len()..].chars().next() {
        Some(ch) => ch == chars::COLON || !chars::is_tag_name_char(ch),
        None => true,
    }
}

/// `<x-slot[:inline] attrs>`
fn match_slot_tag<'a>(cursor: &mut Cursor<'a>) -> Option<Matched<'a>> {
    if !is_slot_keyword(cursor) {
        return None;
    }
    cursor.eat_str(SLOT);

    let inline_name = if cursor.eat(chars::COLON) {
        Some(take_inline_slot_name(cursor)?)
    } else {
        None
    };

    let attributes = scan_attributes(cursor)?;
    let self_closing = finish_tag(cursor)?;

    Some(Matched {
        kind: TagKind::SlotOpening,
        name: SLOT,
        attributes,
        inline_name,
        self_closing,
        len: cursor.pos,
    })
}

/// `\w+(-\w+)*`
fn take_inline_slot_name<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos;
    loop {
        if cursor.take_while(chars::is_word_char).is_empty() {
            return None;
        }
        let before_dash = cursor.pos;
        if !cursor.eat(chars::MINUS) {
            break;
        }
        if !chars::is_word_char(cursor.peek()) {
            cursor.pos = before_dash;
            break;
        }
    }
    Some(&cursor.input[start..cursor.pos])
}

/// `<x-name attrs>` or `<x-name attrs/>`
fn match_component_tag(mut cursor: Cursor<'_>) -> Option<Matched<'_>> {
    let name = cursor.take_while(chars::is_tag_name_char);
    if name.is_empty() {
        return None;
    }

    let attributes = scan_attributes(&mut cursor)?;
    let self_closing = finish_tag(&mut cursor)?;

    Some(Matched {
        kind: if self_closing {
            TagKind::SelfClosing
        } else {
            TagKind::Opening
        },
        name,
        attributes,
        inline_name: None,
        self_closing,
        len: cursor.pos,
    })
}

/// Consume `>` or `/>`. An opening `>` directly after `=` or `-` does
/// not close a tag.
fn finish_tag(cursor: &mut Cursor<'_>) -> Option<bool> {
    if cursor.eat_str("/>") {
        return Some(true);
    }
    if cursor.peek() == chars::GT && !cursor.at_end() {
        if matches!(cursor.previous(), Some(chars::EQ) | Some(chars::MINUS)) {
            return None;
        }
        cursor.pos += 1;
        return Some(false);
    }
    None
}

/// Scan the attribute list of a tag, stopping before `>`/`/>`. Every
/// attribute must be preceded by whitespace. Returns the raw text,
/// trailing whitespace included.
fn scan_attributes<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos;

    loop {
        let whitespace = cursor.skip_whitespace();
        if cursor.at_end() {
            return None;
        }
        if cursor.peek() == chars::GT || cursor.starts_with("/>") {
            break;
        }
        if whitespace == 0 {
            return None;
        }
        scan_attribute(cursor)?;
    }

    Some(&cursor.input[start..cursor.pos])
}

/// One attribute of any supported form
fn scan_attribute(cursor: &mut Cursor<'_>) -> Option<()> {
    if cursor.starts_with(CLASS_HELPER) || cursor.starts_with(STYLE_HELPER) {
        cursor.pos += CLASS_HELPER.len() - 1;
        let len = scan_balanced_parens(cursor.rest())?;
        cursor.pos += len;
        return Some(());
    }

    if cursor.starts_with("{{") {
        return scan_attribute_bag_echo(cursor);
    }

    if cursor.starts_with(":$") {
        let start = cursor.pos;
        cursor.pos += 2;
        if !cursor.take_while(chars::is_word_char).is_empty() {
            return Some(());
        }
        cursor.pos = start;
    }

    let name = cursor.take_while(chars::is_attribute_name_char);
    if name.is_empty() {
        return None;
    }
    if cursor.eat(chars::EQ) {
        scan_attribute_value(cursor)?;
    }
    Some(())
}

/// `{{ $attributes... }}` with no `}` inside
fn scan_attribute_bag_echo(cursor: &mut Cursor<'_>) -> Option<()> {
    cursor.eat_str("{{");
    cursor.skip_whitespace();
    if !cursor.eat_str(ATTRIBUTES_VARIABLE) {
        return None;
    }
    let close = cursor.rest().find("}}")?;
    if cursor.rest()[..close].contains(chars::RBRACE) {
        return None;
    }
    cursor.pos += close + 2;
    Some(())
}

/// `"..."`, `'...'` or a bare run. A bare value never swallows the `/`
/// of a closing `/>`.
fn scan_attribute_value(cursor: &mut Cursor<'_>) -> Option<()> {
    let quote = cursor.peek();
    if chars::is_quote(quote) && !cursor.at_end() {
        cursor.pos += 1;
        let close = cursor.rest().find(quote)?;
        cursor.pos += close + 1;
        return Some(());
    }

    let value = cursor.take_while(chars::is_bare_value_char);
    if value.is_empty() {
        return None;
    }
    if value.ends_with(chars::SLASH) && cursor.peek() == chars::GT {
        cursor.pos -= 1;
    }
    Some(())
}
