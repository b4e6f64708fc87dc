/*
 * Character Codes
 *
 * Characters and character classes shared by the tag scanner,
 * the attribute rewriter and the attribute tokenizer.
 */

//! Character constants used throughout the compiler

// Special characters
pub const EOF: char = '\0';
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';
pub const VTAB: char = '\x0B';
pub const FF: char = '\x0C';
pub const RETURN: char = '\r';
pub const SPACE: char = ' ';

// Punctuation
pub const DQ: char = '"';
pub const SQ: char = '\'';
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const MINUS: char = '-';
pub const PERIOD: char = '.';
pub const SLASH: char = '/';
pub const COLON: char = ':';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const AT: char = '@';
pub const BACKSLASH: char = '\\';
pub const UNDERSCORE: char = '_';

// Braces
pub const RBRACE: char = '}';

/// Check if character is whitespace
pub fn is_whitespace(ch: char) -> bool {
    ch == SPACE || ch == TAB || ch == NEWLINE || ch == RETURN || ch == VTAB || ch == FF
}

/// Check if character is a quote that can delimit an attribute value
pub fn is_quote(ch: char) -> bool {
    ch == SQ || ch == DQ
}

/// Word character: ASCII letter, digit or underscore
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == UNDERSCORE
}

/// Character allowed in a component tag name (`x-foo.bar::baz`)
pub fn is_tag_name_char(ch: char) -> bool {
    is_word_char(ch) || ch == MINUS || ch == COLON || ch == PERIOD
}

/// Character allowed in an attribute name (`bind:foo`, `@click.prevent`)
pub fn is_attribute_name_char(ch: char) -> bool {
    is_tag_name_char(ch) || ch == AT
}

/// Character allowed in an unquoted attribute value inside a tag
pub fn is_bare_value_char(ch: char) -> bool {
    !is_whitespace(ch) && !is_quote(ch) && ch != EQ && ch != LT && ch != GT
}
