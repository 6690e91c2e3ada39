//! Value escaping for transformation parameters.
//!
//! The service uses two escaping conventions inside the URL path:
//! a literal `p` suffix in place of `%` for percentage dimensions and
//! offsets, and tilde-escaping for free-form overlay text.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must not appear raw in a URL path segment. Tilde is
/// deliberately excluded: the `~` escapes introduced below have to survive
/// percent-encoding.
const TEXT_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

/// Replace `%` with the literal `p` for percent-suffixed values.
///
/// `30%` becomes `30p`; plain numeric values pass through unchanged.
pub fn escape_percent(value: impl ToString) -> String {
    value.to_string().replace('%', "p")
}

/// Escape free-form text for embedding in a URL path segment.
///
/// Literal tildes are doubled, path separators become `~s`, and newlines
/// become `~n`; the remainder is percent-encoded. The order matters:
/// tildes are doubled first so the structural `~s`/`~n` escapes stay
/// unambiguous.
pub fn escape_text(text: &str) -> String {
    let replaced = text
        .replace('~', "~~")
        .replace('/', "~s")
        .replace('\n', "~n");
    utf8_percent_encode(&replaced, TEXT_SEGMENT).to_string()
}
