//! Bounded text. Every name and clue in the game has a maximum length in
//! bytes; anything longer is silently cut.

/// Longest room name, in bytes.
pub const ROOM_NAME_MAX: usize = 63;

/// Longest suspect name, in bytes.
pub const SUSPECT_NAME_MAX: usize = 63;

/// Longest clue text, in bytes.
pub const CLUE_TEXT_MAX: usize = 255;

/// Returns the longest prefix of `text` that is at most `max` bytes long
/// and still ends on a character boundary.
///
/// # Examples
///
/// ```
/// use detective::text::bounded;
///
/// assert_eq!(bounded("Biblioteca", 64), "Biblioteca");
/// assert_eq!(bounded("Biblioteca", 5), "Bibli");
///
/// // "ó" takes two bytes and is never split in half.
/// assert_eq!(bounded("Sótão", 2), "S");
/// ```
pub fn bounded(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }

    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
