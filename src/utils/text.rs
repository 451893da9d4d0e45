//! Text helpers for table cell rendering.

/// Line break inserted by [`chunk_memo`].
pub const MEMO_BREAK: char = '\n';

/// Display sentinel for absent values (address, memo, photo, map link).
pub const NONE_SENTINEL: &str = "none";

/// Break the memo display text after every 10th character so long
/// free-text notes stay column-safe. Counted in characters, not bytes:
/// memos are frequently CJK.
///
/// The transform is reversible via [`dechunk_memo`] for any memo that does
/// not itself contain the break character.
pub fn chunk_memo(memo: &str) -> String {
    let mut out = String::with_capacity(memo.len() + memo.len() / 10 + 1);
    for (i, ch) in memo.chars().enumerate() {
        out.push(ch);
        if i % 10 == 9 {
            out.push(MEMO_BREAK);
        }
    }
    out
}

/// Undo [`chunk_memo`], recovering the original memo verbatim.
pub fn dechunk_memo(chunked: &str) -> String {
    chunked.chars().filter(|c| *c != MEMO_BREAK).collect()
}

/// Empty-to-sentinel defaulting used when a record is built from a draft.
pub fn or_none(value: &str) -> String {
    if value.trim().is_empty() {
        NONE_SENTINEL.to_string()
    } else {
        value.to_string()
    }
}
