//! Content chunking, snippet generation, and content fingerprinting.
//!
//! Pure functions with no state. All indexing is done in characters so
//! multi-byte UTF-8 content never splits inside a code point.

/// Split content into overlapping windows of `chunk_size` characters.
///
/// Content that fits in a single window is returned unchanged,
/// byte-identical. Longer content is walked in steps of
/// `chunk_size - overlap`; the step is clamped to at least one
/// character so `overlap >= chunk_size` can never loop forever.
/// Windows that are entirely whitespace are dropped, but kept windows
/// store the raw slice, not a trimmed copy. The final window always
/// reaches the true end of the content.
pub fn chunk_content(content: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    // Byte offset of every char boundary, plus the end of the string.
    let mut boundaries: Vec<usize> = content.char_indices().map(|(i, _)| i).collect();
    boundaries.push(content.len());
    let total = boundaries.len() - 1;

    if total <= chunk_size {
        return vec![content.to_string()];
    }

    let step = chunk_size.saturating_sub(overlap).max(1);
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < total {
        let end = (pos + chunk_size).min(total);
        let window = &content[boundaries[pos]..boundaries[end]];
        if !window.trim().is_empty() {
            chunks.push(window.to_string());
        }
        if pos + chunk_size >= total {
            break;
        }
        pos += step;
    }

    chunks
}

/// Generate a display excerpt of at most roughly `max_length` characters,
/// centered on the earliest query-term match.
///
/// Query terms shorter than three characters are ignored; a query with
/// no usable terms returns the head of the content. When terms exist
/// but none matches, the window anchors at the content start. The
/// window is widened to the nearest word boundary on each side, and
/// elided with `...` where it does not touch the content edges.
pub fn generate_snippet(content: &str, query: &str, max_length: usize) -> String {
    if content.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = content.chars().collect();
    let lower: Vec<char> = chars.iter().map(|c| first_lowercase(*c)).collect();
    let total = chars.len();

    let terms: Vec<Vec<char>> = query
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .map(|t| t.chars().map(first_lowercase).collect())
        .collect();

    if terms.is_empty() {
        return head(content, max_length);
    }

    // Earliest (lowest index) occurrence of any term, case-insensitive.
    // When nothing matches the window anchors at the content start.
    let (match_pos, match_len) = (0..total)
        .find_map(|i| {
            terms
                .iter()
                .find(|term| lower[i..].starts_with(term.as_slice()))
                .map(|term| (i, term.len()))
        })
        .unwrap_or((0, 0));
    let match_end = match_pos + match_len;

    // Center a max_length window on the match, clamped to bounds.
    let half = max_length / 2;
    let mut start = match_pos.saturating_sub(half);
    let mut end = (start + max_length).min(total);
    if end - start < max_length {
        start = end.saturating_sub(max_length);
    }

    // Widen to word boundaries where that does not cross the match.
    // The scan on each side is capped at half a window so space-sparse
    // content cannot balloon the snippet far past max_length.
    if start > 0 {
        let floor = start.saturating_sub(half);
        if let Some(space) = (floor..start).rev().find(|&i| chars[i].is_whitespace()) {
            let candidate = space + 1;
            if candidate <= match_pos {
                start = candidate;
            }
        }
    }
    if end < total {
        let ceiling = (end + half).min(total);
        if let Some(space) = (end..ceiling).find(|&i| chars[i].is_whitespace()) {
            if space >= match_end {
                end = space;
            }
        }
    }

    let body: String = chars[start..end].iter().collect();
    let prefix = if start > 0 { "..." } else { "" };
    let suffix = if end < total { "..." } else { "" };
    format!("{}{}{}", prefix, body, suffix)
}

/// Deterministic, non-cryptographic 32-bit content fingerprint.
///
/// Polynomial rolling hash over the characters, absolute value,
/// base-36 encoded. Used solely as an embedding-cache key; collisions
/// cost a redundant re-embed, never a wrong result.
pub fn hash_content(content: &str) -> String {
    let mut hash: i32 = 0;
    for ch in content.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }
    to_base36(hash.unsigned_abs())
}

/// First character of the lowercase expansion; keeps char positions 1:1.
fn first_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Head of the content, truncated to `max_length` characters.
fn head(content: &str, max_length: usize) -> String {
    content.chars().take(max_length).collect()
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
#[path = "chunker_tests.rs"]
mod tests;
