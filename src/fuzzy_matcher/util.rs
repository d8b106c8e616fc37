use crate::fuzzy_matcher::IndexType;

/// Checks whether `pattern` occurs in `candidate` as an ordered,
/// ASCII-case-insensitive subsequence.
///
/// Single left-to-right pass, no allocation. An empty pattern matches
/// everything, including an empty candidate.
pub fn has_subsequence(pattern: &[u8], candidate: &[u8]) -> bool {
    if pattern.len() > candidate.len() {
        return false;
    }

    let mut rest = candidate.iter();
    pattern.iter().all(|&p| {
        let lower = p.to_ascii_lowercase();
        let upper = p.to_ascii_uppercase();
        rest.any(|&ch| ch == lower || ch == upper)
    })
}

/// Wraps every byte at `indices` in `[` `]`.
///
/// `indices` must be strictly increasing, which is what the scorer produces.
pub fn wrap_matches(line: &[u8], indices: &[IndexType]) -> Vec<u8> {
    let mut ret = Vec::with_capacity(line.len() + indices.len() * 2);
    let mut indices = indices.iter().peekable();

    for (idx, &ch) in line.iter().enumerate() {
        if indices.next_if(|&&i| i == idx).is_some() {
            ret.push(b'[');
            ret.push(ch);
            ret.push(b']');
        } else {
            ret.push(ch);
        }
    }

    ret
}
