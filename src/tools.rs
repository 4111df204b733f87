//! Some helper functions on binary strings

/// Write the lowest ```width``` bits of a value as a string of 0 and 1, most significant bit first.
///
/// Higher bits are ignored, a zero width gives an empty string.
///
/// ```
/// # use karnaugh::tools::to_bits;
/// assert_eq!(to_bits(5, 4), "0101");
/// assert_eq!(to_bits(6, 2), "10");
/// assert_eq!(to_bits(1, 0), "");
/// ```
pub fn to_bits(value: usize, width: usize) -> String {
    (0..width)
        .rev()
        .map(|b| match (value >> b) & 1 {
            0 => '0',
            _ => '1',
        })
        .collect()
}

/// Read a string of 0 and 1 (most significant bit first).
///
/// Returns None if the string contains other characters or if it is too long to fit in an integer.
/// The empty string is the empty codeword, read as 0.
///
/// ```
/// # use karnaugh::tools::parse_bits;
/// assert_eq!(parse_bits("0101"), Some(5));
/// assert_eq!(parse_bits(""), Some(0));
/// assert_eq!(parse_bits("012"), None);
/// ```
pub fn parse_bits(s: &str) -> Option<usize> {
    if s.len() >= usize::BITS as usize {
        return None;
    }
    s.chars().try_fold(0, |acc, c| match c {
        '0' => Some(acc << 1),
        '1' => Some((acc << 1) | 1),
        _ => None,
    })
}

/// Count the positions where two strings differ.
///
/// Extra characters of the longest string are all counted as differences.
///
/// ```
/// # use karnaugh::tools::hamming_distance;
/// assert_eq!(hamming_distance("0110", "0100"), 1);
/// assert_eq!(hamming_distance("01", "01"), 0);
/// assert_eq!(hamming_distance("01", "0111"), 2);
/// ```
pub fn hamming_distance(a: &str, b: &str) -> usize {
    let common = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    let (la, lb) = (a.chars().count(), b.chars().count());
    common + la.max(lb) - la.min(lb)
}
