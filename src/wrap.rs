//! Fixed-width splitting of task lines into table segments.

/// Split `line` into contiguous segments of at most `width` characters.
///
/// Breaks are count based and may fall mid-word. An empty line yields a single
/// empty segment, and a line whose length is an exact multiple of `width` has no
/// trailing empty segment. `width` must be at least 1.
pub fn wrap(line: &str, width: usize) -> Vec<&str> {
    debug_assert!(width > 0, "wrap width must be at least 1");
    let width = width.max(1);

    let mut segments = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in line.char_indices() {
        if count == width {
            segments.push(&line[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if count > 0 || segments.is_empty() {
        segments.push(&line[start..]);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 44;

    fn line_of(len: usize) -> String {
        (0..len).map(|i| char::from(b'a' + (i % 26) as u8)).collect()
    }

    #[test]
    fn test_empty_line_is_one_empty_segment() {
        assert_eq!(wrap("", W), vec![""]);
    }

    #[test]
    fn test_short_line_is_untouched() {
        assert_eq!(wrap("Buy milk", W), vec!["Buy milk"]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_segment() {
        let line = line_of(88);
        let segments = wrap(&line, W);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.len() == W));

        assert_eq!(wrap(&line_of(44), W).len(), 1);
    }

    #[test]
    fn test_remainder_segment() {
        let line = line_of(90);
        let lens: Vec<usize> = wrap(&line, W).iter().map(|s| s.len()).collect();
        assert_eq!(lens, vec![44, 44, 2]);
    }

    #[test]
    fn test_segments_reassemble_line() {
        for len in [1, 43, 45, 131, 132, 133, 500] {
            let line = line_of(len);
            let segments = wrap(&line, W);
            assert_eq!(segments.concat(), line);
            assert_eq!(segments.len(), len.div_ceil(W));
            let (last, full) = segments.split_last().unwrap();
            assert!(full.iter().all(|s| s.len() == W));
            assert!(!last.is_empty() && last.len() <= W);
        }
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let line = "é".repeat(45);
        let segments = wrap(&line, W);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].chars().count(), 44);
        assert_eq!(segments[1], "é");
    }
}
