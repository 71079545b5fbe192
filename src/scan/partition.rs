//! Splitting the wordlist into per-worker chunks.

use crate::core::error::{Result, ScanError};

/// Split `paths` into `parts` contiguous chunks of near-equal size.
///
/// The first `len % parts` chunks get one extra element. Concatenating the
/// chunks in order yields `paths` again. An empty input still produces
/// `parts` (empty) chunks so every worker gets an assignment.
///
/// # Examples
/// ```
/// use dirprobe::scan::partition::split;
///
/// let paths: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
/// let chunks = split(&paths, 2).unwrap();
/// assert_eq!(chunks, vec![vec!["a", "b"], vec!["c"]]);
/// ```
pub fn split<T: Clone>(paths: &[T], parts: usize) -> Result<Vec<Vec<T>>> {
    if parts == 0 {
        return Err(ScanError::InvalidArgument(
            "cannot split paths into 0 parts".to_string(),
        ));
    }

    let size = paths.len() / parts;
    let remainder = paths.len() % parts;

    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let len = size + usize::from(i < remainder);
        chunks.push(paths[start..start + len].to_vec());
        start += len;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split__remainder_goes_to_first_chunks() {
        let paths = words(&["a", "b", "c", "d", "e", "f", "g"]);

        let chunks = split(&paths, 3).unwrap();

        assert_eq!(
            chunks,
            vec![words(&["a", "b", "c"]), words(&["d", "e"]), words(&["f", "g"])]
        );
    }

    #[test]
    fn test_split__even_division() {
        let paths = words(&["a", "b", "c", "d"]);

        let chunks = split(&paths, 2).unwrap();

        assert_eq!(chunks, vec![words(&["a", "b"]), words(&["c", "d"])]);
    }

    #[test]
    fn test_split__more_parts_than_paths() {
        let paths = words(&["a", "b"]);

        let chunks = split(&paths, 5).unwrap();

        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0], words(&["a"]));
        assert_eq!(chunks[1], words(&["b"]));
        assert!(chunks[2..].iter().all(Vec::is_empty));
    }

    #[test]
    fn test_split__empty_input_gives_empty_chunks() {
        let paths: Vec<String> = vec![];

        let chunks = split(&paths, 4).unwrap();

        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_split__single_part_keeps_everything() {
        let paths = words(&["a", "b", "c"]);

        let chunks = split(&paths, 1).unwrap();

        assert_eq!(chunks, vec![paths]);
    }

    #[test]
    fn test_split__zero_parts_is_invalid_argument() {
        let paths = words(&["a"]);

        let err = split(&paths, 0).unwrap_err();

        assert!(matches!(err, ScanError::InvalidArgument(_)));
    }
}
