//! Gestalt (Ratcliff/Obershelp) string similarity
//!
//! The ratio is `2 * M / T` where `T` is the combined length of both strings
//! and `M` the number of characters in matching blocks. Blocks are found by
//! taking the longest common run, then recursing on the text to its left and
//! right.

/// Similarity of `a` and `b` in `0.0..=1.0`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Total size of all matching blocks between `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest common run in `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, k)` with `a[i..i+k] == b[j..j+k]`. Ties go to the run that
/// ends first in `a`, then first in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);
    // run[j - blo] = length of the common run ending at a[i-1], b[j]
    let mut run = vec![0usize; bhi - blo];

    for i in alo..ahi {
        let mut next = vec![0usize; bhi - blo];
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            let k = if j > blo { run[j - blo - 1] + 1 } else { 1 };
            next[j - blo] = k;
            if k > best_k {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_k = k;
            }
        }
        run = next;
    }

    (best_i, best_j, best_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_python_files() {
        let score = ratio("test.py", "text.py");
        assert!((score - 12.0 / 14.0).abs() < 1e-9);
        assert_eq!((score * 100.0) as u32, 85);
    }

    #[test]
    fn test_identical_and_disjoint() {
        assert_eq!(ratio("config.toml", "config.toml"), 1.0);
        assert_eq!(ratio("abc", "xyz"), 0.0);
        assert_eq!(ratio("", ""), 1.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_symmetric_on_filenames() {
        let pairs = [
            ("test.py", "text.py"),
            ("Cargo.toml", "cargo.lock"),
            ("README.md", "readme.md"),
        ];
        for (a, b) in pairs {
            assert_eq!(ratio(a, b), ratio(b, a), "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_counts_multiple_blocks() {
        // "ab" and "cd" match separately around the differing middle
        assert_eq!(ratio("abXcd", "abYcd"), 0.8);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_eq!(ratio("café.txt", "cafe.txt"), 2.0 * 7.0 / 16.0);
    }
}
