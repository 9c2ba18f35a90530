// src/similarity.rs
//! Approximate matching via normalized edit distance over canonical text.

use crate::shape;
use serde_json::Value;

/// Levenshtein edit distance between two strings.
///
/// Two-row dynamic programming: O(m * n) time, O(min) space.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let len_a = a_chars.len();
    let len_b = b_chars.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let mut prev: Vec<usize> = (0..=len_b).collect();
    let mut curr: Vec<usize> = vec![0; len_b + 1];

    for i in 1..=len_a {
        curr[0] = i;
        for j in 1..=len_b {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (curr[j - 1] + 1)
                .min(prev[j] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[len_b]
}

/// Similarity of two shapes in `[0, 1]`.
///
/// `1 - distance / average_length` over the two canonical texts, floored
/// at zero. Returns exactly `1.0` only when the canonical texts are
/// identical, i.e. when the fingerprints match.
#[must_use]
pub fn shape_similarity(a: &Value, b: &Value) -> f64 {
    text_similarity(&shape::canonical_text(a), &shape::canonical_text(b))
}

/// Same score computed over already-canonical text.
#[must_use]
pub fn text_similarity(sa: &str, sb: &str) -> f64 {
    if sa == sb {
        return 1.0;
    }

    let avg_len = (sa.chars().count() + sb.chars().count()) as f64 / 2.0;
    if avg_len == 0.0 {
        return 1.0;
    }

    let distance = edit_distance(sa, sb) as f64;
    (1.0 - distance / avg_len).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn distance_identical() {
        assert_eq!(edit_distance("hello", "hello"), 0);
    }

    #[test]
    fn distance_insert_delete_substitute() {
        assert_eq!(edit_distance("hello", "hellow"), 1);
        assert_eq!(edit_distance("hello", "hell"), 1);
        assert_eq!(edit_distance("hello", "jello"), 1);
    }

    #[test]
    fn distance_empty() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn identical_shapes_score_one() {
        let v = json!({"a": 1, "b": [true, null]});
        assert_eq!(shape_similarity(&v, &v), 1.0);
    }

    #[test]
    fn key_order_does_not_lower_score() {
        let a = json!({"a": 1, "b": 2});
        let b = json!({"b": 2, "a": 1});
        assert_eq!(shape_similarity(&a, &b), 1.0);
    }

    #[test]
    fn near_shapes_score_below_one() {
        let a = json!({"a": 1, "b": 2, "c": 3});
        let b = json!({"a": 1, "b": 2, "c": 3, "d": 4});
        let sim = shape_similarity(&a, &b);
        assert!(sim > 0.5 && sim < 1.0, "got {sim}");
    }

    #[test]
    fn score_stays_in_bounds() {
        let a = json!({"foo": 1});
        let b = json!([[[["completely", "different", "structure"]]]]);
        let sim = shape_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&sim), "got {sim}");
    }

    #[test]
    fn disjoint_shapes_score_low() {
        let a = json!({"foo": 1});
        let b = json!({"bar": 2});
        assert!(shape_similarity(&a, &b) < 0.99);
    }
}
