//! Weighted selection of a parent pair in a single scan.

/// Two parents chosen for crossover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentPair {
    /// Index of the first parent.
    pub first: usize,
    /// Index of the second parent.
    pub second: usize,
    /// Share of the pair's combined weight held by `first`, in `[0, 1]`.
    pub blend: f64,
}

/// Select two parents from `weights` (summing to `sum`) using the uniform
/// draws `r1` and `r2` in `[0, 1)`.
///
/// The draws are ordered so that `r1 <= r2`. The scan subtracts weights from
/// a target starting at `sum * r1` until an entity's weight covers it; that
/// entity is the first parent. The target is then advanced by the gap
/// `sum * (r2 - r1)` less `w_first * r2`, and the scan continues past the
/// first parent to find the second one the same way. A slot that is never
/// covered falls back to the last entity, so the result is always in bounds.
///
/// # Panics
///
/// Panics if `weights` is empty.
pub fn select_pair(weights: &[f64], sum: f64, r1: f64, r2: f64) -> ParentPair {
    assert!(!weights.is_empty(), "cannot select from an empty population");
    let last = weights.len() - 1;
    let (r1, r2) = if r1 > r2 { (r2, r1) } else { (r1, r2) };

    let gap = sum * (r2 - r1);
    let mut target = sum * r1;
    let mut first: Option<usize> = None;
    let mut second: Option<usize> = None;

    for (i, &w) in weights.iter().enumerate() {
        if target <= w {
            match first {
                None => {
                    first = Some(i);
                    target += gap - w * r2;
                    continue;
                }
                Some(_) => {
                    second = Some(i);
                    break;
                }
            }
        }
        target -= w;
    }

    let first = first.unwrap_or(last);
    let second = second.unwrap_or(last);
    let (wx, wy) = (weights[first], weights[second]);
    let total = wx + wy;
    let blend = if total > 0.0 { wx / total } else { 0.5 };

    ParentPair {
        first,
        second,
        blend,
    }
}
