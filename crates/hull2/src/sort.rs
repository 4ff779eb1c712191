//! Randomized in-place quicksort.
//!
//! Ranges up to `INSERTION_CUTOFF` elements are finished with insertion sort.
//! Larger ranges pick a uniform random pivot, move it to the front, partition
//! the rest into `< pivot` and `>= pivot` with a single forward scan, and place
//! the pivot between the two parts. The shorter part is sorted recursively and
//! the longer one iteratively, so stack depth stays O(log n) even on unlucky
//! pivots.
//!
//! Not stable. Inputs with many equal keys degrade toward O(n²) because all
//! equal keys land on the `>= pivot` side.

use std::cmp::Ordering;

use rand::Rng;

use crate::predicates::cmp_xy;
use crate::types::Point2;

/// Ranges of at most this many elements use insertion sort.
pub const INSERTION_CUTOFF: usize = 10;

/// Sort points by `cmp_xy` using the thread-local RNG for pivots.
pub fn quicksort(points: &mut [Point2]) {
    quicksort_with(points, &mut rand::thread_rng());
}

/// Sort points by `cmp_xy` with a caller-supplied RNG (reproducible pivots).
pub fn quicksort_with<R: Rng + ?Sized>(points: &mut [Point2], rng: &mut R) {
    quicksort_by(points, rng, cmp_xy);
}

/// Generic randomized quicksort under `cmp`.
pub fn quicksort_by<T, R, F>(v: &mut [T], rng: &mut R, mut cmp: F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(v, rng, &mut cmp);
}

fn sort_range<T, R, F>(mut v: &mut [T], rng: &mut R, cmp: &mut F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > INSERTION_CUTOFF {
        let mid = partition(v, rng, cmp);
        let (left, rest) = std::mem::take(&mut v).split_at_mut(mid);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_range(left, rng, cmp);
            v = right;
        } else {
            sort_range(right, rng, cmp);
            v = left;
        }
    }
    insertion_sort(v, cmp);
}

/// Returns the final pivot position.
fn partition<T, R, F>(v: &mut [T], rng: &mut R, cmp: &mut F) -> usize
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = rng.gen_range(0..v.len());
    v.swap(0, pivot);
    let mut first_ge = 1;
    for k in 1..v.len() {
        if cmp(&v[k], &v[0]) == Ordering::Less {
            v.swap(k, first_ge);
            first_ge += 1;
        }
    }
    v.swap(0, first_ge - 1);
    first_ge - 1
}

fn insertion_sort<T, F>(v: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && cmp(&v[j], &v[j - 1]) == Ordering::Less {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn is_sorted(points: &[Point2]) -> bool {
        points
            .windows(2)
            .all(|w| cmp_xy(&w[0], &w[1]) != Ordering::Greater)
    }

    fn random_points(n: usize, seed: u64) -> Vec<Point2> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect()
    }

    #[test]
    fn small_ranges_use_insertion_path() {
        let mut pts = random_points(INSERTION_CUTOFF, 1);
        quicksort(&mut pts);
        assert!(is_sorted(&pts));
    }

    #[test]
    fn sorts_large_random_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pts = random_points(2_000, 3);
        quicksort_with(&mut pts, &mut rng);
        assert!(is_sorted(&pts));
    }

    #[test]
    fn already_sorted_and_reversed_inputs() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut asc: Vec<Point2> = (0..500).map(|i| Point2::new(i as f64, 0.0)).collect();
        let expected = asc.clone();
        quicksort_with(&mut asc, &mut rng);
        assert_eq!(asc, expected);
        let mut desc: Vec<Point2> = expected.iter().rev().copied().collect();
        quicksort_with(&mut desc, &mut rng);
        assert_eq!(desc, expected);
    }

    #[test]
    fn ties_on_x_are_broken_by_y() {
        let mut pts: Vec<Point2> = (0..40)
            .map(|i| Point2::new((i % 3) as f64, (40 - i) as f64))
            .collect();
        quicksort(&mut pts);
        assert!(is_sorted(&pts));
        assert_eq!(pts[0], Point2::new(0.0, 1.0));
    }

    #[test]
    fn all_equal_keys_terminate() {
        let mut pts = vec![Point2::new(1.0, 1.0); 3_000];
        quicksort(&mut pts);
        assert!(pts.iter().all(|p| *p == Point2::new(1.0, 1.0)));
    }

    #[test]
    fn generic_sort_on_integers() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut v: Vec<i64> = (0..300).map(|i| (i * 7919) % 263 - 100).collect();
        let mut expected = v.clone();
        expected.sort();
        quicksort_by(&mut v, &mut rng, |a, b| a.cmp(b));
        assert_eq!(v, expected);
    }
}
