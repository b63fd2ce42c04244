//! Representation-specific genetic operators.
//!
//! Every crossover here produces exactly **one** child from two parents.
//! The pure `*_at` / explicit-point forms take the crossover point as an
//! argument so that the exact recombination contract can be checked
//! independently of the random draw.
//!
//! # Crossover Operators
//!
//! - [`bitmask_crossover`]: low `k` bits from one integer, the rest from the other
//! - [`single_point_crossover`]: prefix from one list, suffix from the other
//! - [`order_crossover`] (OX): Davis (1985), keeps permutations valid
//!
//! # Mutation Operators
//!
//! - [`flip_low_bit`]: flip one of the low bits of an integer
//! - [`flip_bits`]: independent per-gene bit flips
//! - [`swap_mutation`]: exchange two random positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Mask covering the low `k` bits.
pub fn low_bit_mask(k: u32) -> i64 {
    if k >= 63 {
        i64::MAX
    } else {
        (1i64 << k) - 1
    }
}

/// Bitmask single-point crossover on integers.
///
/// The child takes the bits below `k` from `parent_b` and every other bit
/// from `parent_a`: `(parent_a & !mask) | (parent_b & mask)`.
///
/// ```
/// use u_evolve::ga::operators::bitmask_crossover;
///
/// assert_eq!(bitmask_crossover(0b11111, 0b00000, 3), 0b11000);
/// assert_eq!(bitmask_crossover(0b00000, 0b11111, 3), 0b00111);
/// ```
pub fn bitmask_crossover(parent_a: i64, parent_b: i64, k: u32) -> i64 {
    let mask = low_bit_mask(k);
    (parent_a & !mask) | (parent_b & mask)
}

/// Single-point crossover on lists.
///
/// Positions below `k` come from `parent_a`, positions from `k` on come
/// from `parent_b`. `k` is clamped to the genome length.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<T: Clone>(parent_a: &[T], parent_b: &[T], k: usize) -> Vec<T> {
    assert_eq!(parent_a.len(), parent_b.len(), "parents must have equal length");
    let k = k.min(parent_a.len());
    let mut child = Vec::with_capacity(parent_a.len());
    child.extend_from_slice(&parent_a[..k]);
    child.extend_from_slice(&parent_b[k..]);
    child
}

/// Order Crossover (OX) for permutations.
///
/// Draws two cut points uniformly over `0..n` and delegates to
/// [`order_crossover_at`].
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng + ?Sized>(
    parent_a: &[usize],
    parent_b: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let start = rng.random_range(0..n);
    let end = rng.random_range(0..n);
    order_crossover_at(parent_a, parent_b, start, end)
}

/// Order Crossover (OX) with explicit cut points.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Normalize the cut points so `start <= end` (equal points keep one gene)
/// 2. Copy `parent_a[start..=end]` to the child at the same positions
/// 3. Scan `parent_b` circularly from `end + 1`, writing into the child
///    circularly from `end + 1`, skipping cities already in the child
///
/// Because every city occurs in `parent_b` exactly once and the scan skips
/// cities already placed, the child is always a permutation of `0..n`.
///
/// ```
/// use u_evolve::ga::operators::order_crossover_at;
///
/// let a = [0, 1, 2, 3, 4, 5];
/// let b = [5, 4, 3, 2, 1, 0];
/// assert_eq!(order_crossover_at(&a, &b, 1, 2), vec![3, 1, 2, 0, 5, 4]);
/// ```
///
/// # Panics
/// Panics if parents have different lengths, are empty, or a cut point is
/// out of range.
pub fn order_crossover_at(
    parent_a: &[usize],
    parent_b: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");
    assert!(start < n && end < n, "cut points must lie within 0..{n}");

    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = parent_a[i];
        placed[parent_a[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let city = parent_b[(end + 1 + offset) % n];
        if !placed[city] {
            child[pos] = city;
            placed[city] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips one uniformly chosen bit among the low `bits` bits of `value`.
///
/// Does nothing when `bits == 0`.
pub fn flip_low_bit<R: Rng + ?Sized>(value: i64, bits: u32, rng: &mut R) -> i64 {
    if bits == 0 {
        return value;
    }
    value ^ (1i64 << rng.random_range(0..bits.min(63)))
}

/// Flips each gene independently with probability `rate`.
///
/// Draws exactly one uniform number per gene.
pub fn flip_bits<R: Rng + ?Sized>(genes: &mut [bool], rate: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < rate {
            *gene = !*gene;
        }
    }
}

/// Swap mutation: exchange two uniformly chosen positions.
///
/// Both positions are drawn independently, so the swap may be a no-op.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng + ?Sized>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

/// Checks that `perm` is a permutation of `0..perm.len()`.
pub fn is_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    for &v in perm {
        if v >= perm.len() || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
