use log::debug;

/// Upper bound on the up-front reservation, 8! orderings.
const MAX_RESERVED: usize = 40_320;

/// All orderings of `values` via Heap's algorithm.
///
/// Each ordering is produced by a single swap from the previous one, so the
/// work per permutation is one copy of the working buffer. Positions are what
/// get permuted: a slice with repeated values yields repeated orderings.
/// An empty or single-element slice yields exactly one ordering.
pub fn permutations<T: Clone>(values: &[T]) -> Vec<Vec<T>> {
    debug!("Generating permutations of {} values", values.len());

    let mut working = values.to_vec();
    let mut result = Vec::with_capacity(capacity_hint(values.len()));

    if working.len() <= 1 {
        result.push(working);
        return result;
    }

    let n = working.len();
    heap_permute(&mut working, n, &mut result);

    debug!("Generated {} permutations", result.len());
    result
}

fn heap_permute<T: Clone>(working: &mut [T], k: usize, out: &mut Vec<Vec<T>>) {
    if k == 1 {
        out.push(working.to_vec());
        return;
    }

    for i in 0..k {
        heap_permute(working, k - 1, out);
        if k % 2 == 1 {
            working.swap(i, k - 1);
        } else {
            working.swap(0, k - 1);
        }
    }
}

/// `n!` when it fits under [`MAX_RESERVED`], otherwise the cap.
fn capacity_hint(n: usize) -> usize {
    (1..=n)
        .try_fold(1_usize, |acc, x| acc.checked_mul(x).filter(|&v| v <= MAX_RESERVED))
        .unwrap_or(MAX_RESERVED)
}
