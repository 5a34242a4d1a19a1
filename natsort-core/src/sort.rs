//! Sorting helpers built on [`Keyer`]
//!
//! Keys are computed once per element and cached for the comparison phase.
//! With the `parallel` feature, large inputs compute their keys on the
//! rayon thread pool.

use std::cmp::Ordering;

use crate::key::{Keyer, SortKey};
use crate::options::KeyOptions;

/// Input size above which [`par_natsort`] usually beats [`natsort`]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Key function usable with any sort routine
pub fn natsort_key(options: &KeyOptions) -> impl Fn(&str) -> SortKey {
    let keyer = Keyer::new(options.clone());
    move |input| keyer.key(input)
}

/// Comparator usable with `sort_by`
pub fn natcmp(options: &KeyOptions) -> impl Fn(&str, &str) -> Ordering {
    let keyer = Keyer::new(options.clone());
    move |a, b| keyer.compare(a, b)
}

/// Sort `items` in place in natural order
pub fn natsort<T: AsRef<str>>(items: &mut [T], options: &KeyOptions) {
    let keyer = Keyer::new(options.clone());
    items.sort_by_cached_key(|item| keyer.key(item.as_ref()));
}

/// Sorted copy of `items`, optionally reversed
pub fn natsorted<T: AsRef<str> + Clone>(items: &[T], options: &KeyOptions, reverse: bool) -> Vec<T> {
    let mut sorted = items.to_vec();
    natsort(&mut sorted, options);
    if reverse {
        sorted.reverse();
    }
    sorted
}

/// Indices that would sort `items` in natural order
pub fn index_natsorted<T: AsRef<str>>(items: &[T], options: &KeyOptions) -> Vec<usize> {
    let keyer = Keyer::new(options.clone());
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by_cached_key(|&i| keyer.key(items[i].as_ref()));
    indices
}

/// Sort `items` in place, computing keys on the rayon thread pool
///
/// Falls back to [`natsort`] on single-core machines.
#[cfg(feature = "parallel")]
pub fn par_natsort<T: AsRef<str> + Send>(items: &mut Vec<T>, options: &KeyOptions) {
    use rayon::prelude::*;

    if num_cpus::get() < 2 {
        natsort(items, options);
        return;
    }

    log::debug!(
        "Computing {} keys on {} threads",
        items.len(),
        rayon::current_num_threads()
    );

    let keyer = Keyer::new(options.clone());
    let mut keyed: Vec<(SortKey, T)> = std::mem::take(items)
        .into_par_iter()
        .map(|item| (keyer.key(item.as_ref()), item))
        .collect();
    keyed.par_sort_by(|a, b| a.0.cmp(&b.0));
    items.extend(keyed.into_iter().map(|(_, item)| item));
}
