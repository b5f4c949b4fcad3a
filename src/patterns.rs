//! Input patterns for testing and benchmarking the sort.
//!
//! All generators produce `Vec<i32>`. The random ones draw from a single
//! process-wide seed so that a failing run can be reproduced, see
//! [`random_init_seed`].

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values arranged into `saw_count` ascending runs.
pub fn ascending_saw(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort_unstable();
    }

    vals
}

/// Random values arranged into `saw_count` descending runs.
pub fn descending_saw(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

/// Random values arranged into runs of randomly picked direction.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = len / saw_count.max(1);
    let directions = random_uniform(len / chunk_len + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

/// An ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);
    let mid = len / 2;

    vals[..mid].sort_unstable();
    vals[mid..].sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Switch the random generators to fresh entropy on every call.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed all random generators derive from.
///
/// Picked once per process, so every generator call is deterministic within a
/// run. Set the `OVERRIDE_SEED` environment variable to pin it across runs,
/// e.g. to reproduce a failure a test harness printed.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();

        *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
            Ok(val) => u64::from_str(&val).expect("OVERRIDE_SEED must be a u64"),
            Err(_) => thread_rng().gen(),
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

fn new_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
