//! `kavya trending` command implementation.

use crate::core::trending::{self, DEFAULT_SAMPLE_SIZE};

/// Print a random selection of trending keywords.
pub fn run(count: Option<usize>) {
    let picks = trending::sample(&mut rand::thread_rng(), count.unwrap_or(DEFAULT_SAMPLE_SIZE));
    println!("🔥 Trending now:");
    for keyword in picks {
        println!("  #{keyword}");
    }
}
