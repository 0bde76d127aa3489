//! Quick single-run benchmark for development iteration.
//!
//! Run with `cargo run --release --features bench --bin median_quick`.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use medley::Sorted;
use medley::median::find_median_sorted;
use medley::profiling;

fn sorted_input(rng: &mut StdRng, len: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect();
    values.sort_unstable();
    return values;
}

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let iterations = 100_000u32;

    for &(short, long) in &[(0usize, 1_000usize), (10, 10), (1_000, 1_000_000), (500_000, 500_001)] {
        let a = sorted_input(&mut rng, short);
        let b = sorted_input(&mut rng, long);
        let (a, b) = (Sorted::new_unchecked(&a[..]), Sorted::new_unchecked(&b[..]));

        profiling::reset();
        let start = Instant::now();
        let mut checksum = 0.0;
        for _ in 0..iterations {
            checksum += find_median_sorted(a, b).unwrap_or(0.0);
        }
        let elapsed = start.elapsed();

        println!("\n=== {} + {} elements ===", short, long);
        println!("  {} iterations: {:?}", iterations, elapsed);
        println!("  per call: {:?}", elapsed / iterations);
        println!("  {}", profiling::report());
        println!("  checksum: {}", checksum);
    }
}
