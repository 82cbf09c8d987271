//! Compare the two engine strategies on random soups

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_life::{Algorithm, Coordinate, LiveSet};

const SEED: u64 = 0x5EED;

fn soup(size: i64, density: f64) -> LiveSet {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..size)
        .flat_map(|y| (0..size).map(move |x| Coordinate::new(x, y)))
        .filter(|_| rng.random_bool(density))
        .collect()
}

/// Average milliseconds per generation and the final population
fn benchmark(algorithm: Algorithm, start: &LiveSet, generations: u32) -> (f64, usize) {
    let mut live = start.clone();
    let timer = Instant::now();
    for _ in 0..generations {
        live = algorithm.advance(&live);
    }
    let ms = timer.elapsed().as_secs_f64() * 1000.0 / f64::from(generations);
    (ms, live.len())
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let sizes = [32, 64, 128, 256, 512];
    let generations = 50;

    print!("{:>10} {:>10}", "Soup", "Cells");
    for algorithm in Algorithm::all() {
        print!(" {:>12}", algorithm.name());
    }
    println!(" {:>10}", "Final");
    println!("{:-<70}", "");

    for size in sizes {
        let start = soup(size, 0.3);
        print!("{:>10} {:>10}", format!("{size}x{size}"), start.len());

        let mut finals = Vec::new();
        for algorithm in Algorithm::all() {
            let (ms, population) = benchmark(algorithm, &start, generations);
            finals.push(population);
            print!(" {:>9.3} ms", ms);
        }

        // Strategies must agree; a mismatch is a bug, not a timing artifact
        let agree = finals.windows(2).all(|w| w[0] == w[1]);
        println!(" {:>10}", if agree { finals[0].to_string() } else { "MISMATCH".into() });
    }

    println!("\n=== Glider far from the origin ===\n");

    let glider: LiveSet = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        .into_iter()
        .map(|(x, y)| Coordinate::new(x - 1_000_000_000, y - 1_000_000_000))
        .collect();
    for algorithm in Algorithm::all() {
        let (ms, population) = benchmark(algorithm, &glider, 4_000);
        println!("{:>12}: {:.4} ms/gen, population {}", algorithm.name(), ms, population);
    }
}
