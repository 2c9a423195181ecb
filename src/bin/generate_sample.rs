//! Writes a deterministic synthetic `benchmark_results.csv` so the chart
//! generator can be exercised without running the actual sorting benchmark.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform jitter in `[1 - spread, 1 + spread]`.
    fn jitter(&mut self, spread: f64) -> f64 {
        1.0 + (self.next_f64() * 2.0 - 1.0) * spread
    }
}

/// Rough n·log n cost of a single-threaded sort, in seconds.
fn sequential_time(n: f64) -> f64 {
    n * n.log2() * 1.2e-8
}

/// Achievable parallel speedup on `threads` threads with the given serial
/// fraction (Amdahl-style saturation).
fn parallel_speedup(threads: f64, serial_fraction: f64) -> f64 {
    threads / (1.0 + serial_fraction * (threads - 1.0))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SimpleRng::new(42);

    let array_sizes: [u64; 5] = [10_000, 100_000, 1_000_000, 10_000_000, 100_000_000];
    let thread_counts: [u64; 6] = [1, 2, 4, 8, 12, 16];

    let output_path = "benchmark_results.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "ArraySize",
        "NumThreads",
        "StdSort",
        "MinMaxQuicksort",
        "GnuParallelSort",
    ])?;

    let mut rows = 0usize;
    for &size in &array_sizes {
        let base = sequential_time(size as f64);
        for &threads in &thread_counts {
            let t = threads as f64;
            let std_sort = base * rng.jitter(0.03);
            // MinMaxQuicksort: decent scaling but noticeable partition overhead.
            let min_max = base * 1.15 / parallel_speedup(t, 0.08) * rng.jitter(0.05);
            // GNU parallel sort: better tuned, smaller serial fraction.
            let gnu = base * 1.05 / parallel_speedup(t, 0.04) * rng.jitter(0.05);

            writer.write_record([
                size.to_string(),
                threads.to_string(),
                format!("{std_sort:.6}"),
                format!("{min_max:.6}"),
                format!("{gnu:.6}"),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {rows} measurements to {output_path}");
    Ok(())
}
