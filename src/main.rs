//! Benchmark runner comparing the kernels across sizes and layouts.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use matmul_locality::{
    BlockSize, DEFAULT_CACHE_LINE_BYTES, FlatMatrix, JaggedMatrix, Matrix, Mismatch, check_equal,
    multiply_blocked, multiply_blocked_strided, multiply_naive, multiply_transposed,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    println!("=== Matrix Multiplication Cache-Locality Benchmark ===\n");

    let block = BlockSize::default();
    println!(
        "block edge SM = {} ({}-byte cache line / 8-byte f64)\n",
        block.edge(),
        DEFAULT_CACHE_LINE_BYTES
    );

    // One process-wide generator, seeded from the wall clock at startup.
    // Runs are not meant to be reproducible.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);

    let sizes = [100, 300, 500, 1000, 2000, 3000];
    let mut all_results = Vec::new();

    for &sz in &sizes {
        all_results.push((sz, measure(sz, block, &mut rng)));
    }

    print_summary_table(&all_results);
}

/// Run and time every kernel at one size, cross-checking each result against
/// the naive baseline.
fn measure(sz: usize, block: BlockSize, rng: &mut StdRng) -> Vec<(&'static str, f64)> {
    println!("Matrix: {sz}×{sz}");
    println!("{}", "-".repeat(60));

    let mut mul1 = JaggedMatrix::zeroed(sz);
    let mut mul2 = JaggedMatrix::zeroed(sz);
    mul1.fill_random(rng);
    mul2.fill_random(rng);

    // Same values in the contiguous layout for the strided kernel.
    let mut mul1_flat = FlatMatrix::zeroed(sz);
    let mut mul2_flat = FlatMatrix::zeroed(sz);
    mul1_flat.copy_from(&mul1);
    mul2_flat.copy_from(&mul2);

    let mut res_naive = JaggedMatrix::zeroed(sz);
    let naive_ms = time_ms(|| multiply_naive(&mul1, &mul2, &mut res_naive));

    let mut res_blocked = JaggedMatrix::zeroed(sz);
    let blocked_ms = time_ms(|| multiply_blocked(&mul1, &mul2, &mut res_blocked, block));
    report_mismatch("blocked", check_equal(&res_naive, &res_blocked));

    let mut res_strided = FlatMatrix::zeroed(sz);
    let strided_ms = time_ms(|| {
        multiply_blocked_strided(&mul1_flat, &mul2_flat, &mut res_strided, block)
    });
    report_mismatch("blocked strided", check_equal(&res_naive, &res_strided));

    // Last on purpose: this one leaves mul2 transposed, and nothing may read
    // mul2 afterwards.
    let mut res_transposed = JaggedMatrix::zeroed(sz);
    let transposed_ms = time_ms(|| multiply_transposed(&mul1, &mut mul2, &mut res_transposed));
    report_mismatch("transposed", check_equal(&res_naive, &res_transposed));

    let results = vec![
        ("naive (i-j-k)", naive_ms),
        ("blocked (tiled)", blocked_ms),
        ("blocked (strided)", strided_ms),
        ("transpose-then-mul", transposed_ms),
    ];

    let flops = 2.0 * (sz * sz * sz) as f64;
    let baseline_ms = results[0].1;
    for (i, (name, ms)) in results.iter().enumerate() {
        let gflops = flops / (ms / 1000.0) / 1e9;
        println!(
            "{}. {:<20} {:>10.1} ms  {:>6.2} GFLOPS  ({:.1}×)",
            i + 1,
            name,
            ms,
            gflops,
            baseline_ms / ms
        );
    }
    println!();

    results
}

fn time_ms<F: FnMut()>(mut f: F) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_secs_f64() * 1000.0
}

/// A mismatch between kernels is a rounding-order discrepancy to report, not
/// a reason to stop benchmarking.
fn report_mismatch(name: &str, mismatch: Option<Mismatch>) {
    if let Some(m) = mismatch {
        println!("   {name}: result differs from naive: {m}");
    }
}

fn print_summary_table(all_results: &[(usize, Vec<(&'static str, f64)>)]) {
    println!("{}", "=".repeat(78));
    println!("SUMMARY (speedup vs naive, higher is better)");
    println!("{}", "=".repeat(78));

    print!("{:<20}", "Method");
    for (sz, _) in all_results {
        print!(" {sz:>8}");
    }
    println!();
    println!("{}", "-".repeat(78));

    let num_methods = all_results[0].1.len();
    for method_idx in 0..num_methods {
        let name = all_results[0].1[method_idx].0;
        print!("{name:<20}");
        for (_, results) in all_results {
            let baseline_ms = results[0].1;
            let ms = results[method_idx].1;
            print!(" {:>7.1}×", baseline_ms / ms);
        }
        println!();
    }
    println!("{}", "=".repeat(78));
}
