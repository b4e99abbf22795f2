//! Demonstrates binning several sample sets over one shared set of edges

use binner_histogram::{
    bin_count, BinCountMethod, BinSpec, Binner, BoundaryPolicy, Sample,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn generate_latencies(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn main() {
    let current = generate_latencies(2000, 100.0, 12.0, 42);
    let baseline = generate_latencies(2000, 92.0, 9.0, 43);

    // Example 1: fixed number of bins over the data range
    println!("=== Fixed Bin Count ===");
    let hist = Binner::new(BinSpec::Count(8))
        .build(&Sample::new(&current), &[])
        .unwrap();
    for (bin, freq) in hist.bins().iter().zip(hist.primary()) {
        println!("  {:>8.2}: {:>6.0}", bin, freq);
    }

    // Example 2: same data, lower-edge semantics
    println!("\n=== Lower-Edge Bins ===");
    let hist = Binner::new(BinSpec::Count(8))
        .policy(BoundaryPolicy::Min)
        .build(&Sample::new(&current), &[])
        .unwrap();
    for (bin, freq) in hist.bins().iter().zip(hist.primary()) {
        println!("  >= {:>8.2}: {:>6.0}", bin, freq);
    }

    // Example 3: two sets binned over one shared set of edges, so rows
    // line up for a side-by-side comparison
    println!("\n=== Shared Edges: Current vs Baseline ===");
    let edges: Vec<f64> = (0..10).map(|i| 60.0 + 10.0 * i as f64).collect();
    let hist = Binner::new(BinSpec::Edges(edges))
        .build(&Sample::new(&current), &[Sample::new(&baseline)])
        .unwrap();
    println!("  {:>8} {:>8} {:>8}", "bin", "current", "baseline");
    for (i, bin) in hist.bins().iter().enumerate() {
        println!(
            "  {:>8.1} {:>8.0} {:>8.0}",
            bin,
            hist.freqs(0)[i],
            hist.freqs(1)[i]
        );
    }

    // Example 4: let a statistical rule pick the bin count
    println!("\n=== Estimated Bin Counts ===");
    for method in [
        BinCountMethod::Sturges,
        BinCountMethod::Scott,
        BinCountMethod::FreedmanDiaconis,
        BinCountMethod::Middle,
    ] {
        let count = bin_count(method, &current).unwrap();
        println!("  {:<20} {:>4} bins", method.name(), count);
    }

    // Example 5: weighted values, e.g. request counts per latency probe
    println!("\n=== Weighted Sample ===");
    let weights: Vec<f64> = current.iter().map(|v| if *v > 110.0 { 3.0 } else { 1.0 }).collect();
    let hist = Binner::new(BinSpec::Count(6))
        .build(&Sample::weighted(&current, &weights), &[])
        .unwrap();
    println!("Total weight: {:.0}", hist.total_weight(0));
    for (bin, freq) in hist.bins().iter().zip(hist.primary()) {
        println!("  {:>8.2}: {:>8.0}", bin, freq);
    }
}
