//! Scaling probe: hull wall-clock medians next to the n·log2(n) bound.
//!
//! Usage:
//!   cargo run -p dchull --release --example scaling_table
//!
//! Prints one row per size of the standard ladder; each entry is the median
//! of three seeded unit-square clouds, with generation excluded from the
//! timed section.

use dchull::timing::{scaling_table, ScalingCfg};

fn main() {
    let cfg = ScalingCfg::default();
    println!(
        "{:>8} | {:>15} | {:>16}",
        "n", "experimental_ms", "theory n*log2(n)"
    );
    println!("{}", "-".repeat(52));
    for row in scaling_table(&cfg) {
        println!(
            "{:>8} | {:>15.4} | {:>16.1}",
            row.n, row.median_ms, row.theory
        );
    }
}
