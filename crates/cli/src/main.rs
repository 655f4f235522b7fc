use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use dchull::hull::compute_hull;
use dchull::sample::{draw_points, CloudCfg, Region, ReplayToken};
use dchull::timing::{scaling_table, ScalingCfg, ScalingRow};

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull experiment runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull from a seeded unit-square cloud
    Hull {
        #[arg(long, default_value_t = 1000)]
        n: usize,
        #[arg(long, default_value_t = 12345)]
        seed: u64,
        /// Write the hull as JSON here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Run the scaling experiment and print the timing table
    Scaling {
        #[arg(long, default_value_t = 3)]
        trials: usize,
        #[arg(long, default_value_t = 1000)]
        seed: u64,
        /// Comma-separated sizes; defaults to the standard ladder
        #[arg(long)]
        sizes: Option<String>,
        /// Also write the table as CSV here
        #[arg(long)]
        out: Option<String>,
    },
    /// Summarize a scaling CSV as JSON
    Report {
        #[arg(long)]
        from: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { n, seed, out } => hull(n, seed, out),
        Action::Scaling {
            trials,
            seed,
            sizes,
            out,
        } => scaling(trials, seed, sizes, out),
        Action::Report { from } => report(from),
    }
}

fn hull(n: usize, seed: u64, out: Option<String>) -> Result<()> {
    tracing::info!(n, seed, "hull");
    let cloud = draw_points(
        CloudCfg {
            count: n,
            region: Region::UnitSquare,
        },
        ReplayToken { seed, index: 0 },
    );
    let hull = compute_hull(&cloud);
    tracing::info!(input = cloud.len(), vertices = hull.len(), "hull_done");

    let doc = serde_json::json!({
        "n": n,
        "seed": seed,
        "vertices": hull.v.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
    });
    match out {
        Some(out) => {
            write_artifact(&out, &serde_json::to_vec_pretty(&doc)?)?;
            provenance::write_sidecar(
                &out,
                provenance::Payload::new(serde_json::json!({"n": n, "seed": seed})),
            )?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn scaling(trials: usize, seed: u64, sizes: Option<String>, out: Option<String>) -> Result<()> {
    let mut cfg = ScalingCfg {
        trials,
        seed,
        ..ScalingCfg::default()
    };
    if let Some(raw) = sizes {
        cfg.sizes = parse_sizes(&raw)?;
    }
    tracing::info!(trials = cfg.trials, seed = cfg.seed, sizes = ?cfg.sizes, "scaling");

    let rows = scaling_table(&cfg);
    println!(
        "{:>8} | {:>15} | {:>16}",
        "n", "experimental_ms", "theory n*log2(n)"
    );
    println!("{}", "-".repeat(52));
    for row in &rows {
        println!(
            "{:>8} | {:>15.4} | {:>16.1}",
            row.n, row.median_ms, row.theory
        );
    }

    if let Some(out) = out {
        write_artifact(&out, rows_as_csv(&rows).as_bytes())?;
        provenance::write_sidecar(
            &out,
            provenance::Payload::new(serde_json::json!({
                "trials": cfg.trials,
                "seed": cfg.seed,
                "sizes": cfg.sizes,
            })),
        )?;
        tracing::info!(out, "scaling_written");
    }
    Ok(())
}

#[derive(Serialize)]
struct ReportSummary {
    rows: usize,
    cols: usize,
    max_ms_per_nlog2n: Option<f64>,
}

fn report(from: String) -> Result<()> {
    tracing::info!(from, "report");
    let lf = LazyCsvReader::new(&from)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {from}"))?;
    let df = lf.collect()?;

    let med = df.column("median_ms")?.f64()?;
    let theory = df.column("theory")?.f64()?;
    let mut max_ratio: Option<f64> = None;
    for (m, t) in med.into_iter().zip(theory.into_iter()) {
        if let (Some(m), Some(t)) = (m, t) {
            if t > 0.0 {
                let ratio = m / t;
                max_ratio = Some(max_ratio.map_or(ratio, |best: f64| best.max(ratio)));
            }
        }
    }
    let summary = ReportSummary {
        rows: df.height(),
        cols: df.width(),
        max_ms_per_nlog2n: max_ratio,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn rows_as_csv(rows: &[ScalingRow]) -> String {
    let mut csv = String::from("n,median_ms,theory\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{:.6},{:.3}\n",
            row.n, row.median_ms, row.theory
        ));
    }
    csv
}

fn parse_sizes(raw: &str) -> Result<Vec<usize>> {
    raw.split(',')
        .map(|tok| {
            tok.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid size {tok:?}"))
        })
        .collect()
}

fn write_artifact(out: &str, bytes: &[u8]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, bytes).with_context(|| format!("writing {out}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sizes_accepts_spaced_lists() {
        assert_eq!(parse_sizes("200, 500,1000").unwrap(), vec![200, 500, 1000]);
        assert!(parse_sizes("200,abc").is_err());
    }

    #[test]
    fn csv_rows_carry_decimal_points() {
        let rows = [ScalingRow {
            n: 1024,
            median_ms: 1.5,
            theory: 10240.0,
        }];
        let csv = rows_as_csv(&rows);
        assert!(csv.starts_with("n,median_ms,theory\n"));
        assert!(csv.contains("1024,1.500000,10240.000"));
    }
}
