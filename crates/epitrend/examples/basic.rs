//! Basic example demonstrating series analysis
//!
//! Run with: RUST_LOG=epitrend_core=debug cargo run --example basic -p epitrend

use epitrend::{
    analyze_series, bucket_sample, bucket_summaries, group_totals, summarize, AnalysisOptions,
    Observation,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epitrend=info,epitrend_core=info".into()),
        )
        .init();

    println!("=== epitrend Basic Examples ===\n");

    // Weekly infections with one reporting spike, delivered out of order
    let weekly = vec![
        Observation::new("2022-W03", 90.0),
        Observation::new("2022-W01", 100.0),
        Observation::new("2022-W02", 110.0),
        Observation::new("2022-W04", 500.0),
        Observation::new("2022-W05", 95.0),
        Observation::new("2022-W06", 105.0),
    ];

    // 1. Full series analysis
    println!("1. Series analysis (default options)");
    let options = AnalysisOptions::default();
    let derived = analyze_series(weekly.clone(), &options)?;
    tracing::info!(
        records = derived.len(),
        outliers = derived.outlier_count(),
        "analysis complete"
    );
    for r in &derived.records {
        println!(
            "   {:<22} value={:>7} ma={:>8} growth={:>8} z={:>6} outlier={:<5} trend={:>8} seasonal={:>8}",
            r.period_label,
            fmt_opt(r.value),
            fmt_opt(r.moving_avg),
            fmt_opt(r.growth_pct),
            fmt_opt(r.z_score),
            r.is_outlier,
            fmt_opt(r.trend),
            fmt_opt(r.seasonal_trend),
        );
    }
    println!("   Outliers: {:?}\n", derived.outlier_labels());

    // 2. Summary statistics
    println!("2. Distribution statistics");
    let values: Vec<f64> = weekly.iter().map(|o| o.value).collect();
    match summarize(&values) {
        Some(stats) => println!("   {:?}\n", stats.rounded()),
        None => println!("   (no data)\n"),
    }

    // 3. Age-group breakdown
    println!("3. Age buckets");
    let sample = bucket_sample(vec![
        ("0-4", 12.0),
        ("5 to 11", 30.0),
        ("12-17", 45.0),
        ("18-59", 300.0),
        ("60 years old and above", 120.0),
        ("Unknown", 9.0),
    ]);
    for (bucket, stats) in bucket_summaries(&sample) {
        let total: f64 = sample.values(bucket).iter().sum();
        println!(
            "   {:<8} ({:>5}) total={:>6} mean={}",
            bucket.to_string(),
            bucket.range_label(),
            total,
            stats.map(|s| format!("{:.2}", s.mean)).unwrap_or_else(|| "-".into()),
        );
    }
    println!("   Excluded records: {}\n", sample.excluded());

    // 4. Regional totals
    println!("4. Top regions");
    let regions = group_totals(
        vec![("North", 120.0), ("South", 340.0), ("North", 80.0), ("West", 15.0)],
        10,
    );
    for g in regions {
        println!("   {:<6} {}", g.group, g.total);
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".into())
}
