//! Full pipeline on a synthetic recording with a regime change.
//!
//! Run with `RUST_LOG=debug cargo run --example regime_change` to see the
//! estimator's tracing output.

use ndarray::Array1;
use ordinal_rve::logging::init_tracing;
use ordinal_rve::{
    GlobalValue, MultiScaleConfig, RveConfig, Signal, analyze, multi_scale_estimate,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 40 s at 1200 Hz: noise, then 10 s of a clean 7 Hz rhythm, then noise.
    let frequency = 1200.0;
    let n = 40 * 1200;
    let mut rng = StdRng::seed_from_u64(2024);
    let normal = Normal::new(0.0, 1.0)?;
    let samples: Array1<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / frequency;
            if (15.0..25.0).contains(&t) {
                (2.0 * std::f64::consts::PI * 7.0 * t).sin()
            } else {
                normal.sample(&mut rng)
            }
        })
        .collect();
    let signal = Signal::new(samples, frequency)?;

    let config = RveConfig::default();
    let analysis = analyze(&signal, &config)?;
    println!(
        "windows: {}, smoothed: {}, change: {}",
        analysis.entropy.len(),
        analysis.smoothed.len(),
        analysis.change.len()
    );

    let (peak_index, peak) = analysis
        .change
        .values
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &v)| if v > best.1 { (i, v) } else { best });
    println!("largest entropy change {:.5} at t = {:.2} s", peak, analysis.change.time[peak_index]);

    if let Some(report) = analysis.anomalies() {
        if let (Some(&first), Some(&last)) = (report.indices.first(), report.indices.last()) {
            println!(
                "low-entropy region: {:.2} s .. {:.2} s (threshold {:.3})",
                analysis.smoothed.time[first], analysis.smoothed.time[last], report.threshold
            );
        }
    }

    let band = MultiScaleConfig::default();
    let averaged = multi_scale_estimate(
        signal.samples(),
        frequency,
        band.f_min,
        band.f_max,
        band.f_step,
        band.decay_time_constant,
        band.embedding_dimension,
    )?;
    let run = ordinal_rve::RollingOrdinalEntropy::new(signal.samples(), frequency, &config)?;
    println!(
        "multi-scale windows: {}, single-scale mean entropy: {:.4}",
        averaged.len(),
        run.global_value()
    );
    Ok(())
}
