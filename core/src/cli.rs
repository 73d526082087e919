// core/src/cli.rs
use anyhow::{Context, Result};
use log::warn;

use crate::dispatch::build_training;
use crate::metrics::reports_rendered_total;

/// Bygger én pakke og skriver rapportlinjen til konsollen.
pub fn print_package(code: &str, data: &[f64]) -> Result<()> {
    let workout = build_training(code, data)
        .with_context(|| format!("kunne ikke bygge økt for pakke {code:?}"))?;

    println!("{}", workout.training_info().render());
    reports_rendered_total().inc();
    Ok(())
}

/// Demo-driver med eksempelpakkene. Pakker som feiler hoppes over.
pub fn run_demo() {
    let packages: [(&str, &[f64]); 3] = [
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    for (code, data) in packages {
        if let Err(e) = print_package(code, data) {
            warn!("hopper over pakke {code}: {e:#}");
            println!("⚠️ Hopper over {code}: {e:#}");
        }
    }
}
