use std::io;

use anyhow::{anyhow, Result};
use enmix_core::{Diagnostics, MixSeries, YearRange};

pub fn handle(range: YearRange, json: bool) -> Result<()> {
    let series = MixSeries::generate_range(range);
    let mut diag = Diagnostics::new();
    series.validate_into(&mut diag);

    if json {
        serde_json::to_writer_pretty(io::stdout(), &diag)
            .map_err(|err| anyhow!("serializing diagnostics to JSON: {err}"))?;
        println!();
    } else {
        print!("{diag}");
    }

    if diag.has_errors() {
        return Err(anyhow!("series validation failed: {}", diag.summary()));
    }
    Ok(())
}
