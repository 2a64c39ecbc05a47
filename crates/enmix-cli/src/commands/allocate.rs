use anyhow::{anyhow, Result};
use enmix_core::{allocate, MixSeries, YearRange};

pub fn handle(consumption: f64, range: YearRange) -> Result<()> {
    let series = MixSeries::generate_range(range);
    let reference = series
        .latest()
        .ok_or_else(|| anyhow!("generated series is empty"))?;

    let allocation = allocate(consumption, reference)?;

    println!("Reference year          : {}", reference.year);
    println!(
        "Global renewable supply : {:.0} TWh",
        allocation.total_renewable.value()
    );
    println!(
        "Global renewable share  : {:.2}%",
        allocation.percentage.value()
    );
    println!(
        "Your consumption        : {} TWh",
        allocation.consumption.value()
    );
    println!(
        "Your renewable share    : {:.2} TWh",
        allocation.user_renewable.value()
    );
    Ok(())
}
