use std::io::{self, Write};

use anyhow::Result;
use enmix_cli::cli::TableFormat;
use enmix_core::{MixRecord, MixSeries, YearRange};
use tabwriter::TabWriter;

pub fn handle(range: YearRange, format: TableFormat) -> Result<()> {
    let series = MixSeries::generate_range(range);
    match format {
        TableFormat::Plain => print_table(series.records()),
        TableFormat::Json => print_json(series.records()),
    }
}

fn print_table(records: &[MixRecord]) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    writeln!(
        writer,
        "YEAR\tSOLAR\tWIND\tHYDRO\tOTHERS\tRENEWABLE\tTOTAL\tSHARE"
    )?;
    for record in records {
        writeln!(
            writer,
            "{}\t{:.0}\t{:.0}\t{:.0}\t{:.0}\t{:.0}\t{:.0}\t{:.2}%",
            record.year,
            record.solar.value(),
            record.wind.value(),
            record.hydro.value(),
            record.others.value(),
            record.total_renewable.value(),
            record.total_generation.value(),
            record.percentage.value()
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn print_json(records: &[MixRecord]) -> Result<()> {
    serde_json::to_writer_pretty(io::stdout(), records)
        .map_err(|err| anyhow::anyhow!("serializing table to JSON: {err}"))?;
    println!();
    Ok(())
}
