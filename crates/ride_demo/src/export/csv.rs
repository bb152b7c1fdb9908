use crate::metrics::{PartyTotal, RunSummary};

pub(crate) fn export_to_csv_impl(
    summary: &RunSummary,
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(["party", "id", "name", "rides", "amount"])?;
    for party in &summary.driver_earnings {
        write_party(&mut wtr, "driver", party)?;
    }
    for party in &summary.rider_spend {
        write_party(&mut wtr, "rider", party)?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_party<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    kind: &str,
    party: &PartyTotal,
) -> Result<(), Box<dyn std::error::Error>> {
    wtr.write_record([
        kind,
        &party.id.to_string(),
        &party.name,
        &party.rides.to_string(),
        &party.amount.to_string(),
    ])?;
    Ok(())
}
