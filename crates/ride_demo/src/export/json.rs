use crate::metrics::RunSummary;

pub(crate) fn export_to_json_impl(
    summary: &RunSummary,
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}
