use std::io::Write;

use ride_core::scenario::{Scenario, ScenarioParams};
use ride_demo::report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scenario = Scenario::build(ScenarioParams::default())?;
    let output = report::render_full_report(&scenario);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
