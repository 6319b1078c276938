//! JSON output: the step sequence as an array

use graphsteps_core::error::Result;
use graphsteps_core::graph::StepTrace;

pub fn render(trace: &StepTrace, pretty: bool) -> Result<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(trace)?
    } else {
        serde_json::to_string(trace)?
    };
    out.push('\n');
    Ok(out)
}
