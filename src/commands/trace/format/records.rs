//! Records output formatting for trace commands
//!
//! ```text
//! H graphsteps=1 records=1 algorithm=bfs steps=18
//! S 0 vertex=0 edge=- visited=1,0,0,0 frontier=0 ... "Adding start vertex 0 to the frontier."
//! ```

use std::fmt::Write;

use graphsteps_core::graph::{Algorithm, Locale, StepTrace};
use graphsteps_core::records::escape_quotes;

/// Output in records format
pub fn render(algorithm: Algorithm, trace: &StepTrace, locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "H graphsteps=1 records=1 algorithm={} steps={}",
        algorithm,
        trace.len()
    );

    for record in trace.records() {
        let fields = record
            .record_fields()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            "S {} {} \"{}\"",
            record.step_number(),
            fields,
            escape_quotes(&record.narration().render(locale))
        );
    }
    out
}
