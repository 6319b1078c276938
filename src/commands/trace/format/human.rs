//! Human-readable output: one narrated line per step

use std::fmt::Write;

use graphsteps_core::graph::{Locale, StepTrace};

/// Render `[step] narration` lines, followed by a step count unless quiet
pub fn render(trace: &StepTrace, locale: Locale, quiet: bool) -> String {
    let mut out = String::new();
    for record in trace.records() {
        let _ = writeln!(
            out,
            "[{}] {}",
            record.step_number(),
            record.narration().render(locale)
        );
    }
    if !quiet {
        let _ = writeln!(out, "\n{} steps", trace.len());
    }
    out
}
