//! `graphsteps <algorithm>` - run one algorithm and print its step trace
//!
//! The request is a JSON document with `vertices`, `adjacency_list`,
//! optional `weights` and optional `start_vertex`, read from `--input` or
//! stdin. `--start` overrides the requested start vertex.

pub mod format;

use std::fs;
use std::io;

use crate::cli::{OutputFormat, TraceArgs};
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use graphsteps_core::bail_usage;
use graphsteps_core::error::{GraphStepsError, Result};
use graphsteps_core::graph::{run_algorithm_with, Algorithm, TraceOptions, TraceRequest};

/// Execute a trace command
pub fn execute(ctx: &CommandContext, algorithm: Algorithm, args: &TraceArgs) -> Result<()> {
    let cli = ctx.cli;
    if args.start.is_some() && !algorithm.needs_start() {
        bail_usage!(format!("{} does not take a start vertex", algorithm));
    }

    let config = ctx.load_config()?;
    trace_command!(cli, ctx.start, "load_config");

    let request = read_request(args)?;
    let (input, requested_start) = request.into_parts()?;
    trace_command!(cli, ctx.start, "read_request");

    let options = TraceOptions {
        max_vertices: config.max_vertices,
    };
    let trace = run_algorithm_with(algorithm, &input, args.start.or(requested_start), &options)?;
    trace_command!(cli, ctx.start, "run_algorithm");

    let locale = cli.locale.unwrap_or(config.locale);
    let output = match cli.format {
        OutputFormat::Human => format::human::render(&trace, locale, cli.quiet),
        OutputFormat::Json => format::json::render(&trace, config.output.pretty_json)?,
        OutputFormat::Records => format::records::render(algorithm, &trace, locale),
    };
    print!("{}", output);
    trace_command!(cli, ctx.start, "render_output");

    Ok(())
}

fn read_request(args: &TraceArgs) -> Result<TraceRequest> {
    if args.reads_stdin() {
        return TraceRequest::from_reader(io::stdin().lock());
    }

    let content =
        fs::read_to_string(&args.input).map_err(|e| GraphStepsError::read_failed(&args.input, e))?;
    TraceRequest::from_json_str(&content)
}
