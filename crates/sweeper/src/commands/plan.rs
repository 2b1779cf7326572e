use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info};

use sweeper_core::{ResourceDescriptor, SweepFilter, SweepPlan, TracingObserver, plan_sweep};

use super::json_types::PlanOutput;
use super::required_arg;
use crate::color;

pub(crate) fn handle_plan_command(
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let region = required_arg(sub_matches, "region")?;
    let prefix = required_arg(sub_matches, "prefix")?;
    let file = sub_matches.get_one::<String>("file");

    info!(
        event = "cli.plan_started",
        region = region,
        prefix = prefix,
        file = ?file
    );

    let resources = match file {
        Some(path) => load_resources_from_path(Path::new(path)),
        None => load_resources(io::stdin().lock()),
    }
    .inspect_err(|e| {
        eprintln!("{}", color::error(&format!("Failed to read resource listing: {}", e)));
        error!(event = "cli.plan_failed", error = %e);
    })?;

    let filter = SweepFilter::with_prefix(prefix);
    let plan = plan_sweep(resources, region, &filter, &TracingObserver);

    if sub_matches.get_flag("json") {
        let output = PlanOutput {
            prefix: filter.prefix(),
            eligible_count: plan.eligible.len(),
            skipped_count: plan.skipped.len(),
            plan: &plan,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_plan(&plan));
    }

    info!(
        event = "cli.plan_completed",
        eligible = plan.eligible.len(),
        skipped = plan.skipped.len()
    );

    Ok(())
}

/// Human readable plan listing.
fn render_plan(plan: &SweepPlan) -> String {
    let mut out = format!(
        "{} {}\n",
        color::bold("Sweep plan for region"),
        color::ice(&plan.target_region)
    );

    if plan.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            color::aurora("No acceptance-test resources to sweep.")
        ));
    } else {
        out.push_str(&format!("  Resources to sweep: {}\n", plan.eligible.len()));
        for resource in &plan.eligible {
            out.push_str(&format!(
                "    {} {} {}\n",
                color::decision(true),
                color::ice(&resource.name),
                color::muted(&resource.location)
            ));
        }
    }

    if !plan.skipped.is_empty() {
        out.push_str(&format!("  Resources skipped: {}\n", plan.skipped.len()));
        for (resource, reason) in &plan.skipped {
            out.push_str(&format!(
                "    {} {} {}\n",
                color::decision(false),
                color::ice(&resource.name),
                color::muted(&format!("({})", reason))
            ));
        }
    }

    out
}

fn load_resources_from_path(path: &Path) -> Result<Vec<ResourceDescriptor>, Box<dyn std::error::Error>> {
    let file = File::open(path)
        .map_err(|e| format!("cannot open '{}': {}", path.display(), e))?;
    load_resources(BufReader::new(file))
}

/// Parse a JSON array of `{ "name", "location" }` objects.
fn load_resources(reader: impl Read) -> Result<Vec<ResourceDescriptor>, Box<dyn std::error::Error>> {
    Ok(serde_json::from_reader(reader)?)
}
