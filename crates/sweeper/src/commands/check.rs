use clap::ArgMatches;
use tracing::info;

use sweeper_core::{SweepDecision, SweepFilter, SweepObserver, TracingObserver};

use super::json_types::CheckOutput;
use super::required_arg;
use crate::color;

pub(crate) fn handle_check_command(
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = required_arg(sub_matches, "name")?;
    let location = required_arg(sub_matches, "location")?;
    let region = required_arg(sub_matches, "region")?;
    let prefix = required_arg(sub_matches, "prefix")?;

    info!(
        event = "cli.check_started",
        resource = name,
        location = location,
        region = region
    );

    let filter = SweepFilter::with_prefix(prefix);
    let decision = filter.evaluate(name, location, region);
    if let Some(reason) = decision.skip_reason() {
        TracingObserver.on_skipped(name, reason);
    }

    if sub_matches.get_flag("json") {
        let output = CheckOutput {
            name,
            location,
            region,
            eligible: decision.is_eligible(),
            decision: &decision,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_decision(name, &decision));
    }

    info!(
        event = "cli.check_completed",
        resource = name,
        eligible = decision.is_eligible()
    );

    Ok(())
}

/// One-line decision: `sweep <name>` or `skip <name> (<reason>)`.
fn render_decision(name: &str, decision: &SweepDecision) -> String {
    match decision.skip_reason() {
        None => format!("{} {}", color::decision(true), color::ice(name)),
        Some(reason) => format!(
            "{} {} {}",
            color::decision(false),
            color::ice(name),
            color::muted(&format!("({})", reason))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_decision() {
        crate::color::set_no_color();
        let filter = SweepFilter::default();

        let eligible = filter.evaluate("acctestRG-sweep1", "East US", "eastus");
        assert_eq!(render_decision("acctestRG-sweep1", &eligible), "sweep acctestRG-sweep1");

        let skipped = filter.evaluate("prod-RG-important", "eastus", "eastus");
        assert_eq!(
            render_decision("prod-RG-important", &skipped),
            "skip prod-RG-important (name doesn't start with `acctest`)"
        );
    }

    #[test]
    fn test_handle_check_command_accepts_parsed_args() {
        let matches = crate::app::build_cli()
            .try_get_matches_from(vec![
                "sweeper", "check", "acctestvm1", "--location", "westus", "--region", "eastus",
                "--json",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("check").unwrap();
        assert!(handle_check_command(sub).is_ok());
    }
}
