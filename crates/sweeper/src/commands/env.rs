use clap::ArgMatches;
use tracing::{error, info};

use sweeper_core::SweeperError;

use crate::color;

pub(crate) fn handle_env_command(
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.env_started");

    let credentials = match sweeper_config::resolve() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{}", color::error(&e.to_string()));
            error!(
                event = "cli.env_failed",
                error_code = e.error_code(),
                missing = ?e.missing_vars(),
            );
            return Err(e.into());
        }
    };

    if sub_matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&credentials)?);
    } else {
        println!("{}", color::bold("Sweeper credentials resolved."));
        println!("  Subscription: {}", color::ice(credentials.subscription_id()));
        println!("  Tenant:       {}", color::ice(credentials.tenant_id()));
        println!("  Client:       {}", color::ice(credentials.client_id()));
        println!("  Secret:       {}", color::muted("<set>"));
        println!("  Environment:  {}", credentials.environment());
    }

    info!(
        event = "cli.env_completed",
        environment = credentials.environment()
    );

    Ok(())
}
