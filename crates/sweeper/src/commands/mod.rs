use clap::ArgMatches;

mod check;
mod env;
mod json_types;
mod plan;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("env", sub_matches)) => env::handle_env_command(sub_matches),
        Some(("check", sub_matches)) => check::handle_check_command(sub_matches),
        Some(("plan", sub_matches)) => plan::handle_plan_command(sub_matches),
        _ => Err("Unknown command".into()),
    }
}

/// Read a required string argument.
fn required_arg<'a>(
    matches: &'a ArgMatches,
    name: &str,
) -> Result<&'a str, Box<dyn std::error::Error>> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing required argument: --{}", name).into())
}
