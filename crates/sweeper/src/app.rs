use clap::{Arg, ArgAction, Command};

use sweeper_core::ACCEPTANCE_TEST_PREFIX;

pub fn build_cli() -> Command {
    Command::new("sweeper")
        .about("Inspect acceptance-test sweep credentials and resource eligibility")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("env")
                .about("Resolve ARM_* credentials from the environment and show what was found")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Decide whether a single resource would be swept")
                .arg(
                    Arg::new("name")
                        .help("Resource name")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("location")
                        .long("location")
                        .short('l')
                        .help("Location reported for the resource")
                        .required(true),
                )
                .arg(region_arg())
                .arg(prefix_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("plan")
                .about("Read a JSON resource listing and show which resources would be swept")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .help("JSON array of {\"name\", \"location\"} objects (default: stdin)"),
                )
                .arg(region_arg())
                .arg(prefix_arg())
                .arg(json_arg()),
        )
}

fn region_arg() -> Arg {
    Arg::new("region")
        .long("region")
        .short('r')
        .help("Region being swept")
        .required(true)
}

fn prefix_arg() -> Arg {
    Arg::new("prefix")
        .long("prefix")
        .help("Name prefix of acceptance-test resources")
        .default_value(ACCEPTANCE_TEST_PREFIX)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_check_command() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "sweeper",
                "check",
                "acctestRG-1",
                "--location",
                "East US",
                "--region",
                "eastus",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("check").unwrap();
        assert_eq!(sub.get_one::<String>("name").unwrap(), "acctestRG-1");
        assert_eq!(sub.get_one::<String>("location").unwrap(), "East US");
        assert_eq!(sub.get_one::<String>("prefix").unwrap(), "acctest");
        assert!(!sub.get_flag("json"));
    }

    #[test]
    fn test_check_requires_region() {
        let result = build_cli().try_get_matches_from(vec![
            "sweeper",
            "check",
            "acctestRG-1",
            "--location",
            "eastus",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_command_with_file_and_prefix() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "sweeper",
                "plan",
                "--region",
                "westeurope",
                "--file",
                "resources.json",
                "--prefix",
                "acctestsa",
                "--json",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("plan").unwrap();
        assert_eq!(sub.get_one::<String>("file").unwrap(), "resources.json");
        assert_eq!(sub.get_one::<String>("prefix").unwrap(), "acctestsa");
        assert!(sub.get_flag("json"));
    }

    #[test]
    fn test_global_verbose_flag() {
        let matches = build_cli()
            .try_get_matches_from(vec!["sweeper", "env", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }
}
