//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};
use super::option::{ConfigOption, Field};
use super::sort::SortKeys;
use super::{ConfigError, ErrorKind};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["slp"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

mod parsing {
    use super::*;

    #[test]
    fn parse_string_options() {
        let cli = cli(&[
            "--file",
            "/var/log/mysql/slow.log",
            "--format",
            "markdown",
            "--sort",
            "max-query-time",
            "--output",
            "count,query",
            "--matching-groups",
            "SELECT .+ FROM users",
            "--filters",
            "Count > 10",
            "--pos",
            "/tmp/slp.pos",
            "--percentiles",
            "50,99",
        ]);

        assert_eq!(cli.file.as_deref(), Some("/var/log/mysql/slow.log"));
        assert_eq!(cli.format.as_deref(), Some("markdown"));
        assert_eq!(cli.sort.as_deref(), Some("max-query-time"));
        assert_eq!(cli.output.as_deref(), Some("count,query"));
        assert_eq!(cli.matching_groups.as_deref(), Some("SELECT .+ FROM users"));
        assert_eq!(cli.filters.as_deref(), Some("Count > 10"));
        assert_eq!(cli.pos.as_deref(), Some("/tmp/slp.pos"));
        assert_eq!(cli.percentiles.as_deref(), Some("50,99"));
    }

    #[test]
    fn parse_numeric_options() {
        let cli = cli(&["--limit", "20", "--page", "-1"]);

        assert_eq!(cli.limit, Some(20));
        assert_eq!(cli.pagination_limit, Some(-1));
    }

    #[test]
    fn bare_bool_flag_is_explicit_true() {
        let cli = cli(&[
            "--reverse",
            "--noheaders",
            "--show-footers",
            "--nosave-pos",
            "--bundle-where-in",
            "--bundle-values",
            "--noabstract",
        ]);

        assert_eq!(cli.reverse, Some(true));
        assert_eq!(cli.no_headers, Some(true));
        assert_eq!(cli.show_footers, Some(true));
        assert_eq!(cli.no_save_pos, Some(true));
        assert_eq!(cli.bundle_where_in, Some(true));
        assert_eq!(cli.bundle_values, Some(true));
        assert_eq!(cli.no_abstract, Some(true));
    }

    #[test]
    fn bool_flag_accepts_explicit_false() {
        let cli = cli(&["--reverse=false", "--noheaders=true"]);

        assert_eq!(cli.reverse, Some(false));
        assert_eq!(cli.no_headers, Some(true));
    }

    #[test]
    fn parse_misc_options() {
        let cli = cli(&["--config", "/path/to/slp.toml", "--verbose"]);

        assert_eq!(
            cli.config.as_ref().unwrap().to_str(),
            Some("/path/to/slp.toml")
        );
        assert!(cli.verbose);
    }

    #[test]
    fn unset_flags_are_none() {
        let cli = cli(&[]);

        assert!(cli.file.is_none());
        assert!(cli.sort.is_none());
        assert!(cli.reverse.is_none());
        assert!(cli.limit.is_none());
        assert!(cli.percentiles.is_none());
        assert!(cli.pagination_limit.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn malformed_flag_value_is_flag_read_error() {
        let result = Cli::try_parse_from_iter(["slp", "--limit", "many"]);

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FlagRead(_)));
        assert_eq!(err.kind(), ErrorKind::FlagRead);
    }

    #[test]
    fn unknown_flag_is_flag_read_error() {
        let result = Cli::try_parse_from_iter(["slp", "--no-such-flag"]);

        assert!(matches!(result, Err(ConfigError::FlagRead(_))));
    }
}

mod config_path {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn absolute_path_is_unchanged() {
        let cli = cli(&["--config", "/etc/slp.toml"]);

        assert_eq!(cli.config_path(), Some(PathBuf::from("/etc/slp.toml")));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let cli = cli(&["--config", "~/slp.toml"]);

        assert_eq!(cli.config_path(), Some(home.join("slp.toml")));
    }

    #[test]
    fn none_without_flag() {
        assert_eq!(cli(&[]).config_path(), None);
    }
}

mod options {
    use super::*;

    #[test]
    fn no_flags_yields_only_defaults() {
        let options = cli(&[]).options(&SortKeys::builtin()).unwrap();

        assert!(options.explicit.is_empty());
        assert_eq!(options.defaults.len(), Field::ALL.len());
        assert!(options.defaults.contains(&ConfigOption::Sort("count".to_string())));
        assert!(options.defaults.contains(&ConfigOption::Limit(5000)));
        assert!(options.defaults.contains(&ConfigOption::Percentiles(vec![])));
    }

    #[test]
    fn explicit_flags_are_split_out() {
        let options = cli(&["--reverse", "--limit", "10"])
            .options(&SortKeys::builtin())
            .unwrap();

        assert_eq!(
            options.explicit,
            vec![ConfigOption::Reverse(true), ConfigOption::Limit(10)]
        );
        assert_eq!(options.defaults.len(), Field::ALL.len() - 2);
        assert!(!options.defaults.iter().any(|o| o.field() == Field::Reverse));
    }

    #[test]
    fn lists_follow_canonical_field_order() {
        let options = cli(&["--page", "5", "--sort", "query", "--file", "slow.log"])
            .options(&SortKeys::builtin())
            .unwrap();

        let fields: Vec<Field> = options.explicit.iter().map(ConfigOption::field).collect();
        assert_eq!(fields, vec![Field::File, Field::Sort, Field::PaginationLimit]);
    }

    #[test]
    fn every_field_appears_exactly_once() {
        let options = cli(&["--format", "tsv", "--noabstract"])
            .options(&SortKeys::builtin())
            .unwrap();

        let mut fields: Vec<Field> = options
            .defaults
            .iter()
            .chain(&options.explicit)
            .map(ConfigOption::field)
            .collect();
        fields.sort();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn percentiles_are_parsed() {
        let options = cli(&["--percentiles", "50,90,99"])
            .options(&SortKeys::builtin())
            .unwrap();

        assert_eq!(
            options.explicit,
            vec![ConfigOption::Percentiles(vec![50, 90, 99])]
        );
    }

    #[test]
    fn invalid_percentile_is_rejected() {
        let result = cli(&["--percentiles", "50,150"]).options(&SortKeys::builtin());

        assert!(matches!(
            result,
            Err(ConfigError::InvalidPercentile { value: 150 })
        ));
    }

    #[test]
    fn non_integer_percentile_is_parse_error() {
        let result = cli(&["--percentiles", "50,p90"]).options(&SortKeys::builtin());

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let result = cli(&["--sort", "bogus"]).options(&SortKeys::builtin());

        assert!(matches!(result, Err(ConfigError::InvalidSort { .. })));
    }

    #[test]
    fn default_sort_is_checked_against_allow_list() {
        let keys = SortKeys::new(["max", "min"]);
        let result = cli(&[]).options(&keys);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidSort { ref value, .. }) if value == "count"
        ));
    }
}

mod init_command {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_init_with_default_output() {
        let cli = cli(&["init"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("slp.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = cli(&["init", "--output", "/custom/path/slp.toml"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("/custom/path/slp.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn is_init_false_without_subcommand() {
        assert!(!cli(&["--sort", "count"]).is_init());
    }
}
