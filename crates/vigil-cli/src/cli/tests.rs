#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_size_kb, parse_suffix};
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_size_kb() {
        assert_eq!(parse_size_kb("500"), Ok(500));
        assert_eq!(parse_size_kb(" 250 "), Ok(250));
        assert!(parse_size_kb("0").is_err());
        assert!(parse_size_kb("-1").is_err());
        assert!(parse_size_kb("1.5").is_err());
        assert!(parse_size_kb("lots").is_err());
        assert!(parse_size_kb(&u64::MAX.to_string()).is_err());
    }

    #[test]
    fn test_parse_suffix() {
        assert_eq!(parse_suffix(".js"), Ok(".js".to_string()));
        assert_eq!(parse_suffix("mjs"), Ok(".mjs".to_string()));
        assert!(parse_suffix("").is_err());
        assert!(parse_suffix(".").is_err());
        assert!(parse_suffix(".j s").is_err());
        assert!(parse_suffix("dist/.js").is_err());
    }

    #[test]
    fn test_build_command_after_separator() {
        let cli = Cli::try_parse_from([
            "vigil", "build", "--out-dir", "build", "--", "npm", "run", "build",
        ])
        .unwrap();

        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.command, vec!["npm", "run", "build"]);
                assert_eq!(args.monitor.out_dir, Some(PathBuf::from("build")));
                assert_eq!(args.slow_build_secs, None);
            }
            _ => panic!("Expected build command"),
        }
    }

    #[test]
    fn test_build_command_keeps_hyphen_args() {
        let cli = Cli::try_parse_from([
            "vigil",
            "build",
            "--",
            "npx",
            "webpack",
            "--config",
            "build/webpack.prod.js",
        ])
        .unwrap();

        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.command[2], "--config");
            }
            _ => panic!("Expected build command"),
        }
    }

    #[test]
    fn test_build_overrides_convert_kb() {
        let cli = Cli::try_parse_from([
            "vigil",
            "build",
            "--size-limit-kb",
            "250",
            "--slow-build-secs",
            "3.5",
            "--suffix",
            "mjs",
            "--",
            "make",
        ])
        .unwrap();

        let Command::Build(args) = cli.command else {
            panic!("Expected build command");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.size_limit_bytes, Some(256_000));
        assert_eq!(overrides.slow_build_secs, Some(3.5));
        assert_eq!(overrides.script_suffix, Some(".mjs".to_string()));
        assert_eq!(overrides.command, vec!["make"]);
        assert_eq!(overrides.watch_dir, None);
    }

    #[test]
    fn test_watch_args() {
        let cli = Cli::try_parse_from([
            "vigil",
            "watch",
            "--watch-dir",
            "app",
            "--debounce-ms",
            "250",
            "--",
            "npm",
            "run",
            "build",
        ])
        .unwrap();

        let Command::Watch(args) = cli.command else {
            panic!("Expected watch command");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.watch_dir, Some(PathBuf::from("app")));
        assert_eq!(overrides.debounce_ms, Some(250));
        assert_eq!(overrides.command.len(), 3);
    }

    #[test]
    fn test_check_strict() {
        let cli = Cli::try_parse_from(["vigil", "check", "--strict", "-d", "public"]).unwrap();

        let Command::Check(args) = cli.command else {
            panic!("Expected check command");
        };
        assert!(args.strict);
        assert_eq!(args.overrides().out_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "vigil",
            "check",
            "--no-color",
            "-q",
            "--config",
            "ci.vigil.json",
        ])
        .unwrap();

        assert!(cli.quiet);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("ci.vigil.json")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["vigil", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_invalid_size_limit_rejected() {
        assert!(Cli::try_parse_from(["vigil", "check", "--size-limit-kb", "0"]).is_err());
    }
}
