use std::ffi::OsString;

pub use clap::Parser;

/// finedust is purely interactive: clap only contributes `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {}

#[derive(Debug, Clone, Default)]
pub struct CommandLineArgs {}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let _args = ClapArgs::parse();
        Self {}
    }

    #[allow(dead_code)]
    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let _args = ClapArgs::parse_from(itr);
        Self {}
    }

    #[allow(dead_code)]
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(|_| Self {})
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_without_arguments() {
        let _args = CommandLineArgs::parse_from(["program"]);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = CommandLineArgs::try_parse_from(["program", "--profile", "test"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_argument_is_rejected() {
        let result = CommandLineArgs::try_parse_from(["program", "서울"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_flag_is_handled_by_clap() {
        let err = CommandLineArgs::try_parse_from(["program", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
