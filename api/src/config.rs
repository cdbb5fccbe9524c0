use clap::Parser;

#[derive(Debug, Parser)]
pub struct Config {
    /// Address to bind.
    // `-h` belongs to --help.
    #[clap(short = 'H', long, env, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    #[clap(short, long, env, default_value_t = 7205)]
    pub port: u16,

    /// Set to `development` to include panic details in error responses.
    #[clap(long, env, default_value_t = String::from("production"))]
    pub env: String,
}

impl Config {
    pub fn production(&self) -> bool {
        self.env != "development" && !cfg!(debug_assertions)
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Config;

    #[test]
    fn command_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["apikey-api"]).expect("parsing defaults");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7205);
        assert_eq!(config.env, "production");
    }

    #[test]
    fn flags() {
        let config =
            Config::try_parse_from(["apikey-api", "-H", "0.0.0.0", "-p", "8080", "--env", "development"])
                .expect("parsing flags");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.env, "development");
    }

    #[test]
    fn help_flag_is_available() {
        let err = Config::try_parse_from(["apikey-api", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
