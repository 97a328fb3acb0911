//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{engine::TimerConfig, services::DEFAULT_SOUND_COMMAND, utils::Locale};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "round-timer")]
#[command(about = "A boxing round timer with rest periods, sound cues and round notifications")]
#[command(version)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Language for notifications and terminal output
    #[arg(long, value_enum, default_value_t = Locale::En, global = true)]
    pub locale: Locale,

    /// Directory holding rest.mp3 and roundEnd.mp3; rings the terminal bell when absent
    #[arg(long, global = true)]
    pub sound_dir: Option<PathBuf>,

    /// Command used to play a sound file, the file path is appended
    #[arg(long, default_value = DEFAULT_SOUND_COMMAND, global = true)]
    pub sound_command: String,

    /// Show round notifications on the desktop via notify-send
    #[arg(long, global = true)]
    pub desktop_notifications: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one training session in the terminal
    Run {
        /// Number of rounds
        #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=10))]
        rounds: u32,

        /// Round duration in minutes
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=10))]
        round_minutes: u32,

        /// Rest duration in seconds
        #[arg(short = 's', long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(30..=180))]
        rest_seconds: u32,
    },

    /// Serve the timer over HTTP
    Serve {
        /// Port to bind the server to
        #[arg(short, long, default_value = "20554")]
        port: u16,

        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

impl Command {
    /// Timer config for `run`, converting minutes to seconds
    pub fn timer_config(&self) -> Option<TimerConfig> {
        match self {
            Command::Run { rounds, round_minutes, rest_seconds } => {
                Some(TimerConfig::new(*rounds, round_minutes * 60, *rest_seconds))
            }
            Command::Serve { .. } => None,
        }
    }

    /// Server address for `serve`
    pub fn address(&self) -> Option<String> {
        match self {
            Command::Serve { host, port } => Some(format!("{}:{}", host, port)),
            Command::Run { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults_match_the_configuration_screen() {
        let config = Config::try_parse_from(["round-timer", "run"]).unwrap();
        assert_eq!(config.command.timer_config(), Some(TimerConfig::new(5, 180, 60)));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn run_values_outside_slider_ranges_are_rejected() {
        assert!(Config::try_parse_from(["round-timer", "run", "--rounds", "0"]).is_err());
        assert!(Config::try_parse_from(["round-timer", "run", "--round-minutes", "11"]).is_err());
        assert!(Config::try_parse_from(["round-timer", "run", "--rest-seconds", "20"]).is_err());
    }

    #[test]
    fn serve_builds_an_address_and_accepts_global_flags() {
        let config = Config::try_parse_from([
            "round-timer", "serve", "--port", "8080", "--locale", "fr", "-v",
        ])
        .unwrap();
        assert_eq!(config.command.address().as_deref(), Some("127.0.0.1:8080"));
        assert_eq!(config.command.timer_config(), None);
        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(config.log_level(), "debug");
    }
}
