//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::{services::Alert, status::{GlyphSpec, Rgb}};

#[cfg(target_os = "macos")]
const DEFAULT_SOUND: &str = "/System/Library/Sounds/Glass.aiff";
#[cfg(not(target_os = "macos"))]
const DEFAULT_SOUND: &str = "/usr/share/sounds/freedesktop/stereo/complete.oga";

#[cfg(target_os = "macos")]
const DEFAULT_SOUND_PLAYER: &str = "afplay";
#[cfg(not(target_os = "macos"))]
const DEFAULT_SOUND_PLAYER: &str = "paplay";

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "twenty-twenty-twenty")]
#[command(about = "A background break reminder following the 20-20-20 eye-care rule")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port for the status indicator control surface
    #[arg(short, long, default_value = "20020")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Break interval in seconds
    #[arg(short, long, default_value = "1200", value_parser = clap::value_parser!(u64).range(1..=86_400))]
    pub interval: u64,

    /// Notification title
    #[arg(long, default_value = "20-20-20 Reminder")]
    pub title: String,

    /// Notification body
    #[arg(long, default_value = "Look at something 20 feet away for 20 seconds.")]
    pub message: String,

    /// Sound played with each alert, skipped when the file does not exist
    #[arg(long, default_value = DEFAULT_SOUND)]
    pub sound: PathBuf,

    /// Program used to play the sound file
    #[arg(long, default_value = DEFAULT_SOUND_PLAYER)]
    pub sound_player: String,

    /// Status indicator glyph size in pixels
    #[arg(long, default_value = "64")]
    pub glyph_size: u32,

    /// Status indicator background color
    #[arg(long, default_value = "#ffffff")]
    pub glyph_background: Rgb,

    /// Status indicator disc color
    #[arg(long, default_value = "#000000")]
    pub glyph_foreground: Rgb,

    /// Begin the break cycle immediately at launch
    #[arg(short, long)]
    pub autostart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// The alert fired at the end of every break cycle
    pub fn alert(&self) -> Alert {
        Alert {
            title: self.title.clone(),
            message: self.message.clone(),
            sound: Some(self.sound.clone()),
        }
    }

    pub fn glyph(&self) -> GlyphSpec {
        GlyphSpec {
            size: self.glyph_size,
            background: self.glyph_background,
            foreground: self.glyph_foreground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_twenty_minute_rule() {
        let config = Config::try_parse_from(["twenty-twenty-twenty"]).unwrap();
        assert_eq!(config.interval, 1200);
        assert_eq!(config.address(), "127.0.0.1:20020");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.alert().title, "20-20-20 Reminder");
        assert_eq!(config.glyph().size, 64);
        assert!(!config.autostart);
    }

    #[test]
    fn interval_must_be_positive() {
        assert!(Config::try_parse_from(["twenty-twenty-twenty", "--interval", "0"]).is_err());
        let config = Config::try_parse_from(["twenty-twenty-twenty", "-i", "2", "-v"]).unwrap();
        assert_eq!(config.interval, 2);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_malformed_colors() {
        let result = Config::try_parse_from([
            "twenty-twenty-twenty",
            "--glyph-foreground",
            "#12345",
        ]);
        assert!(result.is_err());
    }
}
