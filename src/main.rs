// Release builds run as a GUI application (no console window).
// Debug builds keep the console so that log output is visible.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![deny(unsafe_code)]

use clap::Parser;

use window_bootstrap::{report_error, run_config, WindowConfig};

/// Open one native window and wait until it is closed.
#[derive(Debug, Parser)]
#[command(name = "window-bootstrap", version, about)]
struct Args {
    /// Client-area width in device pixels.
    #[arg(default_value_t = 800)]
    width: i32,

    /// Client-area height in device pixels.
    #[arg(default_value_t = 600)]
    height: i32,

    /// Title bar text.
    #[arg(default_value = "Demo")]
    title: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let result = WindowConfig::new(args.width, args.height, args.title)
        .and_then(|config| run_config(&config));

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // Startup failed before or during the message loop.
            report_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_the_demo_window() {
        let args = Args::try_parse_from(["window-bootstrap"]).expect("parse");
        assert_eq!((args.width, args.height, args.title.as_str()), (800, 600, "Demo"));
    }

    #[test]
    fn positional_parameters_override_defaults() {
        let args =
            Args::try_parse_from(["window-bootstrap", "320", "240", "Small"]).expect("parse");
        assert_eq!((args.width, args.height, args.title.as_str()), (320, 240, "Small"));
    }

    #[test]
    fn negative_size_parses_but_fails_validation() {
        let args =
            Args::try_parse_from(["window-bootstrap", "--", "-5", "10"]).expect("parse");
        assert!(WindowConfig::new(args.width, args.height, args.title).is_err());
    }
}
