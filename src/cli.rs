// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "generative-logo")]
#[command(about = "Animated shader logo", long_about = None)]
pub struct Cli {
    /// Hide the FPS readout
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
