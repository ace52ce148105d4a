use clap::Parser;

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Path to the configuration file. Defaults are used when omitted.
    #[clap(long, env = "CONFIG_FILE")]
    pub config_file: Option<String>,
}
