//! CLI argument definitions.
//!
//! BBS hosts launch the door with a command line such as
//! `ghostnet-door --path /bbs/temp/node%N`, substituting the node's drop
//! file directory.

use clap::Parser;
use std::path::PathBuf;

use crate::application::DEFAULT_DATA_DIR;
use crate::config::DEFAULT_CONFIG_FILE;

/// GHOSTnet door - node application menu for BBS callers.
#[derive(Debug, Parser)]
#[command(name = "ghostnet-door")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the caller's door32.sys
    #[arg(short, long)]
    pub path: PathBuf,

    /// Path to the INI config file
    #[arg(short, long, env = "GHOSTNET_DOOR_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory applications are saved in
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// ANSI art file shown before the menu
    #[arg(long)]
    pub art: Option<PathBuf>,

    /// Delay between ANSI art lines, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub art_delay: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
