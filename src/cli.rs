//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// ohsdk - unattended SDK installer
///
/// Installs the newest API level of the toolchains, ets, js, native and
/// previewer components, accepting required licenses when the first
/// attempt is blocked.
#[derive(Parser, Debug)]
#[command(
    name = "ohsdk",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Unattended installer for versioned SDK components",
    long_about = "ohsdk discovers the available SDK API versions, installs the components needed \
                  to build and preview applications for the newest one, and accepts required \
                  licenses automatically when they block the install.",
    after_help = "\x1b[1m\x1b[32mExit codes:\x1b[0m\n    \
                  0  success\n    \
                  1  unhandled error\n    \
                  2  no API versions discovered\n    \
                  3  install returned an empty result\n\n\
                  \x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  ohsdk\n    \
                  ohsdk ~/sdk ~/tools/node18\n    \
                  ohsdk ~/sdk ~/tools/node18 --repository /mnt/sdk-mirror"
)]
pub struct Cli {
    /// SDK installation root (defaults to the platform SDK location)
    #[arg(value_name = "SDK_ROOT", env = "OHSDK_ROOT")]
    pub sdk_root: Option<PathBuf>,

    /// Node.js runtime home used by SDK tooling
    #[arg(value_name = "NODE_HOME", env = "OHSDK_NODE_HOME")]
    pub node_home: Option<PathBuf>,

    /// Component repository to install from
    #[arg(long, short = 'r', value_name = "DIR", env = "OHSDK_REPOSITORY")]
    pub repository: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
