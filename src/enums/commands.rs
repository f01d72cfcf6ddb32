use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file for problems
    Validate,
    /// Fetch the month-over-month comparison and print it
    Compare {
        /// Base URL of the cost API (overrides the config file)
        #[clap(short, long)]
        url: Option<String>,
        /// Only show services whose name contains this text
        #[clap(short, long)]
        query: Option<String>,
    },
    /// Walk through visible cost increases and record explanations
    Review {
        #[clap(short, long)]
        url: Option<String>,
        #[clap(short, long)]
        query: Option<String>,
    },
    /// Serve the comparison table and review workflow in the browser
    Dashboard {
        #[clap(short, long)]
        url: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        /// Do not open a browser window
        #[clap(long)]
        no_browser: bool,
    },
    /// List incidents already stored by the cost API
    Incidents {
        #[clap(short, long)]
        url: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Validate => "validate",
            Self::Compare { .. } => "compare",
            Self::Review { .. } => "review",
            Self::Dashboard { .. } => "dashboard",
            Self::Incidents { .. } => "incidents",
        }
    }
}
