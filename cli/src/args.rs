use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "friendpath")]
#[command(about = "Find the shortest connection path between two people in a social circle")]
pub struct Args {
    /// Person to start from
    #[arg(default_value = "YOU")]
    pub from: String,

    /// Person to reach
    #[arg(default_value = "ANUJ")]
    pub to: String,

    /// Separator printed between identifiers in the path
    #[arg(short, long, value_name = "STRING", default_value = "-->")]
    pub separator: String,

    /// Output the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}
