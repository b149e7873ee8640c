use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "A small command-line diary with emotion tags", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Latest,
    Oldest,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a new entry
    #[command(alias = "n")]
    New {
        /// Diary date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Emotion tag, 1 (best) to 5 (worst); defaults to the configured value
        #[arg(short, long)]
        emotion: Option<u8>,

        /// Entry text
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        content: Vec<String>,
    },

    /// List entries
    #[command(alias = "ls")]
    List {
        /// Sort order by diary date
        #[arg(short, long, value_enum, default_value_t = SortArg::Latest)]
        sort: SortArg,

        /// Only show entries with this emotion tag
        #[arg(short, long)]
        emotion: Option<u8>,
    },

    /// Show one entry in full
    #[command(alias = "s")]
    Show {
        /// Id of the entry
        id: u64,
    },

    /// Edit an entry (omitted fields keep their current value)
    #[command(alias = "e")]
    Edit {
        /// Id of the entry
        id: u64,

        /// New diary date as YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,

        /// New emotion tag, 1 to 5
        #[arg(short, long)]
        emotion: Option<u8>,

        /// New entry text
        #[arg(num_args = 0.., trailing_var_arg = true)]
        content: Vec<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Id of the entry
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the path of the diary data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (date-format, default-emotion)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
