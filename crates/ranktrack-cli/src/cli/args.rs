use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ranktrack",
    version,
    about = "Admission rank tracker: offer dates, privacy and per-programme leaderboards"
)]
pub struct Cli {
    /// Config file with current year and programme capacities
    #[arg(
        long,
        global = true,
        default_value = "ranktrack.yaml",
        env = "RANKTRACK_CONFIG"
    )]
    pub config: PathBuf,

    /// SQLite database holding ranks and display names
    #[arg(
        long,
        global = true,
        default_value = ".ranktrack/ranks.db",
        env = "RANKTRACK_DB"
    )]
    pub db: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a rank for a programme and year
    Add(AddArgs),
    /// Show a stored rank
    Show(RankKeyArgs),
    /// Delete one rank, or every rank of the user in a year
    Delete(DeleteArgs),
    /// Manually set or clear the offer date of a rank above capacity
    SetOfferDate(SetOfferDateArgs),
    /// Public leaderboard for a year, most popular programme first
    Top(TopArgs),
    Privacy(PrivacyArgs),
    User(UserArgs),
    /// List configured programmes and their places
    Programmes,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Clone, Debug)]
pub struct RankKeyArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub programme: String,
    #[arg(long)]
    pub year: i32,
}

#[derive(Args, Clone, Debug)]
pub struct AddArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub rank: i32,
    #[arg(long)]
    pub programme: String,
    #[arg(long)]
    pub year: i32,
    /// Omit for anonymous bulk entries
    #[arg(long)]
    pub user: Option<String>,
    /// YYYY-MM-DD; only accepted for ranks above capacity
    #[arg(long)]
    pub offer_date: Option<NaiveDate>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub private: bool,
}

#[derive(Args, Clone, Debug)]
pub struct DeleteArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub year: i32,
    /// Omit to delete across all programmes
    #[arg(long)]
    pub programme: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct SetOfferDateArgs {
    #[command(flatten)]
    pub key: RankKeyArgs,
    #[arg(long, conflicts_with = "clear", required_unless_present = "clear")]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub clear: bool,
}

#[derive(Args, Clone, Debug)]
pub struct TopArgs {
    #[arg(long)]
    pub year: i32,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Clone, Debug)]
pub struct PrivacyArgs {
    #[command(subcommand)]
    pub cmd: PrivacySub,
}

#[derive(Subcommand, Clone, Debug)]
pub enum PrivacySub {
    /// Print the privacy flag (and single-rank status when no programme is given)
    Get {
        #[arg(long)]
        user: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        programme: Option<String>,
    },
    Set {
        #[arg(long)]
        user: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        programme: Option<String>,
        #[arg(long, action = ArgAction::Set)]
        private: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub cmd: UserSub,
}

#[derive(Subcommand, Clone, Debug)]
pub enum UserSub {
    /// Set the display name used on the leaderboard
    SetName {
        #[arg(long)]
        user: String,
        #[arg(long)]
        name: String,
    },
}
