use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_calendar, handle_expense_command, handle_export_command, handle_job_command,
    handle_overview, handle_payment_command, handle_salary, handle_summary, handle_work_command,
    ExpenseCommands, ExportArgs, JobCommands, PaymentCommands, WorkCommands,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::display::DisplayOptions;
use tally::state::AppState;
use tally::storage::JsonStorage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Track daily expenses and salary from the terminal",
    long_about = "Tally records daily expenses by category and the money you \
                  earn from jobs, then shows what you spent, what you are owed \
                  and where the month is heading."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Job management commands
    #[command(subcommand)]
    Job(JobCommands),

    /// Work entry commands
    #[command(subcommand)]
    Work(WorkCommands),

    /// Salary payment commands
    #[command(subcommand, alias = "pay")]
    Payment(PaymentCommands),

    /// Expense summary for a day
    Summary {
        /// Day to summarise (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Month calendar with daily totals
    Calendar {
        /// Month (YYYY-MM, prev, next, or an offset like -1); defaults to
        /// the current month
        #[arg(short, long, allow_hyphen_values = true)]
        month: Option<String>,
    },

    /// Monthly dashboard
    Overview {
        /// Month (YYYY-MM, prev, next, or an offset like -1); defaults to
        /// the current month
        #[arg(short, long, allow_hyphen_values = true)]
        month: Option<String>,
    },

    /// Earnings, payments and pending salary per job
    Salary,

    /// Export a month of records
    Export(ExportArgs),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    tally::logging::init(&settings.log_level);
    log::debug!("using data directory {}", paths.base_dir().display());

    let opts = DisplayOptions::from(&settings);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Tally at: {}", paths.base_dir().display());
            tally::storage::init::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  tally job add \"Cafe\"");
            println!("  tally expense add \"Lunch\" 12.50 --category Food");
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Month format:     {}", settings.month_format);
            println!("  Log level:        {}", settings.log_level);
            let week_start = if settings.week_starts_on_monday {
                "Monday"
            } else {
                "Sunday"
            };
            println!("  Week starts on:   {}", week_start);
            return Ok(());
        }
        None => {
            println!("Tally - expense and salary tracker");
            println!();
            println!("Run 'tally --help' for usage information.");
            return Ok(());
        }
        Some(_) => {}
    }

    if tally::storage::needs_initialization(&paths) {
        log::info!("first run, creating {}", paths.base_dir().display());
        tally::storage::initialize_storage(&paths)?;
    }

    let storage = JsonStorage::open(paths)?;
    let mut state = AppState::load(storage)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut state, &opts, cmd)?,
        Some(Commands::Job(cmd)) => handle_job_command(&mut state, cmd)?,
        Some(Commands::Work(cmd)) => handle_work_command(&mut state, &opts, cmd)?,
        Some(Commands::Payment(cmd)) => handle_payment_command(&mut state, &opts, cmd)?,
        Some(Commands::Summary { date }) => handle_summary(&state, &opts, date.as_deref())?,
        Some(Commands::Calendar { month }) => handle_calendar(&state, &opts, month.as_deref())?,
        Some(Commands::Overview { month }) => handle_overview(&state, &opts, month.as_deref())?,
        Some(Commands::Salary) => handle_salary(&state, &opts)?,
        Some(Commands::Export(args)) => handle_export_command(&state, args)?,
        Some(Commands::Init) | Some(Commands::Config) | None => {}
    }

    Ok(())
}
