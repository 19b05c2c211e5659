use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use heloc::export::{export_inputs, DEFAULT_EXPORT_FILE};
use heloc::{
    build_schedule, calculate_available_equity, calculate_heloc, calculate_interest_cost,
    compare_options, ComparisonInputs, EquityInputs, HelocError, LoanInputs, PaymentType,
    SimpleLoanInputs,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{error::Error, fmt::Display, fs, process};

/// HELOC and home-equity loan calculators
#[derive(Parser)]
#[command(name = "heloc", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    output: OutputFormat,

    /// Log level (RUST_LOG overrides)
    #[arg(long, default_value = "warn", global = true)]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw and repayment period payments for a HELOC
    Heloc(LoanArgs),
    /// How much can be borrowed against a home
    Equity(EquityArgs),
    /// Interest cost of a fixed-rate loan
    Cost(CostArgs),
    /// Compare a HELOC against a home equity loan
    Compare(CompareArgs),
    /// Month-by-month HELOC payment schedule
    Schedule(ScheduleArgs),
    /// Save the HELOC inputs to a timestamped JSON file
    Export(ExportArgs),
}

#[derive(Args)]
struct LoanArgs {
    #[arg(long)]
    home_value: f64,
    #[arg(long, default_value_t = 0.)]
    mortgage_balance: f64,
    #[arg(long)]
    credit_limit: f64,
    #[arg(long)]
    draw_amount: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: f64,
    #[arg(long, default_value_t = 10)]
    draw_period: u32,
    #[arg(long, default_value_t = 20)]
    repayment_period: u32,
    /// interest-only or principal-interest
    #[arg(long, default_value = "interest-only")]
    payment_type: PaymentType,
}

impl From<&LoanArgs> for LoanInputs {
    fn from(args: &LoanArgs) -> Self {
        LoanInputs {
            home_value: args.home_value,
            mortgage_balance: args.mortgage_balance,
            credit_limit: args.credit_limit,
            draw_amount: args.draw_amount,
            annual_rate: args.rate,
            draw_period_years: args.draw_period,
            repayment_period_years: args.repayment_period,
            payment_type: args.payment_type,
        }
    }
}

#[derive(Args)]
struct EquityArgs {
    #[arg(long)]
    home_value: f64,
    #[arg(long, default_value_t = 0.)]
    mortgage_balance: f64,
    /// Maximum combined LTV in percent, 85 if omitted
    #[arg(long)]
    max_ltv: Option<f64>,
}

#[derive(Args)]
struct CostArgs {
    #[arg(long)]
    principal: f64,
    #[arg(long)]
    rate: f64,
    #[arg(long)]
    years: f64,
}

#[derive(Args)]
struct CompareArgs {
    #[arg(long)]
    amount: f64,
    #[arg(long)]
    heloc_rate: f64,
    #[arg(long)]
    loan_rate: f64,
    #[arg(long)]
    term: f64,
}

#[derive(Args)]
struct ScheduleArgs {
    #[command(flatten)]
    loan: LoanArgs,
    /// First payment date (YYYY-MM-DD), today if omitted
    #[arg(long)]
    start: Option<NaiveDate>,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    loan: LoanArgs,
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    out: String,
}

fn emit<T: Display + Serialize>(value: &T, output: OutputFormat) -> Result<(), Box<dyn Error>> {
    match output {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Heloc(args) => emit(&calculate_heloc(&(&args).into())?, cli.output),
        Commands::Equity(args) => {
            let inputs = EquityInputs {
                home_value: args.home_value,
                mortgage_balance: args.mortgage_balance,
                max_ltv_percent: args.max_ltv,
            };
            emit(&calculate_available_equity(&inputs)?, cli.output)
        }
        Commands::Cost(args) => {
            let inputs = SimpleLoanInputs {
                principal: args.principal,
                annual_rate: args.rate,
                term_years: args.years,
            };
            emit(&calculate_interest_cost(&inputs)?, cli.output)
        }
        Commands::Compare(args) => {
            let inputs = ComparisonInputs {
                amount: args.amount,
                heloc_rate: args.heloc_rate,
                loan_rate: args.loan_rate,
                term_years: args.term,
            };
            emit(&compare_options(&inputs)?, cli.output)
        }
        Commands::Schedule(args) => {
            let start = args.start.unwrap_or_else(|| Utc::now().date_naive());
            let sched = build_schedule(&(&args.loan).into(), start)?;
            match cli.output {
                OutputFormat::Text => {
                    for pmt in &sched {
                        println!("{}", pmt);
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sched)?),
            }
            Ok(())
        }
        Commands::Export(args) => {
            let inputs: LoanInputs = (&args.loan).into();
            inputs.validate()?;
            fs::write(&args.out, export_inputs(&inputs, Utc::now())?)?;
            info!("exported inputs to {}", args.out);
            println!("Saved {}", args.out);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new().with_level(cli.log_level).env().init() {
        eprintln!("logger setup failed: {}", e);
    }

    if let Err(e) = run(cli) {
        match e.downcast_ref::<HelocError>() {
            Some(err) => eprintln!("{}", err.reason()),
            None => eprintln!("Error: {}", e),
        }
        process::exit(1);
    }
}
