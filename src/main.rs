use anyhow::{Context, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use datecalc::api::{ResultField, is_error_flag};
use datecalc::controller::{CallOutcome, Key, UiEvent};
use datecalc::input::is_valid_date;
use datecalc::view::{Button, InputField, View};
use datecalc::{CalcClient, DateInputController, MemoryView, load_client_config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "datecalc")]
#[command(about = "Calendar date conversions from the date calculation service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (yaml, json, toml or ron)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a calendar date, typed as digits (07042023) or with slashes
    Calendar {
        date: String,

        /// Refuse dates that are not YYYY-MM-DD, MM/DD/YYYY or MM-DD-YYYY
        #[arg(long)]
        validate: bool,
    },
    /// Convert a hundred-year date (days since 12/31/1899)
    HundredYear { days: String },
    /// Show the current local and UTC date and time
    Now,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_client_config(cli.config.as_deref())?;
    let client = CalcClient::try_from(&config)
        .with_context(|| format!("Could not set up a client for {}", config.base_url))?;
    let controller = DateInputController::new(MemoryView::new(), client);
    controller.handle(UiEvent::Load(Local::now()));

    let (field, text) = match cli.command {
        Commands::Calendar { date, validate } => {
            let field = InputField::DateInput;
            type_into(&controller, field, &date);
            if validate {
                let typed = controller.with_view(|view| view.input_value(field));
                if !is_valid_date(&typed) {
                    bail!("'{typed}' is not a valid YYYY-MM-DD, MM/DD/YYYY or MM-DD-YYYY date");
                }
            }
            (field, date)
        }
        Commands::HundredYear { days } => {
            let field = InputField::HundredYearInput;
            type_into(&controller, field, &days);
            (field, days)
        }
        Commands::Now => {
            print_view(&controller.with_view(|view| view.clone()));
            return Ok(());
        }
    };

    let event = match field {
        InputField::DateInput => UiEvent::KeyUp(field, Key::Enter),
        InputField::HundredYearInput => UiEvent::Click(Button::CalculateHundredYear),
    };
    let outcome = controller.handle(event).map(|pending| pending.wait());

    let view = controller.with_view(|view| view.clone());
    print_view(&view);

    match outcome {
        Some(CallOutcome::Failed) => bail!("The calculation for '{text}' failed"),
        _ if view.text(ResultField::ErrorFlag).is_some_and(is_error_flag) => {
            bail!("The service rejected '{text}'")
        }
        _ => Ok(()),
    }
}

/// Types `text` into `field` the way the page sees it: the value changes, then
/// the field loses focus.
fn type_into(
    controller: &DateInputController<MemoryView, CalcClient>,
    field: InputField,
    text: &str,
) {
    controller.with_view(|view| view.set_input_value(field, text));
    controller.handle(UiEvent::Input(field));
    controller.handle(UiEvent::Blur(field));
}

fn print_view(view: &MemoryView) {
    if view.prompt_visible() {
        println!("Please enter a date.");
    }
    for (element_id, text) in view.rendered() {
        println!("{element_id:<24}{text}");
    }
}
