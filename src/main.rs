use clap::Parser;
use std::process::ExitCode;
use trip_deck::args::{Args, Command, DatasetCommand};
use trip_deck::commands::{self, Session};
use trip_deck::generator::StaticGenerator;
use trip_deck::view::TerminalShell;
use trip_deck::{Config, Result};
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().trip_home().path();
    let plain = args.common().plain();
    let session = || -> Result<Session> { Session::open(Config::open(home)?, plain) };
    let mut shell = TerminalShell::new();

    // Route to appropriate command handler
    let mut current = match args.command() {
        Command::Init(init_args) => {
            commands::init(home, init_args.dataset())?.print();
            return Ok(());
        }

        Command::Schema => {
            commands::schema()?.print();
            return Ok(());
        }

        Command::Generate(generate_args) => {
            commands::generate(&StaticGenerator, &generate_args.params())
                .await?
                .print();
            return Ok(());
        }

        Command::Dataset(dataset_args) => {
            match dataset_args.command() {
                DatasetCommand::Import { file } => {
                    commands::dataset_import(&Config::open(home)?, file)?.print()
                }
                DatasetCommand::Export => commands::dataset_export(&session()?)?.print(),
                DatasetCommand::Reset => commands::dataset_reset(&Config::open(home)?)?.print(),
            }
            return Ok(());
        }

        Command::Overview => {
            let session = session()?;
            commands::overview(&session)?.print();
            session
        }

        Command::Itinerary(itinerary_args) => {
            let session = session()?;
            commands::itinerary(&session, itinerary_args.day(), &mut shell)?.print();
            session
        }

        Command::Members(members_args) => {
            let session = session()?;
            commands::members(&session, members_args.room_map(), &mut shell)?.print();
            session
        }

        Command::Expenses => {
            let session = session()?;
            commands::expenses(&session)?.print();
            session
        }

        Command::Prep(prep_args) => {
            let mut session = session()?;
            commands::preparation(&mut session, prep_args.toggle(), prep_args.keys())?.print();
            session
        }

        Command::Convert(convert_args) => {
            let session = session()?;
            commands::convert(
                &session,
                convert_args.group(),
                convert_args.from(),
                convert_args.amount(),
            )?
            .print();
            session
        }

        Command::Prefs(prefs_args) => {
            let mut session = session()?;
            commands::prefs(&mut session, prefs_args.theme(), prefs_args.font())?.print();
            session
        }

        Command::Slideshow(slideshow_args) => {
            let session = session()?;
            commands::slideshow(&session, slideshow_args.ticks())
                .await?
                .print();
            session
        }
    };

    // Follow navigation requested by the view that was just shown.
    while let Some(view) = shell.take_redirect() {
        commands::show(&mut current, view, &mut shell)?;
    }
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
