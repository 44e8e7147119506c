//! These structs provide the CLI interface for the trip CLI.

use crate::currency::{Currency, CurrencyGroup};
use crate::model::TripGenerationParams;
use crate::prefs::{FontScale, Theme};
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// trip: A terminal presenter for a hand-authored trip.
///
/// Shows the day-by-day overview, the detailed itinerary, expenses, the packing checklist and the
/// member roster of a single trip. The built-in sample trip is shown until you import your own
/// dataset with `trip dataset import`.
///
/// Viewing preferences and checklist progress are kept in --trip-home, which is created on first
/// use.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the home directory and its configuration file.
    ///
    /// Other commands create the home on first use, so this is only needed to choose the location
    /// up front or to import a dataset at the same time.
    Init(InitArgs),
    /// Show the day-by-day summary of the trip.
    Overview,
    /// Show the activities of one day.
    Itinerary(ItineraryArgs),
    /// Show who is travelling and their cabins.
    Members(MembersArgs),
    /// Show the estimated expenses, grouped by category.
    Expenses,
    /// Show the packing checklist, or check and uncheck items.
    Prep(PrepArgs),
    /// Convert an amount between the currencies used on the trip.
    Convert(ConvertArgs),
    /// Show or change the theme and font size.
    Prefs(PrefsArgs),
    /// Import, export or reset the trip dataset.
    Dataset(DatasetArgs),
    /// Print the header images as they rotate.
    Slideshow(SlideshowArgs),
    /// Generate an itinerary from a short description (not available in this build).
    Generate(GenerateArgs),
    /// Print the JSON schema of the trip dataset.
    Schema,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where configuration and preferences are held. Defaults to ~/.trip-deck
    #[arg(long, env = "TRIP_DECK_HOME", default_value_t = default_trip_home())]
    trip_home: DisplayPath,

    /// Print without colors.
    #[arg(long)]
    plain: bool,
}

impl Common {
    pub fn new(log_level: LevelFilter, trip_home: PathBuf, plain: bool) -> Self {
        Self {
            log_level,
            trip_home: trip_home.into(),
            plain,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn trip_home(&self) -> &DisplayPath {
        &self.trip_home
    }

    pub fn plain(&self) -> bool {
        self.plain
    }
}

/// Args for the `trip init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// A trip dataset (JSON) to import right away.
    #[arg(long)]
    dataset: Option<PathBuf>,
}

impl InitArgs {
    pub fn new(dataset: Option<PathBuf>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> Option<&Path> {
        self.dataset.as_deref()
    }
}

/// Args for the `trip itinerary` command.
#[derive(Debug, Parser, Clone)]
pub struct ItineraryArgs {
    /// The day number to show. Defaults to the first day.
    #[arg(long)]
    day: Option<u32>,
}

impl ItineraryArgs {
    pub fn new(day: Option<u32>) -> Self {
        Self { day }
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }
}

/// Args for the `trip members` command.
#[derive(Debug, Parser, Clone)]
pub struct MembersArgs {
    /// Open the cabin layout image in the system viewer.
    #[arg(long)]
    room_map: bool,
}

impl MembersArgs {
    pub fn new(room_map: bool) -> Self {
        Self { room_map }
    }

    pub fn room_map(&self) -> bool {
        self.room_map
    }
}

/// Args for the `trip prep` command.
#[derive(Debug, Parser, Clone)]
pub struct PrepArgs {
    /// Check or uncheck the item with this key. Can be repeated. Use --keys to see the keys.
    #[arg(long)]
    toggle: Vec<String>,

    /// Show the key of each item.
    #[arg(long)]
    keys: bool,
}

impl PrepArgs {
    pub fn new(toggle: Vec<String>, keys: bool) -> Self {
        Self { toggle, keys }
    }

    pub fn toggle(&self) -> &[String] {
        &self.toggle
    }

    pub fn keys(&self) -> bool {
        self.keys
    }
}

/// Args for the `trip convert` command.
#[derive(Debug, Parser, Clone)]
pub struct ConvertArgs {
    /// The set of currencies to show: singapore, malaysia_thailand or cruise_app
    #[arg(long, default_value_t = CurrencyGroup::default())]
    group: CurrencyGroup,

    /// The currency of AMOUNT, e.g. USD
    #[arg(long, default_value_t = Currency::PIVOT)]
    from: Currency,

    /// The amount to convert. Without it the converter is shown empty.
    amount: Option<String>,
}

impl ConvertArgs {
    pub fn new(group: CurrencyGroup, from: Currency, amount: Option<String>) -> Self {
        Self {
            group,
            from,
            amount,
        }
    }

    pub fn group(&self) -> CurrencyGroup {
        self.group
    }

    pub fn from(&self) -> Currency {
        self.from
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }
}

/// Args for the `trip prefs` command.
#[derive(Debug, Parser, Clone)]
pub struct PrefsArgs {
    /// light or dark
    #[arg(long)]
    theme: Option<Theme>,

    /// normal, large or extra
    #[arg(long)]
    font: Option<FontScale>,
}

impl PrefsArgs {
    pub fn new(theme: Option<Theme>, font: Option<FontScale>) -> Self {
        Self { theme, font }
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn font(&self) -> Option<FontScale> {
        self.font
    }
}

/// Args for the `trip dataset` command.
#[derive(Debug, Parser, Clone)]
pub struct DatasetArgs {
    #[command(subcommand)]
    command: DatasetCommand,
}

impl DatasetArgs {
    pub fn new(command: DatasetCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &DatasetCommand {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum DatasetCommand {
    /// Replace the shown trip with the one in FILE.
    Import {
        /// A JSON trip dataset. Run `trip schema` for its format.
        file: PathBuf,
    },
    /// Print the trip currently shown as JSON.
    Export,
    /// Go back to the built-in sample trip.
    Reset,
}

/// Args for the `trip slideshow` command.
#[derive(Debug, Parser, Clone)]
pub struct SlideshowArgs {
    /// How many image changes to wait for before exiting.
    #[arg(long, default_value_t = 4)]
    ticks: u32,
}

impl SlideshowArgs {
    pub fn new(ticks: u32) -> Self {
        Self { ticks }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

/// Args for the `trip generate` command.
#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    #[arg(long)]
    destination: String,

    /// The first day, e.g. 2025-01-10
    #[arg(long)]
    start_date: String,

    /// The number of days.
    #[arg(long)]
    duration: u32,

    /// Who is travelling, e.g. "2 adults"
    #[arg(long)]
    travelers: String,

    #[arg(long)]
    interests: String,
}

impl GenerateArgs {
    pub fn params(&self) -> TripGenerationParams {
        TripGenerationParams {
            destination: self.destination.clone(),
            start_date: self.start_date.clone(),
            duration: self.duration,
            travelers: self.travelers.clone(),
            interests: self.interests.clone(),
        }
    }
}

fn default_trip_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join(".trip-deck"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --trip-home or TRIP_DECK_HOME instead of relying on the default \
                home directory.",
            );
            PathBuf::from(".trip-deck")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut full = vec!["trip", "--trip-home", "/tmp/trip-home"];
        full.extend_from_slice(args);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_convert_args() {
        let args = parse(&["convert", "--group", "cruise_app", "--from", "HKD", "12.5"]);
        let Command::Convert(convert) = args.command() else {
            panic!("expected convert");
        };
        assert_eq!(convert.group(), CurrencyGroup::CruiseApp);
        assert_eq!(convert.from(), Currency::Hkd);
        assert_eq!(convert.amount(), Some("12.5"));
    }

    #[test]
    fn test_common_args() {
        let args = Args::try_parse_from([
            "trip",
            "--log-level",
            "debug",
            "--trip-home",
            "/x",
            "--plain",
            "overview",
        ])
        .unwrap();
        assert_eq!(args.common().log_level(), LevelFilter::DEBUG);
        assert_eq!(args.common().trip_home().path(), Path::new("/x"));
        assert!(args.common().plain());
        assert!(matches!(args.command(), Command::Overview));
    }

    #[test]
    fn test_prefs_and_prep_args() {
        let args = parse(&["prefs", "--theme", "dark", "--font", "extra"]);
        let Command::Prefs(prefs) = args.command() else {
            panic!("expected prefs");
        };
        assert_eq!(prefs.theme(), Some(Theme::Dark));
        assert_eq!(prefs.font(), Some(FontScale::Extra));

        let args = parse(&["prep", "--toggle", "a", "--toggle", "b"]);
        let Command::Prep(prep) = args.command() else {
            panic!("expected prep");
        };
        assert_eq!(prep.toggle().to_vec(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_bad_font_is_rejected() {
        let result = Args::try_parse_from(["trip", "prefs", "--font", "huge"]);
        assert!(result.is_err());
    }
}
