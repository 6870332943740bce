use chabon_core::Features;
use chabon_protocol::PuzzleDate;
use clap::{Parser, ValueEnum};
use wasm_bindgen::prelude::*;

mod app;
mod board;
mod feed;
mod theme;
mod utils;
mod word_input;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum FeatureArg {
    /// Lock rows with a theme by double-clicking them
    Locking,
    /// Notes field and exclude checkbox on every row
    Notes,
    /// Pick the color of locked rows
    ColorTagging,
}

impl From<FeatureArg> for Features {
    fn from(arg: FeatureArg) -> Self {
        match arg {
            FeatureArg::Locking => Features::LOCKING,
            FeatureArg::Notes => Features::NOTES,
            FeatureArg::ColorTagging => Features::COLOR_TAGGING,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a shuffle seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Load the puzzle of this day (YYYY-MM-DD) instead of today's
    #[arg(short, long)]
    date: Option<PuzzleDate>,

    /// Skip the daily puzzle and type the words in
    #[arg(short, long)]
    manual: bool,

    /// Board features, comma separated [default: locking,color-tagging]
    #[arg(short, long, value_enum, value_delimiter = ',')]
    features: Vec<FeatureArg>,
}

impl Args {
    /// Reads arguments from a location hash such as `#-vv&--seed=abc`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn features(&self) -> Features {
        if self.features.is_empty() {
            Features::default()
        } else {
            self.features
                .iter()
                .copied()
                .map(Features::from)
                .fold(Features::empty(), |acc, feature| acc | feature)
        }
    }

    fn app_props(&self) -> app::AppProps {
        let seed = self
            .seed
            .as_deref()
            .map_or_else(utils::js_random_seed, utils::seed_from_str);
        app::AppProps {
            seed,
            date: self.date,
            manual: self.manual,
            features: self.features(),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, args_error) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = args_error {
        log::error!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<app::App>::with_root_and_props(root, args.app_props()).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_gives_defaults() {
        let args = Args::from_hash("").unwrap();

        assert_eq!(args.seed, None);
        assert_eq!(args.date, None);
        assert!(!args.manual);
        assert_eq!(args.features(), Features::LOCKING | Features::COLOR_TAGGING);
    }

    #[test]
    fn hash_arguments_are_split_on_ampersand() {
        let args =
            Args::from_hash("#-vv&--seed=abc&--date=2024-03-03&--manual&--features=notes,locking")
                .unwrap();

        assert_eq!(args.seed.as_deref(), Some("abc"));
        assert_eq!(args.date, PuzzleDate::from_ymd(2024, 3, 3));
        assert!(args.manual);
        assert_eq!(args.features(), Features::NOTES | Features::LOCKING);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn bad_date_is_an_argument_error() {
        assert!(Args::from_hash("#--date=03/03/2024").is_err());
    }
}
