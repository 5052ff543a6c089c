use canvasweeper_core::{CellCount, Coord, GameConfig};
use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod render;
mod theme;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cells per side of the square board
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    size: Coord,

    /// Number of mines to place
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_MINES)]
    mines: CellCount,

    /// Color palette
    #[arg(long, value_enum, default_value_t = theme::Theme::Light)]
    theme: theme::Theme,
}

/// Arguments come from the location hash, e.g. `#--size=8&--mines=10&-vv`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
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

    let args = parse_args(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let config = GameConfig::square(args.size, args.mines).expect("Invalid board settings");
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("config: {:?}, seed: {}", config, seed);

    args.theme.apply();

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(
        root,
        game::GameProps {
            config,
            seed,
            palette: args.theme.palette(),
        },
    )
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse_args("").unwrap();

        assert_eq!(args.size, 6);
        assert_eq!(args.mines, 7);
        assert_eq!(args.seed, None);
        assert_eq!(args.theme, theme::Theme::Light);
    }

    #[test]
    fn hash_overrides_settings() {
        let args = parse_args("#--size=9&--mines=10&--seed=42&--theme=dark").unwrap();

        assert_eq!(args.size, 9);
        assert_eq!(args.mines, 10);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.theme, theme::Theme::Dark);
    }

    #[test]
    fn bad_hash_is_an_error() {
        assert!(parse_args("#--size=banana").is_err());
        assert!(parse_args("#--size=300").is_err());
    }
}
