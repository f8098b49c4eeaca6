use clap::Parser;
use themeswitch_core::ThemeConfig;
use wasm_bindgen::prelude::*;

pub use dom::*;
pub use media::*;
pub use storage::*;
pub use switch::*;

mod dom;
mod media;
mod storage;
mod switch;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// localStorage key holding the explicit choice
    #[arg(long, default_value = ThemeConfig::DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Attribute set on the document element
    #[arg(long, default_value = ThemeConfig::DEFAULT_ATTR_NAME)]
    attribute: String,

    /// Id of the checkbox switching dark mode
    #[arg(long, default_value = ThemeConfig::DEFAULT_TOGGLE_ID)]
    toggle_id: String,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vv&--toggle-id=themeSwitch`.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn config(&self) -> ThemeConfig {
        ThemeConfig {
            storage_key: self.storage_key.clone(),
            attribute: self.attribute.clone(),
            toggle_id: self.toggle_id.clone(),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let config = match Args::from_hash(&location_hash) {
        Ok(args) => {
            if let Some(log_level) = args.verbose.log_level() {
                init_logger(log_level);
            }
            args.config()
        }
        Err(err) => {
            init_logger(log::Level::Warn);
            log::warn!("ignoring location hash arguments: {}", err);
            ThemeConfig::default()
        }
    };
    log::debug!("config: {:?}", config);

    match ThemeSwitch::install(&config) {
        Ok(switch) => {
            log::debug!("Theme switch started");
            switch.forget();
        }
        Err(err) => log::error!("{}", err),
    }
}

fn init_logger(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        gloo::console::error!(format!("Error initializing logger: {}", err));
    }
}
