//! Yard Cat core crate.
//!
//! Paints the page header as a yard whose lighting follows the time of day and
//! lets the visitor nudge the cat sprite with the keyboard. The controller
//! (`yard`) is plain Rust behind the [`Stage`] trait; `dom` is the browser
//! implementation exposed through [`start_yard`].

use wasm_bindgen::prelude::*;

pub mod adjust;
pub mod config;
pub mod dom;
pub mod scene;
pub mod selector;
pub mod style;
pub mod yard;

pub use adjust::{ADJUSTMENTS, AdjustmentRule, AdjustmentTable, Field, Operation, PositionAdjust, SpriteAdjuster};
pub use config::YardConfig;
pub use selector::{ModeSelector, OptionDescriptor};
pub use style::Style;
pub use yard::{Stage, Yard};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Info).ok();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Wire the header, options and keyboard, then paint the scene for the current hour.
#[wasm_bindgen]
pub fn start_yard() -> Result<(), JsValue> {
    dom::wire_on_load(YardConfig::default())
}

/// Full render by style name ("daytime", "evening", "night"). Unknown names are ignored.
#[wasm_bindgen]
pub fn set_style(name: &str) {
    match Style::from_name(name) {
        Some(style) => {
            dom::with_yard(|y| y.render(style));
        }
        None => log::warn!("unknown style '{name}'"),
    }
}

/// Current sprite adjustment as JSON, handy for copying a tuned position.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn sprite_state_json() -> Option<String> {
    dom::with_yard(|y| serde_json::to_string(y.sprite()).ok()).flatten()
}
