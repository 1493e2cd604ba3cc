//! Theme orchestration on top of the sky resolver.
//!
//! [`SkyTheme`] holds the observable state (the user's [`ThemeMode`] and the
//! current [`ResolvedTheme`]), persists the mode through the host's storage
//! and mirrors it onto the host's document. [`SkyRefresher`] recomputes the
//! sky on a timer.
//!
//! Every side effect goes through a [`Host`] capability; with
//! [`Host::headless`] they all become no-ops.
//!
//! [`ThemeMode`]: skyglow_common::ThemeMode
//! [`ResolvedTheme`]: skyglow_sky::ResolvedTheme
//! [`Host`]: skyglow_host::Host
//! [`Host::headless`]: skyglow_host::Host::headless

pub mod apply;
pub mod clock;
pub mod preference;
pub mod refresh;
pub mod state;

pub use apply::{apply_theme, BACKGROUND_PROPERTY, DARK_CLASS};
pub use clock::{Clock, FixedClock, LocalClock};
pub use preference::{load_theme_mode, save_theme_mode, DEFAULT_STORAGE_KEY};
pub use refresh::{SkyRefresher, DEFAULT_REFRESH_INTERVAL};
pub use state::SkyTheme;
