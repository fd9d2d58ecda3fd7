pub mod appearance;
pub mod clock;
pub mod config;
pub mod cycle;
pub mod error;
pub mod interaction;
pub mod model;
pub mod state;
pub mod suggest;
pub mod view;
pub mod weather;

pub use config::SkycastConfig;
pub use error::{Result, SkycastError};
pub use state::{Msg, WidgetState};
pub use view::DashboardView;
