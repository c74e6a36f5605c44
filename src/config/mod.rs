mod continents;
mod settings;

pub use continents::Continent;
pub use settings::{AppConfig, ReportSettings};
