pub mod error;
pub mod loader;
pub mod model;
pub mod testing;

mod confidence;
mod seasonality;
mod trend;

pub use error::{ForecastError, Result};
pub use loader::{load_model, parse_model};
pub use model::{ForecastModel, TemperatureModel};
