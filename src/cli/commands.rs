pub mod inspect;
pub mod predict;
pub mod serve;

pub use inspect::inspect_model;
pub use predict::predict_offline;
pub use serve::serve;
