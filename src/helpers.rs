pub mod chart;
pub mod converters;
