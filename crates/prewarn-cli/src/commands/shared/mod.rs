pub mod forecast;
pub mod limit;
