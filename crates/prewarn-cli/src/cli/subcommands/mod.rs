mod log;

pub use log::{LogCommands, parse_finite};
