pub mod categories;
pub mod dashboard;
pub mod dispatch;
pub mod log;
pub mod predict;
pub mod prompt;
pub mod schema;
pub mod shared;
