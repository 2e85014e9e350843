mod manager;
mod persistence;

pub use manager::{LogManager, LogState};
pub use persistence::{load_log, save_log};
