pub mod config;
pub mod logging;

pub mod invoke;
pub mod mode;
pub mod retry;
pub mod timing;
