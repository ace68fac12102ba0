pub mod host;
pub mod input;
pub mod prober;
pub mod report;
pub mod scanner;
