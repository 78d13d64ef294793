mod scanner;

pub use scanner::StatsCounter;
