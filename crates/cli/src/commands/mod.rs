mod fetch_distribution;
mod generate;

pub use fetch_distribution::FetchDistributionArgs;
pub use fetch_distribution::handle_fetch_distribution;
pub use generate::GenerateArgs;
pub use generate::handle_generate;
