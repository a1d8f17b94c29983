mod builder;
mod provider;
pub mod providers;

pub use builder::build_rate_provider;
pub use provider::RateProvider;
pub use providers::StaticRateProvider;
