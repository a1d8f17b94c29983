#[cfg(feature = "http")]
pub mod frankfurter;
#[cfg(feature = "http")]
pub mod sandbox;
pub mod static_table;

#[cfg(feature = "http")]
pub use frankfurter::FrankfurterRateProvider;
#[cfg(feature = "http")]
pub use sandbox::SandboxRateProvider;
pub use static_table::StaticRateProvider;
