mod aggregate;
mod compiler;
mod convert;
mod normalize;
mod projection;

pub use aggregate::total_of;
pub use compiler::{compute_output_model, compute_output_model_from_value, NetWorthCompiler};
pub use convert::convert_section;
pub use normalize::{normalize, normalize_currency_code};
pub use projection::{project, project_detailed, Projection, ProjectionPeriod, PROJECTION_PERIODS};
