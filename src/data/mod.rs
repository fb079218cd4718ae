//! Plot data: typed series, data frames, named variables and their fitting.

mod fit;
mod frame;
mod gplottable;
mod series;
mod variable;

pub use fit::Polynomial;
pub use frame::{DataFrame, DataValue};
pub use gplottable::GPlottable;
pub use series::Series;
pub use variable::GVariable;
