//! Domain types for Icewatch.
//!
//! - [`Hemisphere`]: north (Arctic) or south (Antarctic)
//! - [`ExtentReading`]: a single current-extent observation
//! - [`MonthlyRecord`]: twelve monthly extent/area points for one year
//! - [`StatusSnapshot`]: both hemispheres captured at one instant

mod extent;
mod hemisphere;
mod snapshot;

pub use extent::*;
pub use hemisphere::*;
pub use snapshot::*;
