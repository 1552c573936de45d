pub use super::base::*;
pub use super::error::*;
pub use super::lowdiscrepancy::*;
pub use super::rng::*;
pub use super::sequence::*;
