pub mod discrepancy;
pub mod halton;
pub mod primes;
pub mod radical_inverse;
pub mod weyl;

pub use discrepancy::*;
pub use halton::*;
pub use primes::*;
pub use radical_inverse::*;
pub use weyl::*;
