pub mod core;
pub mod fees;
pub mod harvest;
pub mod liquidity;
pub mod markets;
pub mod math;
pub mod payments;
pub mod shares;
pub mod valuation;
