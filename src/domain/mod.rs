// Domain types and value objects
mod candle;

// Re-export commonly used types to the world
pub use candle::{Candle, CandleType, OhlcRecord, RawTime};
