use serde::Serialize;

use crate::domain::{Candle, CandleType};

/// One candlestick in plot space. `x` is the sequence index, not the
/// timestamp, so calendar gaps (weekends, holidays) take no room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: usize,
    pub y: [f64; 4],
}

impl PlotPoint {
    #[inline]
    pub fn open(&self) -> f64 {
        self.y[0]
    }
    #[inline]
    pub fn high(&self) -> f64 {
        self.y[1]
    }
    #[inline]
    pub fn low(&self) -> f64 {
        self.y[2]
    }
    #[inline]
    pub fn close(&self) -> f64 {
        self.y[3]
    }

    pub fn get_type(&self) -> CandleType {
        CandleType::classify(self.open(), self.close())
    }

    /// (bottom, top) of the candle body
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open(), self.close()),
            CandleType::Bearish => (self.close(), self.open()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub x: usize,
    pub y: f64,
}

/// OHLC series, close-price trend line and category labels, all indexed by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub ohlc: Vec<PlotPoint>,
    pub trend: Vec<TrendPoint>,
    pub categories: Vec<String>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.ohlc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ohlc.is_empty()
    }
}

pub fn build_series(candles: &[Candle]) -> ChartSeries {
    let mut series = ChartSeries {
        ohlc: Vec::with_capacity(candles.len()),
        trend: Vec::with_capacity(candles.len()),
        categories: Vec::with_capacity(candles.len()),
    };

    for (x, c) in candles.iter().enumerate() {
        series.ohlc.push(PlotPoint {
            x,
            y: [c.open_price, c.high_price, c.low_price, c.close_price],
        });
        series.trend.push(TrendPoint {
            x,
            y: c.close_price,
        });
        series.categories.push(c.label.clone());
    }

    series
}

/// (min low, max high) over the finite prices of the series.
pub fn price_bounds(points: &[PlotPoint]) -> Option<(f64, f64)> {
    let (min, max) = points
        .iter()
        .flat_map(|p| p.y)
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min <= max { Some((min, max)) } else { None }
}
