use chrono::NaiveDate;
use dashboard_core::{HistoricalBar, HistoricalSeries};
use serde::Serialize;

/// Default size of the recent-rows table
pub const RECENT_ROWS: usize = 7;

/// Column-oriented view of a price series, one entry per bar.
/// Columns are only built by `prepare_series_for_charts` and always share a length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    dates: Vec<NaiveDate>,
    years: Vec<i32>,
    opens: Vec<f64>,
    highs: Vec<f64>,
    lows: Vec<f64>,
    closes: Vec<f64>,
    volumes: Vec<u64>,
}

/// One bar with its year and candle direction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub date: NaiveDate,
    pub year: i32,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    /// open <= close
    pub rising: bool,
}

impl From<&HistoricalBar> for ChartRow {
    fn from(bar: &HistoricalBar) -> Self {
        Self {
            date: bar.date,
            year: bar.year(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            rising: bar.open <= bar.close,
        }
    }
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn opens(&self) -> &[f64] {
        &self.opens
    }

    pub fn highs(&self) -> &[f64] {
        &self.highs
    }

    pub fn lows(&self) -> &[f64] {
        &self.lows
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn volumes(&self) -> &[u64] {
        &self.volumes
    }

    pub fn rows(&self) -> Vec<ChartRow> {
        self.dates
            .iter()
            .zip(&self.years)
            .zip(self.opens.iter().zip(&self.highs))
            .zip(self.lows.iter().zip(&self.closes))
            .zip(&self.volumes)
            .map(|((((date, year), (open, high)), (low, close)), volume)| ChartRow {
                date: *date,
                year: *year,
                open: *open,
                high: *high,
                low: *low,
                close: *close,
                volume: *volume,
                rising: open <= close,
            })
            .collect()
    }

    /// Distinct years in first-seen order
    pub fn years_present(&self) -> Vec<i32> {
        let mut years: Vec<i32> = Vec::new();
        for year in &self.years {
            if !years.contains(year) {
                years.push(*year);
            }
        }
        years
    }
}

/// Split a series into chart columns and tag each row with its calendar year.
/// Row count and order are preserved; nothing is resampled or filled.
pub fn prepare_series_for_charts(series: &HistoricalSeries) -> ChartSeries {
    let mut chart = ChartSeries::default();
    for bar in series {
        chart.dates.push(bar.date);
        chart.years.push(bar.year());
        chart.opens.push(bar.open);
        chart.highs.push(bar.high);
        chart.lows.push(bar.low);
        chart.closes.push(bar.close);
        chart.volumes.push(bar.volume);
    }
    chart
}

/// Last `n` bars in date order
pub fn recent_rows(series: &HistoricalSeries, n: usize) -> Vec<ChartRow> {
    let skip = series.len().saturating_sub(n);
    series.iter().skip(skip).map(ChartRow::from).collect()
}
