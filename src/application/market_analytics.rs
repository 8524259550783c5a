//! Market analytics over a suburb's house-price history.
//!
//! Everything here is a pure function of the raw market payload. Two
//! different volatility threshold sets are in play: one feeds the stability
//! part of the investment score, the other picks the reported bucket. They
//! are not meant to agree.

use crate::application::canonicalize::from_canonical;
use crate::domain::entities::market_trends::{
    MarketAnalytics, MarketTrends, PriceGrowth, PricePoint, RegionComparison, RegionalComparison,
    RegionalStatus, Trend, VolatilityBucket,
};
use crate::domain::values::payload::{array_field, f64_field, flatten_results, round_to, str_field};
use chrono::{Duration, NaiveDate};
use serde_json::Value;

const ONE_YEAR_DAYS: i64 = 365;
const FIVE_YEAR_DAYS: i64 = 1825;
const TREND_WINDOW: usize = 6;
const TREND_THRESHOLD: f64 = 0.02;
const MAX_GROWTH_RATIO: f64 = 3.0;

/// Canonical market-trends for either payload shape. Records that already
/// carry `priceHistory` are taken as stored.
pub fn market_trends(payload: &Value) -> MarketTrends {
    if payload.get("priceHistory").is_some() {
        return from_canonical("market-trends", payload);
    }
    build_market_trends(payload)
}

/// Builds the canonical market-trends record from a raw `/suburb/market`
/// payload.
pub fn build_market_trends(payload: &Value) -> MarketTrends {
    let series = extract_price_series(payload);
    if series.is_empty() {
        return MarketTrends::default();
    }

    let (current_price, price_growth) = current_metrics(&series);
    let regional_comparison = regional_comparison(&series);
    let (investment_score, analytics) = investment_analysis(&series, &regional_comparison);

    MarketTrends {
        price_history: series,
        rent_history: vec![],
        current_price,
        price_growth,
        regional_comparison,
        investment_score,
        analytics,
        ..MarketTrends::default()
    }
}

/// House sell-price points, one per date (first record wins), ascending by
/// date.
pub fn extract_price_series(payload: &Value) -> Vec<PricePoint> {
    let mut series: Vec<PricePoint> = Vec::new();

    for record in flatten_results(array_field(payload, "results")) {
        if str_field(record, "metric").as_deref() != Some("sell_price")
            || str_field(record, "property_type").as_deref() != Some("house")
        {
            continue;
        }
        let date = str_field(record, "date").unwrap_or_default();
        if date.is_empty() || series.iter().any(|p| p.date == date) {
            continue;
        }
        series.push(PricePoint {
            date,
            suburb_value: f64_field(record, "value"),
            region_value_cr: region_value(record, "cr"),
            region_value_sa3: region_value(record, "sa3"),
        });
    }

    series.sort_by(|a, b| a.date.cmp(&b.date));
    series
}

fn region_value(record: &Value, region: &str) -> f64 {
    match record.get(region) {
        Some(nested @ Value::Object(_)) => f64_field(nested, "value"),
        Some(_) => f64_field(record, region),
        None => 0.0,
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.get(..10)?, "%Y-%m-%d").ok()
}

/// Latest price (truncated) and growth over one year, five years and the
/// whole series. Growth is taken on the untruncated price.
pub fn current_metrics(series: &[PricePoint]) -> (i64, PriceGrowth) {
    let Some(last) = series.last() else {
        return (0, PriceGrowth::default());
    };
    let current = last.suburb_value;
    let current_date = parse_date(&last.date);

    let baseline = |days: i64| -> f64 {
        current_date
            .and_then(|today| {
                let cutoff = today - Duration::days(days);
                series.iter().find(|p| {
                    p.suburb_value > 0.0 && parse_date(&p.date).is_some_and(|d| d >= cutoff)
                })
            })
            .map_or(current, |p| p.suburb_value)
    };
    let first = series[0].suburb_value;
    let total_base = if first > 0.0 { first } else { current };

    let growth = PriceGrowth {
        one_year: growth_pct(current, baseline(ONE_YEAR_DAYS)),
        five_year: growth_pct(current, baseline(FIVE_YEAR_DAYS)),
        total: growth_pct(current, total_base),
    };
    (current as i64, growth)
}

fn growth_pct(current: f64, base: f64) -> f64 {
    if base <= 0.0 {
        return 0.0;
    }
    round_to((current - base) / base * 100.0, 2)
}

/// Latest suburb price against the CR and SA3 benchmarks on the same date.
pub fn regional_comparison(series: &[PricePoint]) -> RegionalComparison {
    let Some(latest) = series.last() else {
        return RegionalComparison::default();
    };
    RegionalComparison {
        cr: compare(latest.suburb_value, latest.region_value_cr),
        sa3: compare(latest.suburb_value, latest.region_value_sa3),
    }
}

fn compare(suburb: f64, region: f64) -> RegionComparison {
    let difference = if region > 0.0 {
        round_to((suburb - region) / region * 100.0, 1)
    } else {
        0.0
    };
    RegionComparison {
        price: region as i64,
        difference,
        status: if difference < 0.0 {
            RegionalStatus::Below
        } else {
            RegionalStatus::Above
        },
    }
}

/// Coefficient of variation (population standard deviation over mean) of
/// the positive values. Zero for fewer than two values or a zero mean.
pub fn volatility(values: &[f64]) -> f64 {
    let positive: Vec<f64> = values.iter().copied().filter(|v| *v > 0.0).collect();
    if positive.len() < 2 {
        return 0.0;
    }
    let n = positive.len() as f64;
    let mean = positive.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return 0.0;
    }
    let variance = positive.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt() / mean
}

/// Direction over the last six points: first vs last positive value, with a
/// ±2% band counted as stable.
pub fn detect_trend(series: &[PricePoint]) -> Trend {
    let window = &series[series.len().saturating_sub(TREND_WINDOW)..];
    let values: Vec<f64> = window
        .iter()
        .map(|p| p.suburb_value)
        .filter(|v| *v > 0.0)
        .collect();

    if values.len() < 2 {
        return Trend::Stable;
    }
    let (first, last) = (values[0], values[values.len() - 1]);

    let change = (last - first) / first;
    if change > TREND_THRESHOLD {
        Trend::Rising
    } else if change < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Investment score in [0, 10] plus the analytics bundle.
pub fn investment_analysis(
    series: &[PricePoint],
    regional: &RegionalComparison,
) -> (f64, MarketAnalytics) {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return (0.0, MarketAnalytics::default());
    };

    let ratio = if first.suburb_value > 0.0 {
        last.suburb_value / first.suburb_value
    } else {
        1.0
    };
    let cr_diff = regional.cr.difference;
    let values: Vec<f64> = series.iter().map(|p| p.suburb_value).collect();
    let vol = volatility(&values);
    let trend = detect_trend(series);

    let growth_score = ratio.min(MAX_GROWTH_RATIO) * 3.33;
    let score = round_to(0.4 * growth_score + 0.3 * value_score(cr_diff) + 0.3 * stability_score(vol), 1)
        .clamp(0.0, 10.0);

    let analytics = MarketAnalytics {
        volatility: volatility_bucket(vol),
        trend,
        insights: insights(cr_diff, trend, vol, ratio),
    };
    (score, analytics)
}

/// Sub-score for price against the CR benchmark; cheaper scores higher.
fn value_score(cr_diff: f64) -> f64 {
    match cr_diff {
        d if d < -10.0 => 10.0,
        d if d < -5.0 => 8.0,
        d if d < 0.0 => 6.0,
        _ => 4.0,
    }
}

fn stability_score(vol: f64) -> f64 {
    if vol < 0.10 {
        10.0
    } else if vol < 0.15 {
        7.0
    } else {
        5.0
    }
}

fn volatility_bucket(vol: f64) -> VolatilityBucket {
    if vol < 0.15 {
        VolatilityBucket::Low
    } else if vol < 0.25 {
        VolatilityBucket::Medium
    } else {
        VolatilityBucket::High
    }
}

fn insights(cr_diff: f64, trend: Trend, vol: f64, ratio: f64) -> Vec<String> {
    let mut out = Vec::new();

    if cr_diff < -10.0 {
        out.push(format!("Excellent value - {:.1}% below regional average", cr_diff.abs()));
    } else if cr_diff < -5.0 {
        out.push(format!("Good value - {:.1}% below regional average", cr_diff.abs()));
    }

    match trend {
        Trend::Rising => out.push("Positive price momentum in recent months".to_string()),
        Trend::Declining => out.push("Price declining in recent months".to_string()),
        Trend::Stable => {}
    }

    if vol < 0.10 {
        out.push("Stable market with low volatility".to_string());
    } else if vol > 0.20 {
        out.push("High price volatility - higher risk".to_string());
    }

    if ratio > 2.0 {
        out.push(format!("Strong long-term growth of {:.0}%", (ratio - 1.0) * 100.0));
    }

    out
}
