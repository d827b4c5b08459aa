use serde::Serialize;

/// Display transform applied to a present value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transform {
    /// Round to 2 decimals (prices, ratios)
    Round2,
    /// Multiply by 100, round to 2 decimals, suffix "%"
    Percent,
}

/// One row of the descriptor table: which provider key feeds a field and how it is shown.
/// `transform: None` passes the value through unrounded (counts, text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub source_key: &'static str,
    pub transform: Option<Transform>,
    pub default: &'static str,
}

const fn round2(id: &'static str, source_key: &'static str) -> FieldSpec {
    FieldSpec { id, source_key, transform: Some(Transform::Round2), default: "" }
}

const fn percent(id: &'static str, source_key: &'static str) -> FieldSpec {
    FieldSpec { id, source_key, transform: Some(Transform::Percent), default: "" }
}

const fn raw(id: &'static str, source_key: &'static str) -> FieldSpec {
    FieldSpec { id, source_key, transform: None, default: "" }
}

const fn text(id: &'static str, source_key: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec { id, source_key, transform: None, default }
}

/// Summary fields shown in the grouped tables
pub const SUMMARY_FIELDS: &[FieldSpec] = &[
    round2("price", "regularMarketPrice"),
    round2("previous_close", "previousClose"),
    round2("day_high", "regularMarketDayHigh"),
    round2("day_low", "regularMarketDayLow"),
    round2("52w_high", "fiftyTwoWeekHigh"),
    round2("52w_low", "fiftyTwoWeekLow"),
    percent("52w_change", "52WeekChange"),
    percent("sp500_52w_change", "SandP52WeekChange"),
    round2("ma_50", "fiftyDayAverage"),
    round2("ma_200", "twoHundredDayAverage"),
    raw("market_cap", "marketCap"),
    round2("beta", "beta"),
    round2("pe_ratio", "trailingPE"),
    round2("eps", "trailingEps"),
    round2("peg_ratio", "pegRatio"),
    round2("price_to_sale", "priceToSalesTrailing12Months"),
    round2("price_to_book", "priceToBook"),
    round2("enterprise_value", "enterpriseToRevenue"),
    round2("ebitda", "enterpriseToEbitda"),
    percent("profit_margin", "profitMargins"),
    round2("net_income", "netIncomeToCommon"),
    percent("dividend_yield", "dividendYield"),
    round2("dividend_rate", "dividendRate"),
    percent("payout_ratio", "payoutRatio"),
    round2("forward_eps", "forwardEps"),
    round2("trailing_pe", "trailingPE"),
    round2("forward_pe", "forwardPE"),
    percent("earnings_growth", "earningsQuarterlyGrowth"),
    raw("volume", "regularMarketVolume"),
    raw("avg_vol_3mo", "averageVolume"),
    raw("avg_vol_10day", "averageVolume10days"),
    raw("shares_outstanding", "sharesOutstanding"),
    raw("shares_float", "floatShares"),
    percent("pct_insiders", "heldPercentInsiders"),
    percent("pct_institutions", "heldPercentInstitutions"),
    raw("shares_short", "sharesShort"),
    round2("shares_short_ratio", "shortRatio"),
    percent("short_pct_float", "shortPercentOfFloat"),
    raw("shares_short_pm", "sharesShortPriorMonth"),
];

/// Company header fields
pub const PROFILE_FIELDS: &[FieldSpec] = &[
    text("name", "longName", "N/A"),
    text("country", "country", "N/A"),
    text("sector", "sector", "N/A"),
    text("industry", "industry", "N/A"),
    text("market", "market", "N/A"),
    text("employees", "fullTimeEmployees", "N/A"),
    text("website", "website", "N/A"),
    text("logo_url", "logo_url", "N/A"),
    text("summary", "longBusinessSummary", ""),
];

pub fn summary_field(id: &str) -> Option<&'static FieldSpec> {
    SUMMARY_FIELDS.iter().find(|f| f.id == id)
}
