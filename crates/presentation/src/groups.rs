use dashboard_core::FieldGroup;
use quote_extractor::ExtractedFields;
use serde::Serialize;
use serde_json::Value;

// (field id, row label) in display order
const TECHNICAL: &[(&str, &str)] = &[
    ("price", "Price"),
    ("previous_close", "Previous Close"),
    ("day_high", "Today's High"),
    ("day_low", "Today's Low"),
    ("52w_high", "52 Week High"),
    ("52w_low", "52 Week Low"),
    ("52w_change", "52 Week Change"),
    ("sp500_52w_change", "S&P500 52 Week Change"),
    ("ma_50", "50 Day MA"),
    ("ma_200", "200 Day MA"),
];

const VALUATION: &[(&str, &str)] = &[
    ("market_cap", "Market Cap"),
    ("beta", "Beta"),
    ("pe_ratio", "PE Ratio"),
    ("eps", "EPS"),
    ("peg_ratio", "PEG Ratio"),
    ("price_to_sale", "Price to Sale"),
    ("price_to_book", "Price to Book"),
    ("enterprise_value", "Enterprise Value"),
    ("ebitda", "Enterprise EBITDA"),
];

const FUNDAMENTALS: &[(&str, &str)] = &[
    ("profit_margin", "Profit Margin"),
    ("net_income", "Net Income"),
    ("dividend_yield", "Dividend Yield"),
    ("dividend_rate", "Dividend Rate"),
    ("payout_ratio", "Payout Ratio"),
    ("forward_eps", "Forward EPS"),
    ("trailing_pe", "Trailing PE"),
    ("forward_pe", "Forward PE"),
    ("earnings_growth", "Earnings Growth"),
];

const HOLDINGS: &[(&str, &str)] = &[
    ("volume", "Volume"),
    ("avg_vol_3mo", "Avg Volume (3Mo)"),
    ("avg_vol_10day", "Avg Volume (10Day)"),
    ("shares_outstanding", "Shares Outstanding"),
    ("shares_float", "Shares Float"),
    ("pct_insiders", "% Held by Insiders"),
    ("pct_institutions", "% Held by Institutions"),
    ("shares_short", "Shares Short"),
    ("shares_short_ratio", "Shares Short Ratio"),
    ("short_pct_float", "Short Pct Float"),
    ("shares_short_pm", "Shares Short (PM)"),
];

/// Member fields of a group as (id, label), in display order
pub fn group_members(group: FieldGroup) -> &'static [(&'static str, &'static str)] {
    match group {
        FieldGroup::Technical => TECHNICAL,
        FieldGroup::Valuation => VALUATION,
        FieldGroup::Fundamentals => FUNDAMENTALS,
        FieldGroup::Holdings => HOLDINGS,
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentedField {
    pub key: &'static str,
    pub label: &'static str,
    pub raw_value: Option<Value>,
    pub display_value: String,
    pub group: FieldGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedFields {
    pub technical: Vec<PresentedField>,
    pub valuation: Vec<PresentedField>,
    pub fundamentals: Vec<PresentedField>,
    pub holdings: Vec<PresentedField>,
}

impl GroupedFields {
    pub fn group(&self, group: FieldGroup) -> &[PresentedField] {
        match group {
            FieldGroup::Technical => &self.technical,
            FieldGroup::Valuation => &self.valuation,
            FieldGroup::Fundamentals => &self.fundamentals,
            FieldGroup::Holdings => &self.holdings,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PresentedField> {
        FieldGroup::ALL.into_iter().flat_map(move |g| self.group(g).iter())
    }
}

fn present(fields: &ExtractedFields, group: FieldGroup) -> Vec<PresentedField> {
    group_members(group)
        .iter()
        .map(|&(key, label)| {
            let extracted = fields.get(key);
            PresentedField {
                key,
                label,
                raw_value: extracted.and_then(|f| f.raw_value.clone()),
                display_value: extracted.map(|f| f.display_value.clone()).unwrap_or_default(),
                group,
            }
        })
        .collect()
}

/// Partition extracted fields into the four summary tables
pub fn group_fields(fields: &ExtractedFields) -> GroupedFields {
    GroupedFields {
        technical: present(fields, FieldGroup::Technical),
        valuation: present(fields, FieldGroup::Valuation),
        fundamentals: present(fields, FieldGroup::Fundamentals),
        holdings: present(fields, FieldGroup::Holdings),
    }
}
