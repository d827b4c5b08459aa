use quote_extractor::{CompanyProfile, ExtractedFields};
use serde::Serialize;

/// Company profile attributes a glossary row can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Sector,
    Industry,
    Country,
}

impl ProfileField {
    pub fn value(self, profile: &CompanyProfile) -> &str {
        match self {
            ProfileField::Sector => &profile.sector,
            ProfileField::Industry => &profile.industry,
            ProfileField::Country => &profile.country,
        }
    }
}

/// Where a glossary row takes its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Profile(ProfileField),
    /// A summary field by id
    Field(&'static str),
}

/// One attribute/definition pair. Definitions are from Investopedia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub attribute: &'static str,
    #[serde(skip)]
    pub source: ValueSource,
    pub definition: &'static str,
}

/// Glossary entry with its current value filled in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlossaryRow {
    pub attribute: &'static str,
    pub value: String,
    pub definition: &'static str,
}

const fn entry(attribute: &'static str, source: ValueSource, definition: &'static str) -> GlossaryEntry {
    GlossaryEntry { attribute, source, definition }
}

use ValueSource::{Field, Profile};

const GLOSSARY: &[GlossaryEntry] = &[
    entry(
        "Sector",
        Profile(ProfileField::Sector),
        "A sector is an area of the economy in which businesses share the same or a related product or service.",
    ),
    entry(
        "Industry",
        Profile(ProfileField::Industry),
        "The term industry refers to a series of companies that operate in a similar business sphere, and its categorization is more narrow.",
    ),
    entry(
        "Country",
        Profile(ProfileField::Country),
        "The country the company was originated or does business in.",
    ),
    entry(
        "Market Cap",
        Field("market_cap"),
        "Market capitalization refers to the total dollar market value of a company's outstanding shares of stock. Commonly referred to as \"market cap,\" it is calculated by multiplying the total number of a company's outstanding shares by the current market price of one share.",
    ),
    entry(
        "Beta",
        Field("beta"),
        "Beta is a measure of the volatility, or systematic risk, of a security or portfolio compared to the market as a whole.",
    ),
    entry(
        "P/E Ratio",
        Field("pe_ratio"),
        "The price-to-earnings ratio (P/E ratio) is the ratio for valuing a company that measures its current share price relative to its per-share earnings (EPS). The price-to-earnings ratio is also sometimes known as the price multiple or the earnings multiple.",
    ),
    entry(
        "EPS",
        Field("eps"),
        "Earnings per share (EPS) is calculated as a company's profit divided by the outstanding shares of its common stock. The resulting number serves as an indicator of a company's profitability.",
    ),
    entry(
        "PEG Ratio",
        Field("peg_ratio"),
        "The price/earnings to growth ratio (PEG ratio) is a stock's price-to-earnings (P/E) ratio divided by the growth rate of its earnings for a specified time period. The PEG ratio is used to determine a stock's value while also factoring in the company's expected earnings growth, and it is thought to provide a more complete picture than the more standard P/E ratio.",
    ),
    entry(
        "P/S Ratio",
        Field("price_to_sale"),
        "The price-to-sales (P/S) ratio is a valuation ratio that compares a company's stock price to its revenues. It is an indicator of the value that financial markets have placed on each dollar of a company's sales or revenues.",
    ),
    entry(
        "P/B Ratio",
        Field("price_to_book"),
        "Companies use the price-to-book ratio (P/B ratio) to compare a firm's market capitalization to its book value. It's calculated by dividing the company's stock price per share by its book value per share (BVPS).",
    ),
    entry(
        "EV/R",
        Field("enterprise_value"),
        "The enterprise value-to-revenue multiple (EV/R) is a measure of the value of a stock that compares a company's enterprise value to its revenue. EV/R is one of several fundamental indicators that investors use to determine whether a stock is priced fairly.",
    ),
    entry(
        "EBITDA/EV",
        Field("ebitda"),
        "The EBITDA/EV multiple is a financial valuation ratio that measures a company's return on investment (ROI).",
    ),
    entry(
        "Profit Margin",
        Field("profit_margin"),
        "A metric used to gauge how a company or business makes money. Expressed as percentage, profit margin indicates how many cents of profit has been generated for each dollar of sale.",
    ),
    entry(
        "Net Income",
        Field("net_income"),
        "Net income (NI), also called net earnings, is calculated as sales minus cost of goods sold, selling, general and administrative expenses, operating expenses, depreciation, interest, taxes, and other expenses.",
    ),
    entry(
        "Dividend Yield",
        Field("dividend_yield"),
        "The dividend yield, displayed as a percentage, is the amount of money a company pays shareholders for owning a share of its stock divided by its current stock price.",
    ),
    entry(
        "Dividend Rate",
        Field("dividend_rate"),
        "Dividend rate, expressed as a percentage or yield, is a financial ratio that shows how much a company pays out in dividends each year relative to its stock price.",
    ),
    entry(
        "Payout Ratio",
        Field("payout_ratio"),
        "The payout ratio, also known as the dividend payout ratio, shows the percentage of a company's earnings paid out as dividends to shareholders.",
    ),
    entry(
        "Forward EPS",
        Field("forward_eps"),
        "Forward earnings are an estimate of a company's earnings for upcoming periods. Forward earnings project future revenues, margins, tax rates, and other financial data.",
    ),
    entry(
        "Trailing PE",
        Field("trailing_pe"),
        "Trailing price-to-earnings (P/E) is a relative valuation multiple that is based on the last 12 months of actual earnings. It is calculated by taking the current stock price and dividing it by the trailing earnings per share (EPS) for the past 12 months.",
    ),
    entry(
        "Forward PE",
        Field("forward_pe"),
        "Forward price-to-earnings (forward P/E) is a version of the ratio of price-to-earnings (P/E) that uses forecasted earnings for the P/E calculation.",
    ),
    entry(
        "Earnings Growth",
        Field("earnings_growth"),
        "Growth rates are used to express the annual change in a variable as a percentage. Growth rates can be beneficial in assessing a company's performance and to predict future performance.",
    ),
    entry(
        "Volume",
        Field("volume"),
        "Volume is the number of shares of a security traded between its daily open and close. Trading volume, and changes to volume over the course of time, are important inputs for technical traders.",
    ),
    entry(
        "Shares Outstanding",
        Field("shares_outstanding"),
        "Shares outstanding refer to a company's stock currently held by all its shareholders, including share blocks held by institutional investors and restricted shares owned by the company's officers and insiders.",
    ),
    entry(
        "Shares Float",
        Field("shares_float"),
        "Floating stock refers to the number of shares a company has available to trade in the open market. To calculate a company's floating stock, subtract its restricted stock and closely held shares from its total number of outstanding shares.",
    ),
    entry(
        "% Held by Insiders",
        Field("pct_insiders"),
        "Insiders are a company's officers, directors, relatives, or anyone else with access to key company information before it's made available to the public. By watching the trading activity of corporate insiders and large institutional investors, it's easier to get a sense of a stock's prospects.",
    ),
    entry(
        "% Held by Institutions",
        Field("pct_institutions"),
        "An institutional investor is a company or organization that invests money on behalf of other people. Mutual funds, pensions, and insurance companies are examples.",
    ),
    entry(
        "Shares Short",
        Field("shares_short"),
        "A short, or a short position, is created when a trader sells a security first with the intention of repurchasing it or covering it later at a lower price.",
    ),
    entry(
        "Shares Short Ratio",
        Field("shares_short_ratio"),
        "The short interest ratio is a simple formula that divides the number of shares short in a stock by the stock's average daily trading volume. The short interest ratio is a quick way to see how heavily shorted a stock may be versus its trading volume.",
    ),
    entry(
        "Short Percent to Float",
        Field("short_pct_float"),
        "When a company's short interest is high (above 40%), it frequently means a large portion of investors anticipate the shares will go down in value and are looking to profit from the decline or are using the short as a hedge against a possible decline.",
    ),
    entry(
        "Shares Short Previous Month",
        Field("shares_short_pm"),
        "The number of shares that were shorted in the previous month. This metric can serve as a market sentiment indicator for investors.",
    ),
];

/// Static data dictionary, in display order
pub fn build_glossary() -> &'static [GlossaryEntry] {
    GLOSSARY
}

/// Glossary rows with the Value column filled from the current quote
pub fn glossary_table(fields: &ExtractedFields, profile: &CompanyProfile) -> Vec<GlossaryRow> {
    GLOSSARY
        .iter()
        .map(|entry| {
            let value = match entry.source {
                Profile(field) => field.value(profile),
                Field(id) => fields.display(id),
            };
            GlossaryRow {
                attribute: entry.attribute,
                value: value.to_string(),
                definition: entry.definition,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::QuoteSnapshot;
    use quote_extractor::{extract_fields, extract_profile, summary_field};
    use serde_json::json;

    #[test]
    fn test_glossary_shape() {
        let glossary = build_glossary();
        assert_eq!(glossary.len(), 30);
        assert_eq!(glossary[0].attribute, "Sector");
        assert_eq!(glossary[29].attribute, "Shares Short Previous Month");
        assert!(glossary.iter().all(|e| !e.definition.is_empty()));
    }

    #[test]
    fn test_field_sources_exist() {
        for entry in build_glossary() {
            if let Field(id) = entry.source {
                assert!(summary_field(id).is_some(), "{} has no summary field", entry.attribute);
            }
        }
    }

    #[test]
    fn test_profile_sources_resolve() {
        let snapshot: QuoteSnapshot = serde_json::from_value(json!({
            "sector": "Technology",
            "industry": "Consumer Electronics",
            "country": "United States",
        }))
        .unwrap();
        let profile = extract_profile(&snapshot);
        let rows = glossary_table(&extract_fields(&snapshot), &profile);

        let mut resolved = 0;
        for (entry, row) in build_glossary().iter().zip(&rows) {
            if let Profile(field) = entry.source {
                assert_eq!(row.value, field.value(&profile));
                assert!(!row.value.is_empty() && row.value != "N/A", "{}", entry.attribute);
                resolved += 1;
            }
        }
        assert_eq!(resolved, 3);
    }

    #[test]
    fn test_glossary_table_values() {
        let snapshot: QuoteSnapshot = serde_json::from_value(json!({
            "sector": "Technology",
            "beta": 1.2345,
            "heldPercentInsiders": 0.0007,
        }))
        .unwrap();
        let rows = glossary_table(&extract_fields(&snapshot), &extract_profile(&snapshot));

        assert_eq!(rows.len(), 30);
        let value = |attr: &str| rows.iter().find(|r| r.attribute == attr).unwrap().value.clone();
        assert_eq!(value("Sector"), "Technology");
        assert_eq!(value("Industry"), "N/A");
        assert_eq!(value("Beta"), "1.23");
        assert_eq!(value("% Held by Insiders"), "0.07%");
        assert_eq!(value("Market Cap"), "");
    }

    #[test]
    fn test_serialize_skips_source() {
        let json = serde_json::to_value(build_glossary()[0]).unwrap();
        assert_eq!(json["attribute"], "Sector");
        assert!(json.get("source").is_none());
    }
}
