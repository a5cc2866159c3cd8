use enquete_import::{ParsedSurvey, parse};

/// An English product-feedback survey with explicit sections.
///
/// Demonstrates the full grammar: a document description line, two titled
/// sections with a section description, and all four question kinds.
pub const PRODUCT_FEEDBACK: &str = "\
# Product Feedback Survey

Tell us how the new release is working for you.

# General

## A few quick questions about your overall experience

### How often do you use the product?
□ Daily
□ Weekly
□ Rarely

#### Which areas need improvement?
□ Performance
□ Documentation
□ Pricing
□ その他

# Priorities

$$$1-3 Rank the three improvements that matter most to you
□ Faster sync
□ Better search
□ Dark mode
□ Offline support

##### Anything else we should know?
";

/// Parsed form of [`PRODUCT_FEEDBACK`].
pub fn product_feedback() -> ParsedSurvey {
    parse(PRODUCT_FEEDBACK)
}
