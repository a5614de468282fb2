//! "Effects of Medicaid Expansion to Treatment Completions in SUD
//! Outpatient Programs": the fixed section list and the thirteen logical
//! artifacts it binds.

mod narrative;

use narrative_leptos::types::BarMode;

use crate::chart::{
    BoxDirective, HistogramDirective, PieDirective, PieValues, QuartileMethod, spec::MAX_X_TICKS,
};
use crate::section::ReportDefinition;

pub const REPORT_TITLE: &str =
    "Effects of Medicaid  Expansion to Treatment Completions in SUD Outpatient Programs";

/// Every logical artifact the report binds, in first-use order.
pub const ARTIFACTS: [&str; 13] = [
    "dis_rate",
    "ptype_rate",
    "prior_rate",
    "homeless_rate",
    "age_groups",
    "race_agg",
    "gender_agg",
    "imp_yr_agg",
    "imp_yr_agg_1m",
    "parallel_trends_outp",
    "parallel_trends_dis_rate",
    "did_results",
    "fe_results",
];

/// Discharge counts per age group, aligned with the distinct `AGE_GRP`
/// labels of `age_groups` in first-appearance order.
pub const AGE_GROUP_COUNTS: [f64; 4] = [685724.0, 2449142.0, 3072901.0, 1452794.0];

const AGE_GROUP_COLORS: [&str; 4] = ["blue", "red", "lightblue", "orange"];

/// Notched yearly box plot with state hover, as used for every rate chart.
fn yearly_rate(title: &str, measure: &str, color: &str) -> BoxDirective {
    BoxDirective::new(title, "year", measure)
        .hover("state")
        .color(color)
        .notched()
        .quartiles(QuartileMethod::Exclusive)
        .max_x_ticks(Some(MAX_X_TICKS))
}

fn yearly_counts(title: &str, color_by: &str, mode: BarMode) -> HistogramDirective {
    HistogramDirective::new(title, "DISYR")
        .y("count")
        .color_by(color_by)
        .bar_mode(mode)
        .y_title("Count")
}

/// The complete report, in display order.
pub fn definition() -> ReportDefinition {
    ReportDefinition::new(REPORT_TITLE)
        .heading(REPORT_TITLE)
        .prose(narrative::INTRO)
        .header("Overview")
        .prose(narrative::OVERVIEW)
        .header("Dataset")
        .prose(narrative::DATASET)
        .header("Exploratory Data Analysis")
        .prose(narrative::EDA_DISCHARGE_RATES)
        .chart(
            "dis_rate",
            yearly_rate("Discharge Rate Between 2009 - 2019", "tmp_rate", "#e884d6"),
        )
        .prose(narrative::MEDICAID_PAYMENT)
        .chart(
            "ptype_rate",
            yearly_rate("Medicaid as Primary Payment Souce", "medicaid_use", "#01661e"),
        )
        .prose(narrative::PRIOR_TREATMENT)
        .chart(
            "prior_rate",
            yearly_rate("Prior Treatment Attendance", "discharge_rate", "#b83209"),
        )
        .prose(narrative::HOMELESSNESS)
        .chart(
            "homeless_rate",
            yearly_rate(
                "Homeless Rate per Year during Admission",
                "homeless_rate",
                "#FF7F0E",
            ),
        )
        .prose(narrative::AGE)
        .chart(
            "age_groups",
            PieDirective::new(
                "Age Distribution",
                "AGE_GRP",
                PieValues::Static(AGE_GROUP_COUNTS.to_vec()),
            )
            .hole(0.4)
            .colors(AGE_GROUP_COLORS),
        )
        .prose(narrative::RACE)
        .chart(
            "race_agg",
            yearly_counts("Race Categories Among PiRs", "Race_Categ", BarMode::Group),
        )
        .prose(narrative::GENDER)
        .chart(
            "gender_agg",
            yearly_counts("Gender Distribution Among PiRs", "Gender_Type", BarMode::Stack),
        )
        .header("Trade Offs with Data")
        .prose(narrative::TRADE_OFFS)
        .chart(
            "imp_yr_agg",
            yearly_counts(
                "Entries by Implementation Year for the 7M Set",
                "Imp_Year",
                BarMode::Group,
            )
            .size(700, 700),
        )
        .prose(narrative::ONE_MILLION_SET)
        .chart(
            "imp_yr_agg_1m",
            yearly_counts(
                "Entries by Implementation Year for the 1M Set",
                "Imp_Year",
                BarMode::Group,
            )
            .size(700, 700),
        )
        .header("Methodology")
        .prose(narrative::METHODOLOGY)
        .latex(narrative::DID_FORM)
        .latex(narrative::DID_TERMS)
        .prose(narrative::PARALLEL_TREND)
        .image("parallel_trends_outp", None)
        .titled("Parallel Trends: Average Discharge Status, 7M Set")
        .prose(narrative::PARALLEL_TREND_7M)
        .image("parallel_trends_dis_rate", None)
        .titled("Parallel Trends: Average Discharge Status, 1M Set")
        .prose(narrative::PARALLEL_TREND_1M)
        .subheader("Two-way Fixed Effects Model")
        .prose(narrative::TWFE_INTRO)
        .latex(narrative::TWFE_FORM)
        .header("Models and Results")
        .prose(narrative::MODELS_INTRO)
        .code("python", narrative::DD_V)
        .code("python", narrative::DD_RT)
        .image("did_results", None)
        .titled("Difference-in-Differences Results")
        .prose(narrative::DID_ANALYSIS)
        .header("Two-Way Fixed Effects")
        .code("python", narrative::FE_V)
        .code("python", narrative::FE_RT)
        .image("fe_results", None)
        .titled("Two-Way Fixed Effects Results")
        .prose(narrative::FE_ANALYSIS)
        .header("Analysis")
        .prose(narrative::ANALYSIS)
        .subheader("Alternative Implementation of FE Model")
        .code("python", narrative::PANEL_OLS)
        .prose(narrative::PANEL_OLS_RESULTS)
        .header("Discussion")
        .prose(narrative::DISCUSSION)
        .header("Implication")
        .prose(narrative::IMPLICATION)
}
