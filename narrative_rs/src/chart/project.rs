//! Projection of a loaded table through a [`ChartSpec`] into a drawable
//! figure. Columns are validated before any row is aggregated.

use narrative_leptos::types::{
    BarMode, BarSeries, BoxGroup, BoxPlotFigure, ChartFigure, HistogramFigure, HoverPoint,
    PieFigure, PieSlice,
};
use tracing::debug;

use super::spec::{ChartFamily, ChartSpec};
use super::stats::{self, CategoryIndex, QuartileMethod};
use crate::artifact::Table;
use crate::error::{ReportError, Result};

/// Project `table` into the figure described by `spec`.
///
/// `section` is only used to label partition errors.
pub fn project(spec: &ChartSpec, table: &Table, section: usize) -> Result<ChartFigure> {
    table.require(spec.required_columns())?;

    let figure = match &spec.family {
        ChartFamily::Box { notched, quartiles } => {
            ChartFigure::Box(project_box(spec, table, *notched, *quartiles)?)
        }
        ChartFamily::Histogram { bar_mode } => {
            ChartFigure::Histogram(project_histogram(spec, table, *bar_mode)?)
        }
        ChartFamily::Pie {
            hole,
            static_values,
        } => ChartFigure::Pie(project_pie(spec, table, *hole, static_values.as_deref(), section)?),
    };
    Ok(figure)
}

fn field<'a>(field: &'a Option<String>, table: &Table) -> Result<&'a str> {
    field.as_deref().ok_or_else(|| ReportError::MalformedArtifact {
        name: table.name().to_string(),
        reason: "chart spec is missing a required field".into(),
    })
}

fn project_box(
    spec: &ChartSpec,
    table: &Table,
    notched: bool,
    method: QuartileMethod,
) -> Result<BoxPlotFigure> {
    let x = table.column(field(&spec.x, table)?)?;
    let y = table.column(field(&spec.y, table)?)?;
    let hover_cols = spec
        .hover
        .iter()
        .map(|h| table.column(h).map(|idx| (h.clone(), idx)))
        .collect::<Result<Vec<_>>>()?;

    let mut index = CategoryIndex::default();
    let mut points: Vec<Vec<HoverPoint>> = Vec::new();
    for row in 0..table.len() {
        let Some(value) = table.numeric(row, y)? else {
            continue;
        };
        let group = index.intern(table.text(row, x).trim());
        if group == points.len() {
            points.push(Vec::new());
        }
        points[group].push(HoverPoint {
            value,
            hover: hover_cols
                .iter()
                .map(|(name, col)| (name.clone(), table.text(row, *col).to_string()))
                .collect(),
        });
    }

    let mut groups = Vec::with_capacity(index.len());
    for idx in index.axis_order() {
        let group_points = std::mem::take(&mut points[idx]);
        let values: Vec<f64> = group_points.iter().map(|p| p.value).collect();
        let Some(box_stats) = stats::box_stats(&values, method, notched) else {
            continue;
        };
        let outliers = group_points
            .into_iter()
            .filter(|p| stats::is_outlier(&box_stats, p.value))
            .collect();
        groups.push(BoxGroup {
            key: index.keys()[idx].clone(),
            stats: box_stats,
            outliers,
        });
    }

    let keys: Vec<String> = groups.iter().map(|g| g.key.clone()).collect();
    debug!(artifact = table.name(), groups = groups.len(), "projected box plot");

    Ok(BoxPlotFigure {
        title: spec.title.clone(),
        x_title: spec.x_title.clone(),
        y_title: spec.y_title.clone(),
        color: spec.color_at(0),
        notched,
        x_ticks: stats::select_ticks(&keys, spec.max_x_ticks),
        groups,
        width: spec.width,
        height: spec.height,
    })
}

fn project_histogram(
    spec: &ChartSpec,
    table: &Table,
    bar_mode: BarMode,
) -> Result<HistogramFigure> {
    let x = table.column(field(&spec.x, table)?)?;
    let y = spec.y.as_deref().map(|f| table.column(f)).transpose()?;
    let color = spec.color.as_deref().map(|f| table.column(f)).transpose()?;

    let mut categories = CategoryIndex::default();
    let mut series = CategoryIndex::default();
    // (category, series, value) triples in row order
    let mut cells: Vec<(usize, usize, f64)> = Vec::new();
    for row in 0..table.len() {
        let amount = match y {
            Some(col) => match table.numeric(row, col)? {
                Some(v) => v,
                None => continue,
            },
            None => 1.0,
        };
        let cat = categories.intern(table.text(row, x).trim());
        let name = match color {
            Some(col) => table.text(row, col).trim().to_string(),
            None => spec.y.clone().unwrap_or_else(|| "count".into()),
        };
        let ser = series.intern(&name);
        cells.push((cat, ser, amount));
    }

    let order = categories.axis_order();
    let mut position = vec![0; order.len()];
    for (pos, &idx) in order.iter().enumerate() {
        position[idx] = pos;
    }

    let mut totals = vec![vec![0.0; order.len()]; series.len()];
    for (cat, ser, amount) in cells {
        totals[ser][position[cat]] += amount;
    }

    let ordered: Vec<String> = order
        .iter()
        .map(|&idx| categories.keys()[idx].clone())
        .collect();
    let bars = series
        .keys()
        .iter()
        .zip(totals)
        .enumerate()
        .map(|(idx, (name, values))| BarSeries {
            name: name.clone(),
            color: spec.color_at(idx),
            values,
        })
        .collect::<Vec<_>>();

    debug!(
        artifact = table.name(),
        categories = ordered.len(),
        series = bars.len(),
        "projected histogram"
    );

    Ok(HistogramFigure {
        title: spec.title.clone(),
        x_title: spec.x_title.clone(),
        y_title: spec.y_title.clone(),
        legend_title: spec.legend_title.clone(),
        bar_mode,
        x_ticks: stats::select_ticks(&ordered, spec.max_x_ticks),
        categories: ordered,
        series: bars,
        width: spec.width,
        height: spec.height,
    })
}

fn project_pie(
    spec: &ChartSpec,
    table: &Table,
    hole: f64,
    static_values: Option<&[f64]>,
    section: usize,
) -> Result<PieFigure> {
    let label = table.column(field(&spec.label, table)?)?;
    let value = spec.value.as_deref().map(|f| table.column(f)).transpose()?;

    let mut labels = CategoryIndex::default();
    let mut sums: Vec<f64> = Vec::new();
    for row in 0..table.len() {
        let idx = labels.intern(table.text(row, label).trim());
        if idx == sums.len() {
            sums.push(0.0);
        }
        if let Some(col) = value {
            if let Some(v) = table.numeric(row, col)? {
                sums[idx] += v;
            }
        }
    }

    let values = match static_values {
        Some(values) if values.len() != labels.len() => {
            return Err(ReportError::PartitionMismatch {
                section,
                labels: labels.len(),
                values: values.len(),
            });
        }
        Some(values) => values.to_vec(),
        None => sums,
    };

    let slices = labels
        .keys()
        .iter()
        .zip(values)
        .enumerate()
        .map(|(idx, (label, value))| PieSlice {
            label: label.clone(),
            value,
            color: spec.color_at(idx),
        })
        .collect();

    Ok(PieFigure {
        title: spec.title.clone(),
        hole,
        slices,
        width: spec.width,
        height: spec.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::{BoxDirective, HistogramDirective, PieDirective, PieValues};

    fn table(name: &str, csv: &str) -> Table {
        Table::from_reader(name, csv.as_bytes()).expect("csv")
    }

    fn dis_rate() -> Table {
        table(
            "dis_rate",
            "year,tmp_rate,state\n\
             2010,0.41,Alabama\n\
             2009,0.43,Alabama\n\
             2009,0.40,Alaska\n\
             2009,0.45,Arizona\n\
             2009,,Arkansas\n\
             2010,0.38,Alaska\n",
        )
    }

    #[test]
    fn box_groups_by_distinct_year() {
        let spec = ChartSpec::derive(
            &BoxDirective::new("Discharge Rate", "year", "tmp_rate")
                .hover("state")
                .notched()
                .quartiles(QuartileMethod::Exclusive)
                .into(),
        );
        let ChartFigure::Box(fig) = project(&spec, &dis_rate(), 1).expect("project") else {
            panic!("expected a box plot");
        };
        let keys: Vec<&str> = fig.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["2009", "2010"]);
        assert_eq!(fig.groups[0].stats.n, 3);
        assert_eq!(fig.groups[0].stats.median, 0.43);
        assert!(fig.groups[0].stats.notch.is_some());
        assert_eq!(fig.x_ticks, vec!["2009".to_string(), "2010".to_string()]);
    }

    #[test]
    fn box_outliers_carry_hover_fields() {
        let mut csv = String::from("year,tmp_rate,state\n");
        for (i, v) in [0.40, 0.41, 0.42, 0.43, 0.44, 0.45, 0.99].iter().enumerate() {
            csv.push_str(&format!("2012,{v},S{i}\n"));
        }
        let spec = ChartSpec::derive(
            &BoxDirective::new("t", "year", "tmp_rate").hover("state").into(),
        );
        let ChartFigure::Box(fig) = project(&spec, &table("dis_rate", &csv), 1).expect("project")
        else {
            panic!("expected a box plot");
        };
        let outliers = &fig.groups[0].outliers;
        assert_eq!(outliers.len(), 1);
        assert_eq!(outliers[0].hover, vec![("state".to_string(), "S6".to_string())]);
    }

    #[test]
    fn missing_column_fails_before_aggregation() {
        let spec = ChartSpec::derive(
            &BoxDirective::new("Medicaid", "year", "medicaid_use").hover("state").into(),
        );
        let broken = table("ptype_rate", "year,state,rate\n2009,Ohio,not-a-number\n");
        let err = project(&spec, &broken, 2).expect_err("schema");
        assert_eq!(err.missing_column(), Some("medicaid_use"));
    }

    #[test]
    fn stacked_histogram_sums_per_color() {
        let gender = table(
            "gender_agg",
            "DISYR,Gender_Type,count\n\
             2010,Male,7\n\
             2009,Male,10\n\
             2009,Female,4\n\
             2009,Male,1\n",
        );
        let spec = ChartSpec::derive(
            &HistogramDirective::new("Gender", "DISYR")
                .y("count")
                .color_by("Gender_Type")
                .bar_mode(BarMode::Stack)
                .y_title("Count")
                .into(),
        );
        let ChartFigure::Histogram(fig) = project(&spec, &gender, 3).expect("project") else {
            panic!("expected a histogram");
        };
        assert_eq!(fig.categories, ["2009", "2010"]);
        assert_eq!(fig.series[0].name, "Male");
        assert_eq!(fig.series[0].values, vec![11.0, 7.0]);
        assert_eq!(fig.series[1].values, vec![4.0, 0.0]);
        assert_eq!(fig.bar_mode, BarMode::Stack);
        assert_eq!(fig.y_title, "Count");
    }

    #[test]
    fn histogram_without_y_counts_rows() {
        let rows = table("imp", "DISYR,Imp_Year\n2009,2014\n2009,Never\n2009,2014\n");
        let spec = ChartSpec::derive(
            &HistogramDirective::new("Entries", "DISYR").color_by("Imp_Year").into(),
        );
        let ChartFigure::Histogram(fig) = project(&spec, &rows, 1).expect("project") else {
            panic!("expected a histogram");
        };
        assert_eq!(fig.series.len(), 2);
        assert_eq!(fig.series[0].values, vec![2.0]);
        assert_eq!(fig.series[1].name, "Never");
    }

    #[test]
    fn static_pie_requires_matching_partition() {
        let ages = table("age_groups", "AGE_GRP\n21-34\n12-20\n21-34\n35-49\n");
        let spec = ChartSpec::derive(
            &PieDirective::new("Age", "AGE_GRP", PieValues::Static(vec![1.0, 2.0, 3.0, 4.0]))
                .into(),
        );
        match project(&spec, &ages, 9).expect_err("mismatch") {
            ReportError::PartitionMismatch {
                section,
                labels,
                values,
            } => assert_eq!((section, labels, values), (9, 3, 4)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pie_labels_keep_first_appearance() {
        let ages = table("age_groups", "AGE_GRP,n\n21-34,5\n12-20,2\n21-34,1\n");
        let spec = ChartSpec::derive(
            &PieDirective::new("Age", "AGE_GRP", PieValues::Column("n".into()))
                .hole(0.4)
                .colors(["blue", "red"])
                .into(),
        );
        let ChartFigure::Pie(fig) = project(&spec, &ages, 1).expect("project") else {
            panic!("expected a pie");
        };
        let slices: Vec<(&str, f64, &str)> = fig
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.value, s.color.as_str()))
            .collect();
        assert_eq!(slices, [("21-34", 6.0, "blue"), ("12-20", 2.0, "red")]);
        assert_eq!(fig.hole, 0.4);
    }
}
