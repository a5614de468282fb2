//! Basic report generation example.
//!
//! Run with: `cargo run --example basic_report`

use narrative_leptos::{
    render_document,
    types::{
        BarMode, BarSeries, Block, BlockContent, ChartFigure, DocumentMeta, HistogramFigure,
        TextBlock, TextStyle,
    },
};

fn main() {
    let meta = DocumentMeta {
        title: "Example Report".into(),
        generator: "narrative-leptos basic_report example".into(),
    };

    let blocks = vec![
        Block {
            number: 1,
            title: None,
            content: BlockContent::Text(TextBlock {
                style: TextStyle::Header,
                content: "Gender".into(),
            }),
        },
        Block {
            number: 2,
            title: None,
            content: BlockContent::Chart(ChartFigure::Histogram(HistogramFigure {
                title: "Gender Distribution".into(),
                x_title: "DISYR".into(),
                y_title: "Count".into(),
                legend_title: "Gender_Type".into(),
                bar_mode: BarMode::Stack,
                categories: vec!["2009".into(), "2010".into()],
                series: vec![
                    BarSeries {
                        name: "Male".into(),
                        color: "#636efa".into(),
                        values: vec![410.0, 395.0],
                    },
                    BarSeries {
                        name: "Female".into(),
                        color: "#EF553B".into(),
                        values: vec![220.0, 231.0],
                    },
                ],
                x_ticks: vec!["2009".into(), "2010".into()],
                width: 700,
                height: 450,
            })),
        },
    ];

    let html = render_document(&meta, &blocks);

    let output_path = "basic_report.html";
    std::fs::write(output_path, &html).expect("Failed to write report");

    println!("Report written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
