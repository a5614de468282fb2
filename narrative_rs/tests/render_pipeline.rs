//! Library-level scenarios for the render pass: ordering, determinism and
//! the fatal failure modes.

mod common;

use common::{Fixture, STATES, yearly_rates};
use narrative::chart::BoxDirective;
use narrative::cli::{OutputFormat, render_output};
use narrative::config::ArtifactCatalog;
use narrative::error::ReportError;
use narrative::medicaid;
use narrative::renderer::ReportRenderer;
use narrative::section::{ReportDefinition, SectionBody};
use narrative::sink::BlockSink;
use narrative_leptos::types::{Block, BlockContent, ChartFigure};
use pretty_assertions::assert_eq;

fn render(catalog: &ArtifactCatalog) -> (BlockSink, Result<(), ReportError>) {
    let report = medicaid::definition().resolve(catalog).expect("resolve");
    let mut sink = BlockSink::new();
    let result = ReportRenderer::new(&report).render(&mut sink).map(|_| ());
    (sink, result)
}

#[test]
fn full_report_renders_in_declaration_order() {
    let fixture = Fixture::new();
    let (sink, result) = render(&fixture.catalog());
    result.expect("render");

    let numbers: Vec<usize> = sink.blocks().iter().map(|b| b.number).collect();
    assert_eq!(numbers, (1..=58).collect::<Vec<_>>());

    let kinds: Vec<&str> = sink.blocks().iter().map(Block::kind).collect();
    let declared: Vec<&str> = medicaid::definition()
        .sections()
        .iter()
        .map(|s| s.kind())
        .collect();
    assert_eq!(kinds, declared);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let fixture = Fixture::new();
    let report = narrative::cli::resolve_report(&fixture.config_path()).expect("resolve");

    let first = render_output(&report, OutputFormat::Html).expect("first render");
    let second = render_output(&report, OutputFormat::Html).expect("second render");
    assert!(first == second, "html output differs between runs");

    let json_a = render_output(&report, OutputFormat::Json).expect("json");
    let json_b = render_output(&report, OutputFormat::Json).expect("json");
    assert_eq!(json_a, json_b);
}

#[test]
fn text_sections_are_emitted_verbatim() {
    let fixture = Fixture::new();
    let (sink, result) = render(&fixture.catalog());
    result.expect("render");

    let definition = medicaid::definition();
    for (section, block) in definition.sections().iter().zip(sink.blocks()) {
        if let (SectionBody::Text(declared), BlockContent::Text(emitted)) =
            (&section.body, &block.content)
        {
            assert_eq!(emitted, declared);
        }
    }
}

#[test]
fn box_plot_groups_each_year_with_capped_ticks() {
    let fixture = Fixture::new();
    let (sink, result) = render(&fixture.catalog());
    result.expect("render");

    let BlockContent::Chart(ChartFigure::Box(figure)) = &sink.blocks()[8].content else {
        panic!("section 9 is the discharge rate box plot");
    };
    let years: Vec<String> = (2009..=2019).map(|y| y.to_string()).collect();
    let keys: Vec<String> = figure.groups.iter().map(|g| g.key.clone()).collect();
    assert_eq!(keys, years);
    assert!(figure.groups.iter().all(|g| g.stats.n == STATES.len()));
    assert!(figure.x_ticks.len() <= 15);
    assert_eq!(figure.color, "#e884d6");
}

#[test]
fn long_year_axis_keeps_at_most_fifteen_ticks() {
    let fixture = Fixture::new();
    let mut csv = String::from("year,rate,state\n");
    for year in 1980..2020 {
        csv.push_str(&format!("{year},0.5,Ohio\n"));
    }
    fixture.write_artifact("dis_rate", csv.as_bytes());

    let report = ReportDefinition::new("ticks")
        .chart(
            "dis_rate",
            BoxDirective::new("Rates", "year", "rate")
                .hover("state")
                .max_x_ticks(Some(15)),
        )
        .resolve(&fixture.catalog())
        .expect("resolve");
    let mut sink = BlockSink::new();
    ReportRenderer::new(&report).render(&mut sink).expect("render");

    let BlockContent::Chart(ChartFigure::Box(figure)) = &sink.blocks()[0].content else {
        panic!("expected a box plot");
    };
    assert_eq!(figure.groups.len(), 40);
    assert!(figure.x_ticks.len() <= 15);
    assert_eq!(figure.x_ticks[0], "1980");
}

#[test]
fn missing_column_is_a_schema_mismatch() {
    let fixture = Fixture::new();
    fixture.write_artifact("ptype_rate", yearly_rates("rate").as_bytes());

    let (sink, result) = render(&fixture.catalog());
    let err = result.expect_err("schema mismatch");

    assert_eq!(err.missing_column(), Some("medicaid_use"));
    assert!(err.to_string().contains("medicaid_use"));
    // sections 1..=10 made it out; the ptype chart (11) did not
    assert_eq!(sink.blocks().len(), 10);
}

#[test]
fn missing_image_stops_the_render() {
    let fixture = Fixture::new();
    fixture.remove_artifact("did_results");
    let path = fixture.artifact_path("did_results");

    let (sink, result) = render(&fixture.catalog());
    match result.expect_err("missing image") {
        ReportError::ArtifactNotFound { name, path: p } => {
            assert_eq!(name, "did_results");
            assert_eq!(p, path);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(sink.blocks().last().map(|b| b.number), Some(42));
    assert!(sink.blocks().iter().all(|b| b.number < 43));
}

#[test]
fn text_before_a_failure_is_still_verbatim() {
    let fixture = Fixture::new();
    fixture.remove_artifact("dis_rate");

    let (sink, result) = render(&fixture.catalog());
    assert!(matches!(result, Err(ReportError::ArtifactNotFound { .. })));

    let definition = medicaid::definition();
    assert_eq!(sink.blocks().len(), 8);
    for (section, block) in definition.sections().iter().zip(sink.blocks()) {
        let (SectionBody::Text(declared), BlockContent::Text(emitted)) =
            (&section.body, &block.content)
        else {
            panic!("only text precedes the first chart");
        };
        assert_eq!(emitted.content, declared.content);
    }
}

#[test]
fn unresolved_artifact_fails_before_rendering() {
    let fixture = Fixture::new();
    let catalog = common::ARTIFACT_FILES
        .iter()
        .filter(|(name, _)| *name != "fe_results")
        .fold(ArtifactCatalog::default(), |c, (name, _)| {
            c.with(*name, fixture.artifact_path(name))
        });

    match medicaid::definition().resolve(&catalog).expect_err("unresolved") {
        ReportError::UnresolvedArtifact { section, name } => {
            assert_eq!(section, 48);
            assert_eq!(name, "fe_results");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn age_partition_must_match_labels() {
    let fixture = Fixture::new();
    fixture.write_artifact("age_groups", b"AGE_GRP\n12-20\n21-34\n35-49\n");

    let (_, result) = render(&fixture.catalog());
    match result.expect_err("partition mismatch") {
        ReportError::PartitionMismatch {
            section,
            labels,
            values,
        } => assert_eq!((section, labels, values), (17, 3, 4)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_measure_is_malformed() {
    let fixture = Fixture::new();
    fixture.write_artifact("gender_agg", b"DISYR,Gender_Type,count\n2009,Male,lots\n");

    let (_, result) = render(&fixture.catalog());
    match result.expect_err("malformed") {
        ReportError::MalformedArtifact { name, reason } => {
            assert_eq!(name, "gender_agg");
            assert!(reason.contains("lots"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_output_round_trips_blocks() {
    let fixture = Fixture::new();
    let report = narrative::cli::resolve_report(&fixture.config_path()).expect("resolve");
    let json = render_output(&report, OutputFormat::Json).expect("json");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let blocks: Vec<Block> =
        serde_json::from_value(value["blocks"].clone()).expect("blocks deserialize");
    assert_eq!(blocks.len(), 58);
    assert_eq!(value["meta"]["title"], medicaid::REPORT_TITLE);

    let BlockContent::Image(image) = &blocks[42].content else {
        panic!("section 43 is the DiD results image");
    };
    assert_eq!(image.bytes, common::JPEG_BYTES);
}

#[test]
fn html_embeds_charts_and_images() {
    let fixture = Fixture::new();
    let report = narrative::cli::resolve_report(&fixture.config_path()).expect("resolve");
    let html = render_output(&report, OutputFormat::Html).expect("html");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("data-family=\"box\"").count(), 4);
    assert_eq!(html.matches("data-family=\"histogram\"").count(), 4);
    assert_eq!(html.matches("data-family=\"pie\"").count(), 1);
    assert_eq!(html.matches("data:image/jpeg;base64,").count(), 4);
    assert!(html.contains("Gender_Type"));
    assert_eq!(html.matches("class=\"block-title\"").count(), 4);
    assert!(html.contains("Difference-in-Differences Results</h3>"));
}
