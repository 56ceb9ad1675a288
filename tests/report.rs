use table_analyzer::ingestion::{load_csv_from_path, LoadOptions};
use table_analyzer::report::{honey_report, ReportSummary};
use table_analyzer::types::Table;

fn honey_fixture() -> Table {
    let opts = LoadOptions {
        categorical_columns: vec!["state".to_string()],
        ..Default::default()
    };
    load_csv_from_path("tests/fixtures/honey.csv", &opts).unwrap()
}

#[test]
fn summary_over_fixture() {
    let summary = ReportSummary::compute(&honey_fixture()).unwrap();

    let stats = summary.production_stats.unwrap();
    assert_eq!(stats.min, 7_000_000.0);
    assert_eq!(stats.max, 27_000_000.0);

    assert_eq!(summary.records_in_2000, Some(3));
    assert_eq!(summary.high_production_records, Some(2));

    // CA has the highest mean production.
    assert_eq!(summary.top_states_by_mean_production[0].0, "CA");
    assert_eq!(summary.top_states_by_mean_production[0].1, 24_775_000.0);

    assert_eq!(summary.top_2012_producer, Some(("CA".to_string(), 22_550_000.0)));
    assert_eq!(summary.lowest_producer, Some(("TX".to_string(), 7_000_000.0)));

    assert_eq!(
        summary.annual_production,
        vec![(2000.0, Some(43_750_000.0)), (2012.0, Some(54_050_000.0))]
    );
}

#[test]
fn report_text_contains_each_section() {
    let mut buf = Vec::new();
    honey_report(&honey_fixture(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    for heading in [
        "FIRST FEW ROWS",
        "SECTION 1: CALCULATING STATISTICS",
        "SECTION 2: FILTERING DATA",
        "SECTION 3: GROUPING AND AGGREGATING DATA",
        "SECTION 4: SORTING DATA",
        "SECTION 5: COUNTING VALUES",
        "SECTION 6: ANSWERING REAL QUESTIONS",
    ] {
        assert!(text.contains(heading), "missing heading: {heading}");
    }

    // Year-2000 filter section shows both the count and a preview of matching rows.
    let start = text.find("Records from year 2000:").unwrap();
    let end = text.find("High production years").unwrap();
    let section = &text[start..end];
    assert!(section.contains("Found 3 records"));
    assert!(section.contains("FL"));

    assert!(text.contains("Answer: CA"));
    assert!(text.contains("Production: 22,550,000 pounds"));
    assert!(text.contains("Answer: TX"));
    assert!(text.contains("Production: 7,000,000 pounds"));
}

#[test]
fn json_summary_round_trips_through_serde() {
    let summary = ReportSummary::compute(&honey_fixture()).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["records_in_2000"], serde_json::json!(3));
    assert_eq!(
        json["top_2012_producer"],
        serde_json::json!(["CA", 22_550_000.0])
    );
}
