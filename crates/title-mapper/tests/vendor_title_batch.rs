use std::path::PathBuf;
use title_mapper::titles::{
    normalize_csv, normalize_csv_file, AliasMap, BatchOptions, BatchSummary, NameNormalizer,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn vendor_column(output: &[u8]) -> Vec<String> {
    let mut reader = csv::Reader::from_reader(output);
    let index = reader
        .headers()
        .expect("headers")
        .iter()
        .position(|header| header == "Vendor")
        .expect("vendor column");
    reader
        .records()
        .map(|record| record.expect("record")[index].to_string())
        .collect()
}

#[test]
fn default_aliases_normalize_vendor_export() {
    let data = include_bytes!("fixtures/vendor_titles.csv");
    let mut output = Vec::new();

    let summary = normalize_csv(
        &NameNormalizer::default(),
        &data[..],
        &mut output,
        &BatchOptions::in_place("Vendor"),
    )
    .expect("batch succeeds");

    assert_eq!(
        summary,
        BatchSummary {
            rows: 10,
            matched: 9,
            unchanged: 1
        }
    );
    assert_eq!(
        vendor_column(&output),
        vec![
            "Saama Technologies",
            "Saama Technologies",
            "Saama Technologies",
            "Takeda Pharmaceutical",
            "Takeda Pharmaceutical",
            "Takeda Pharmaceutical",
            "AstraZeneca",
            "AstraZeneca",
            "AstraZeneca",
            "Globex Corporation",
        ]
    );
}

#[test]
fn csv_and_json_alias_files_load_the_same_map() {
    let from_csv = AliasMap::from_path(fixture("custom_aliases.csv")).expect("csv aliases");
    let from_json = AliasMap::from_path(fixture("custom_aliases.json")).expect("json aliases");

    assert_eq!(from_csv, from_json);
    assert_eq!(from_csv.len(), 4);
}

#[test]
fn custom_aliases_rewrite_file_to_file() {
    let aliases = AliasMap::from_path(fixture("custom_aliases.json")).expect("aliases load");
    let normalizer = NameNormalizer::new(aliases);
    let output_path = std::env::temp_dir().join(format!(
        "title-mapper-batch-{}.csv",
        std::process::id()
    ));

    let summary = normalize_csv_file(
        &normalizer,
        fixture("vendor_titles.csv"),
        &output_path,
        &BatchOptions::appending("Vendor", "Canonical Vendor"),
    )
    .expect("batch succeeds");
    assert_eq!(summary.matched, 9);

    let written = std::fs::read(&output_path).expect("output written");
    std::fs::remove_file(&output_path).ok();

    let mut reader = csv::Reader::from_reader(&written[..]);
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Invoice ID", "Vendor", "Amount", "Canonical Vendor"]
    );

    let canonical: Vec<String> = reader
        .records()
        .map(|record| record.expect("record")[3].to_string())
        .collect();
    assert_eq!(canonical[0], "Saama Tech");
    assert_eq!(canonical[4], "Takeda Pharma");
    assert_eq!(canonical[8], "AstraZeneca Inc.");
    assert_eq!(canonical[9], "Globex Corporation");
}

#[test]
fn normalize_list_matches_per_title_results() {
    let normalizer = NameNormalizer::default();
    let titles = [
        "Equipment ONLY - Saama Technologies",
        "*** DO NOT USE *** Takeda Pharmaceutical",
        "",
        "no match here",
    ];

    let normalized = normalizer.normalize_list(&titles);
    assert_eq!(normalized.len(), titles.len());
    for (title, output) in titles.iter().zip(&normalized) {
        assert_eq!(&normalizer.normalize(title), output);
    }
}
