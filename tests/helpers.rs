#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("fixture should be readable")
}

pub fn load_dataset(name: &str) -> segclean::table::Dataset {
    let table = segclean::csv::reader::read_table(&read_fixture(name), b',')
        .expect("fixture should parse");
    segclean::table::Dataset::from_records(table.headers, &table.records)
}

pub fn load_attributes() -> segclean::metadata::AttributeTable {
    let table = segclean::csv::reader::read_table(&read_fixture("attributes.csv"), b',')
        .expect("fixture should parse");
    segclean::metadata::AttributeTable::from_raw(&table).expect("metadata columns")
}
