use std::env;
use std::path::{Path, PathBuf};

use flighthop_lib::{resolve_data_dir, Error, FlightData, AIRPORTS_FILENAME};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[test]
fn fixture_files_load() {
    let data = FlightData::load(&fixtures_dir()).expect("fixture loads");

    // The heliport row has no IATA code and is dropped during parsing.
    assert_eq!(data.airports.len(), 10);
    assert_eq!(data.routes.len(), 13);

    let heathrow = data
        .airports
        .iter()
        .find(|airport| airport.iata == "LHR")
        .expect("Heathrow present");
    assert_eq!(heathrow.country, "United Kingdom");
    assert_eq!(heathrow.city, "London");
}

#[test]
fn missing_files_report_data_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let error = FlightData::load(dir.path()).expect_err("nothing to load");
    let Error::DataNotFound { path } = error else {
        panic!("expected data-not-found error");
    };
    assert!(path.ends_with(AIRPORTS_FILENAME));
}

#[test]
fn explicit_target_wins_data_dir_resolution() {
    let dir = resolve_data_dir(Some(Path::new("/tmp/flight-data"))).expect("resolves");
    assert_eq!(dir, PathBuf::from("/tmp/flight-data"));
}

#[test]
fn environment_variable_overrides_default_data_dir() {
    env::set_var("FLIGHTHOP_DATA_DIR", "/tmp/flight-data-env");
    let dir = resolve_data_dir(None).expect("resolves");
    env::remove_var("FLIGHTHOP_DATA_DIR");

    assert_eq!(dir, PathBuf::from("/tmp/flight-data-env"));
}
