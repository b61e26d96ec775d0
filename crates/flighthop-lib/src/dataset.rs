//! Flight data records and CSV loading.
//!
//! This module handles loading airport and route records from CSV files and
//! resolving the directory those files live in.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Filename for the airport table inside a data directory.
pub const AIRPORTS_FILENAME: &str = "airports.csv";

/// Filename for the route table inside a data directory.
pub const ROUTES_FILENAME: &str = "routes.csv";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FLIGHTHOP_DATA_DIR";

/// Raw airport row from the airport table.
///
/// Only the country and IATA code feed the route graph; the city is kept so
/// callers can render friendlier airport listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    pub country: String,
    pub city: String,
    pub iata: String,
}

/// Raw flight row from the route table, identified by airport IATA codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub source: String,
    pub destination: String,
}

/// Parsed flight data ready for graph construction.
#[derive(Debug, Clone, Default)]
pub struct FlightData {
    pub airports: Vec<AirportRecord>,
    pub routes: Vec<RouteRecord>,
}

impl FlightData {
    /// Load `airports.csv` and `routes.csv` from a data directory.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::from_files(&dir.join(AIRPORTS_FILENAME), &dir.join(ROUTES_FILENAME))
    }

    /// Load flight data from explicit file paths.
    pub fn from_files(airports: &Path, routes: &Path) -> Result<Self> {
        for path in [airports, routes] {
            if !path.exists() {
                return Err(Error::DataNotFound {
                    path: path.to_path_buf(),
                });
            }
        }

        Self::from_readers(fs::File::open(airports)?, fs::File::open(routes)?)
    }

    /// Load flight data from readers (e.g. files or in-memory buffers).
    pub fn from_readers<A: Read, R: Read>(airports: A, routes: R) -> Result<Self> {
        Ok(Self {
            airports: read_airports(airports)?,
            routes: read_routes(routes)?,
        })
    }
}

/// Parse airport records from CSV.
///
/// Columns are located by normalized header name, so OpenFlights-style files
/// with extra columns load unchanged. Rows missing a country or IATA code are
/// skipped; they can never resolve a route endpoint.
pub fn read_airports<R: Read>(reader: R) -> Result<Vec<AirportRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let synonyms: &[(&'static str, &[&'static str])] = &[
        ("country", &["country"]),
        ("city", &["city"]),
        ("iata", &["iata", "iata code", "iata_code", "airport code"]),
    ];
    let columns = locate_columns(AIRPORTS_FILENAME, &headers, synonyms, &["country", "iata"])?;

    let mut airports = Vec::new();
    let mut skipped_rows = 0usize;
    for result in csv_reader.records() {
        let record = result?;
        let country = field(&record, &columns, "country");
        let iata = field(&record, &columns, "iata");
        if country.is_empty() || iata.is_empty() {
            skipped_rows += 1;
            continue;
        }
        airports.push(AirportRecord {
            country,
            city: field(&record, &columns, "city"),
            iata,
        });
    }

    if skipped_rows > 0 {
        debug!(skipped_rows, "skipped airport rows missing country or IATA");
    }

    Ok(airports)
}

/// Parse route records from CSV.
///
/// Rows missing either endpoint code are skipped.
pub fn read_routes<R: Read>(reader: R) -> Result<Vec<RouteRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let synonyms: &[(&'static str, &[&'static str])] = &[
        (
            "source",
            &["source airport", "source_airport", "source", "src", "origin"],
        ),
        (
            "destination",
            &[
                "destination airport",
                "destination_airport",
                "destination",
                "dst",
                "dest",
            ],
        ),
    ];
    let columns = locate_columns(
        ROUTES_FILENAME,
        &headers,
        synonyms,
        &["source", "destination"],
    )?;

    let mut routes = Vec::new();
    let mut skipped_rows = 0usize;
    for result in csv_reader.records() {
        let record = result?;
        let source = field(&record, &columns, "source");
        let destination = field(&record, &columns, "destination");
        if source.is_empty() || destination.is_empty() {
            skipped_rows += 1;
            continue;
        }
        routes.push(RouteRecord {
            source,
            destination,
        });
    }

    if skipped_rows > 0 {
        debug!(skipped_rows, "skipped route rows missing endpoint codes");
    }

    Ok(routes)
}

/// Resolve the data directory.
///
/// The resolution order:
/// 1. Explicit `target` argument when provided.
/// 2. `FLIGHTHOP_DATA_DIR` environment variable.
/// 3. Platform-specific project directories.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    default_data_dir()
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "flighthop", "flighthop").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Normalize a header string for robust matching.
fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Map canonical field names onto column indices via header synonyms.
fn locate_columns(
    file: &str,
    headers: &StringRecord,
    synonyms: &[(&'static str, &[&'static str])],
    required: &[&str],
) -> Result<BTreeMap<&'static str, usize>> {
    let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

    let mut index_map: BTreeMap<&'static str, usize> = BTreeMap::new();
    for (canon, alts) in synonyms {
        'outer: for alt in *alts {
            let alt_n = normalize_header(alt);
            for (i, header) in normalized_headers.iter().enumerate() {
                if header == &alt_n {
                    index_map.insert(*canon, i);
                    break 'outer;
                }
            }
        }
    }

    let missing: Vec<&str> = required
        .iter()
        .filter(|c| !index_map.contains_key(**c))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns {
            file: file.to_string(),
            columns: missing.join(", "),
        });
    }

    Ok(index_map)
}

fn field(record: &StringRecord, columns: &BTreeMap<&'static str, usize>, name: &str) -> String {
    columns
        .get(name)
        .and_then(|&i| record.get(i))
        .unwrap_or("")
        .trim()
        .to_string()
}
