use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

// Partition table CSV format: name, type, subtype, offset, size, flags
const MIN_FIELDS_PER_ROW: usize = 5;

/// One row of the partition table. Every field keeps its source spelling;
/// offset and size are not numerically validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub name: String,
    pub ty: String,
    pub subtype: String,
    pub offset: String,
    pub size: String,
    pub flags: String,
}

/// Partition records in file order.
#[derive(Debug, Default)]
pub struct PartitionTable {
    partitions: Vec<Partition>,
}

impl PartitionTable {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut partitions = Vec::new();
        for line in reader.lines() {
            if let Some(partition) = parse_row(&line?) {
                partitions.push(partition);
            }
        }
        Ok(Self { partitions })
    }

    pub fn from_csv(csv: &str) -> Self {
        Self {
            partitions: csv.lines().filter_map(parse_row).collect(),
        }
    }

    /// A missing or unreadable table degrades to an empty table with a
    /// diagnostic instead of failing the run.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || !path.is_file() {
            log::warn!("No partition table found or build.partitions not set.");
            return Self::default();
        }

        let result = File::open(path)
            .map_err(Error::from)
            .and_then(|file| Self::from_reader(BufReader::new(file)));
        match result {
            Ok(table) => table,
            Err(err) => {
                log::warn!("Failed to read partition table {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Linear scan by name. With duplicate names the last row wins.
    pub fn find(&self, name: &str) -> Option<&Partition> {
        self.partitions.iter().rev().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }
}

fn parse_row(line: &str) -> Option<Partition> {
    let line = line.trim();
    // Skip comments and empty lines
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MIN_FIELDS_PER_ROW {
        // Not a valid partition row
        return None;
    }

    Some(Partition {
        name: fields[0].to_string(),
        ty: fields[1].to_string(),
        subtype: fields[2].to_string(),
        offset: fields[3].to_string(),
        size: fields[4].to_string(),
        flags: fields.get(5).copied().unwrap_or("").to_string(),
    })
}
