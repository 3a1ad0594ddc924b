//! Finals 2000A: a continuous, MJD-indexed Earth-orientation table.
//!
//! `spec.md` §4.E describes this source only at the design level (no
//! original-toolkit file ships it in this pack) — continuous daily
//! coverage of polar motion, `UT1-UTC`, and length-of-day, queried the
//! same way as [`crate::eop::bulletin_a::BulletinA`]: floor-MJD lookup,
//! linear interpolation between the bracketing rows for fractional MJDs.
//! Unlike Bulletin A this table carries LOD, which is never split into
//! "observed" vs. "predicted" sub-tables — every row the file ships is
//! queried through the same path.

use std::collections::BTreeMap;

use crate::error::{PhysicsError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub mjd: f64,
    pub x: f64,
    pub y: f64,
    pub ut1_minus_utc: f64,
    pub lod: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Finals2000A {
    rows: BTreeMap<i64, Row>,
}

impl Finals2000A {
    /// Parse a whitespace-delimited table: `mjd x y ut1_minus_utc lod`,
    /// one row per line, blank lines and `#`-prefixed comments ignored.
    pub fn parse(text: &str) -> Result<Finals2000A> {
        let mut table = Finals2000A::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 5 {
                return Err(PhysicsError::InvalidInput(format!("malformed Finals 2000A row: '{line}'")));
            }
            let parse_field = |s: &str| s.parse::<f64>().map_err(|_| PhysicsError::InvalidInput(format!("malformed Finals 2000A row: '{line}'")));
            let mjd = parse_field(fields[0])?;
            let row = Row {
                mjd,
                x: parse_field(fields[1])?,
                y: parse_field(fields[2])?,
                ut1_minus_utc: parse_field(fields[3])?,
                lod: parse_field(fields[4])?,
            };
            table.rows.insert(mjd.round() as i64, row);
        }
        if table.rows.is_empty() {
            return Err(PhysicsError::InvalidInput("Finals 2000A text contains no rows".to_string()));
        }
        Ok(table)
    }

    pub fn row_at(&self, mjd: f64) -> Result<Row> {
        let floor = mjd.floor() as i64;
        let previous = self
            .rows
            .get(&floor)
            .copied()
            .ok_or_else(|| PhysicsError::RangeError(format!("MJD {mjd} is outside the Finals 2000A table's coverage")))?;
        if (mjd - mjd.floor()).abs() < 1e-9 {
            return Ok(previous);
        }
        let next = match self.rows.get(&(floor + 1)) {
            Some(row) => *row,
            None => return Ok(previous),
        };
        let ratio = mjd - previous.mjd;
        Ok(Row {
            mjd,
            x: previous.x + ratio * (next.x - previous.x),
            y: previous.y + ratio * (next.y - previous.y),
            ut1_minus_utc: previous.ut1_minus_utc + ratio * (next.ut1_minus_utc - previous.ut1_minus_utc),
            lod: previous.lod + ratio * (next.lod - previous.lod),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# mjd x y ut1_minus_utc lod
58000 0.100 0.200 0.3000 0.0015
58001 0.101 0.201 0.3010 0.0016
58002 0.102 0.202 0.3020 0.0017
";

    #[test]
    fn parses_and_looks_up_integer_mjd() {
        let table = Finals2000A::parse(SAMPLE).unwrap();
        let row = table.row_at(58001.0).unwrap();
        assert_eq!(row.lod, 0.0016);
    }

    #[test]
    fn interpolates_fractional_mjd() {
        let table = Finals2000A::parse(SAMPLE).unwrap();
        let row = table.row_at(58000.5).unwrap();
        assert!((row.ut1_minus_utc - 0.3005).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_is_a_range_error() {
        let table = Finals2000A::parse(SAMPLE).unwrap();
        assert!(table.row_at(1000.0).is_err());
    }
}
