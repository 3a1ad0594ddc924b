//! IERS Bulletin A (`ser7.dat`) parser.
//!
//! Grounded in
//! `original_source/.../Frame/Providers/IERS/BulletinA.cpp`: fixed-column
//! regexes for the release-date banner, the `TAI-UTC` epoch/value lines,
//! and the observation/prediction row tables, then floor-MJD lookup with
//! linear interpolation between the two bracketing rows for fractional
//! MJDs (the original's `[TBI] IERS gazette #13` comment notes the finer
//! tidal correction it deliberately omits — this port omits it too).

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PhysicsError, Result};

/// One daily row: polar motion `(x, y)` in arcseconds and `UT1-UTC` in
/// seconds, keyed by integer MJD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub mjd: f64,
    pub x: f64,
    pub y: f64,
    pub ut1_minus_utc: f64,
}

#[derive(Debug, Clone, Default)]
pub struct BulletinA {
    pub tai_minus_utc: Option<f64>,
    observations: BTreeMap<i64, Row>,
    predictions: BTreeMap<i64, Row>,
}

static TAI_MINUS_UTC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*TAI-UTC\s*=\s*(-?[\d.]+)\s+\d+\s+seconds\s*$").unwrap());

static OBSERVATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\s+\d+\s+\d+\s+(\d+)\s+(-?[\d.]+)\s+[\d.]+\s+(-?[\d.]+)\s+[\d.]+\s+(-?[\d.]+)\s+[\d.]+\s*$").unwrap()
});

static PREDICTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\s+\d+\s+\d+\s+(\d+)\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)\s*$").unwrap());

impl BulletinA {
    /// Parse a `ser7.dat` text body. Rows that fail to match either table
    /// regex are silently skipped — the file mixes banner text,
    /// whitespace, and both tables with no section delimiter, exactly as
    /// the original's line-by-line regex scan handles it.
    pub fn parse(text: &str) -> Result<BulletinA> {
        let mut bulletin = BulletinA::default();
        for line in text.lines() {
            if bulletin.tai_minus_utc.is_none() {
                if let Some(captures) = TAI_MINUS_UTC_RE.captures(line) {
                    bulletin.tai_minus_utc = captures[1].parse::<f64>().ok();
                    continue;
                }
            }
            if let Some(captures) = OBSERVATION_RE.captures(line) {
                let mjd: i64 = captures[1].parse().map_err(|_| parse_error(line))?;
                let row = Row {
                    mjd: mjd as f64,
                    x: captures[2].parse().map_err(|_| parse_error(line))?,
                    y: captures[3].parse().map_err(|_| parse_error(line))?,
                    ut1_minus_utc: captures[4].parse().map_err(|_| parse_error(line))?,
                };
                bulletin.observations.insert(mjd, row);
                continue;
            }
            if let Some(captures) = PREDICTION_RE.captures(line) {
                let mjd: i64 = captures[1].parse().map_err(|_| parse_error(line))?;
                let row = Row {
                    mjd: mjd as f64,
                    x: captures[2].parse().map_err(|_| parse_error(line))?,
                    y: captures[3].parse().map_err(|_| parse_error(line))?,
                    ut1_minus_utc: captures[4].parse().map_err(|_| parse_error(line))?,
                };
                bulletin.predictions.insert(mjd, row);
            }
        }
        if bulletin.observations.is_empty() && bulletin.predictions.is_empty() {
            return Err(PhysicsError::InvalidInput("Bulletin A text contains no recognizable rows".to_string()));
        }
        Ok(bulletin)
    }

    pub fn observation_at(&self, mjd: f64) -> Result<Row> {
        interpolate(&self.observations, mjd)
    }

    pub fn prediction_at(&self, mjd: f64) -> Result<Row> {
        interpolate(&self.predictions, mjd)
    }
}

fn interpolate(table: &BTreeMap<i64, Row>, mjd: f64) -> Result<Row> {
    let floor = mjd.floor() as i64;
    let previous = table
        .get(&floor)
        .copied()
        .ok_or_else(|| PhysicsError::RangeError(format!("MJD {mjd} is outside this table's coverage")))?;
    if (mjd - mjd.floor()).abs() < 1e-9 {
        return Ok(previous);
    }
    let next = match table.get(&(floor + 1)) {
        Some(row) => *row,
        None => return Ok(previous),
    };
    let ratio = mjd - previous.mjd;
    Ok(Row {
        mjd,
        x: previous.x + ratio * (next.x - previous.x),
        y: previous.y + ratio * (next.y - previous.y),
        ut1_minus_utc: previous.ut1_minus_utc + ratio * (next.ut1_minus_utc - previous.ut1_minus_utc),
    })
}

fn parse_error(line: &str) -> PhysicsError {
    PhysicsError::InvalidInput(format!("malformed Bulletin A row: '{line}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
 02 01 18 Vol. XXVII No. 003
TAI-UTC = 32.0 17 seconds
  2018   1  1  58119     0.094000    0.000040     0.274000    0.000040    -0.015500    0.000030
  2018   1  2  58120     0.096000    0.000040     0.275000    0.000040    -0.016400    0.000030
  2018   6  1  58270     0.100000     0.200000     0.300000
  2018   6  2  58271     0.101000     0.201000     0.301000
";

    #[test]
    fn parses_observation_and_prediction_rows() {
        let bulletin = BulletinA::parse(SAMPLE).unwrap();
        assert_eq!(bulletin.tai_minus_utc, Some(32.0));
        let row = bulletin.observation_at(58119.0).unwrap();
        assert_eq!(row.x, 0.094);
    }

    #[test]
    fn interpolates_fractional_mjd() {
        let bulletin = BulletinA::parse(SAMPLE).unwrap();
        let row = bulletin.observation_at(58119.5).unwrap();
        assert!((row.x - 0.095).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_mjd_is_a_range_error() {
        let bulletin = BulletinA::parse(SAMPLE).unwrap();
        assert!(bulletin.observation_at(10000.0).is_err());
    }

    #[test]
    fn prediction_rows_interpolate_independently_of_observations() {
        let bulletin = BulletinA::parse(SAMPLE).unwrap();
        let row = bulletin.prediction_at(58270.5).unwrap();
        assert!((row.ut1_minus_utc - 0.3005).abs() < 1e-9);
    }
}
