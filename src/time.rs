use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{JulianDate, JDTOMJD, MJD};
use crate::orbit_errors::OrbitError;

/// Transformation from a calendar date (UTC) to julian date (JD) and modified julian date (MJD)
///
/// Closed-form expression valid from 1 March 1900 to 28 February 2100 (no leap second handling):
///
/// `JD = 367·Y − ⌊7·(Y + ⌊(M + 9)/12⌋)/4⌋ + ⌊275·M/9⌋ + D + 1721013.5 + ((s/60 + min)/60 + h)/24`
///
/// Argument
/// --------
/// * `year`: 4 digit year, between 1900 and 2100
/// * `month`: month, between 1 and 12
/// * `day`: day of the month, between 1 and 31
/// * `hour`: UT hour, between 0 and 23
/// * `minute`: UT minute, between 0 and 59
/// * `second`: UT second, in [0, 60)
///
/// Return
/// ------
/// * a tuple `(JD, MJD)`, or [`OrbitError::InvalidDate`] if a field is out of range
pub fn date_to_jd(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<(JulianDate, MJD), OrbitError> {
    if !(1900..=2100).contains(&year) {
        return Err(OrbitError::InvalidDate(format!(
            "year {year} outside 1900..=2100"
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(OrbitError::InvalidDate(format!("month {month}")));
    }
    if !(1..=31).contains(&day) {
        return Err(OrbitError::InvalidDate(format!("day {day}")));
    }
    if hour > 23 || minute > 59 {
        return Err(OrbitError::InvalidDate(format!("time {hour}:{minute}")));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(OrbitError::InvalidDate(format!("second {second}")));
    }

    let (y, m) = (year as f64, month as f64);
    let jd = 367.0 * y - ((7.0 * (y + ((m + 9.0) / 12.0).floor())) * 0.25).floor()
        + (275.0 * m / 9.0).floor()
        + day as f64
        + 1_721_013.5
        + ((second / 60.0 + minute as f64) / 60.0 + hour as f64) / 24.0;

    Ok((jd, jd - JDTOMJD))
}

/// Transformation from date in the format YYYY-MM-ddTHH:mm:ss (UTC) to julian date (JD)
///
/// Argument
/// --------
/// * `date`: a date string parsed by hifitime
///
/// Return
/// ------
/// * the julian date, or [`OrbitError::InvalidDate`] if the string cannot be parsed
pub fn date_str_to_jd(date: &str) -> Result<JulianDate, OrbitError> {
    Epoch::from_str(date)
        .map(|epoch| epoch.to_jde_utc_days())
        .map_err(|err| OrbitError::InvalidDate(format!("{date}: {err}")))
}

/// Julian date (UTC) of an epoch
pub fn epoch_to_jd(epoch: &Epoch) -> JulianDate {
    epoch.to_jde_utc_days()
}

/// Epoch of a julian date expressed in UTC
pub fn jd_to_epoch(jd: JulianDate) -> Epoch {
    Epoch::from_jde_utc(jd)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use crate::constants::J2000_JD;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_date_to_jd_j2000() {
        let (jd, mjd) = date_to_jd(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(jd, J2000_JD);
        assert_eq!(mjd, 51544.5);
    }

    #[test]
    fn test_date_to_jd_matches_hifitime() {
        let (jd, _) = date_to_jd(2017, 2, 10, 0, 0, 0.0).unwrap();
        assert_eq!(jd, 2457794.5);

        let (jd, mjd) = date_to_jd(2021, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(mjd, 59215.0);
        assert_abs_diff_eq!(
            jd,
            date_str_to_jd("2021-01-01T00:00:00").unwrap(),
            epsilon = 1e-8
        );

        let (jd, _) = date_to_jd(1976, 9, 20, 22, 32, 48.0).unwrap();
        let epoch = Epoch::from_gregorian_utc(1976, 9, 20, 22, 32, 48, 0);
        assert_abs_diff_eq!(jd, epoch_to_jd(&epoch), epsilon = 1e-8);
    }

    #[test]
    fn test_date_to_jd_rejects_out_of_range() {
        assert!(matches!(
            date_to_jd(1850, 1, 1, 0, 0, 0.0),
            Err(OrbitError::InvalidDate(_))
        ));
        assert!(date_to_jd(2000, 13, 1, 0, 0, 0.0).is_err());
        assert!(date_to_jd(2000, 1, 0, 0, 0, 0.0).is_err());
        assert!(date_to_jd(2000, 1, 1, 24, 0, 0.0).is_err());
        assert!(date_to_jd(2000, 1, 1, 0, 0, 60.0).is_err());
        assert!(date_to_jd(2000, 1, 1, 0, 0, f64::NAN).is_err());
    }

    #[test]
    fn test_date_str_to_jd() {
        assert_eq!(date_str_to_jd("2021-01-01T00:00:00").unwrap(), 2459215.5);
        assert!(date_str_to_jd("not a date").is_err());
    }

    #[test]
    fn test_epoch_round_trip() {
        let epoch = jd_to_epoch(2457800.5);
        assert_abs_diff_eq!(epoch_to_jd(&epoch), 2457800.5, epsilon = 1e-9);
    }

    #[test]
    fn test_mjd_offset_matches_hifitime() {
        let (jd, mjd) = date_to_jd(2017, 2, 10, 6, 0, 0.0).unwrap();
        assert_abs_diff_eq!(mjd, jd_to_epoch(jd).to_mjd_utc_days(), epsilon = 1e-8);
        assert_eq!(jd - mjd, JDTOMJD);
    }
}
