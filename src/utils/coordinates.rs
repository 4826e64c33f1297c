use crate::utils::constants::{FULL_TURN_DEGREES, LONGITUDE_WRAP_START};

/// Convert an east-positive longitude in [0, 360) to the signed [-180, 180) form.
///
/// Values already below 180 are returned unchanged, as are values outside
/// [0, 360), which callers are not expected to pass.
///
/// # Examples
/// ```
/// use astro_data_prep::utils::normalize_longitude;
///
/// assert_eq!(normalize_longitude(359.0), -1.0);
/// assert_eq!(normalize_longitude(90.0), 90.0);
/// ```
pub fn normalize_longitude(longitude: f64) -> f64 {
    if (LONGITUDE_WRAP_START..FULL_TURN_DEGREES).contains(&longitude) {
        longitude - FULL_TURN_DEGREES
    } else {
        longitude
    }
}

/// Width of a bounding interval, independent of the order of its ends
pub fn extent(min: f64, max: f64) -> f64 {
    (max - min).abs()
}

/// Arithmetic mean, or `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
