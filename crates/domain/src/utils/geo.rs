//! Distance helpers (Haversine, friendly labels)

use crate::types::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6371.0;
const KM_TO_MILES: f64 = 0.621371;

/// Great-circle distance between two points in miles.
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c * KM_TO_MILES
}

/// Turn a distance into a friendly label ("≈0.2 mi", "3.4 mi", "12 mi").
/// Callers append "from you" / "away" as the page requires.
pub fn distance_label(miles: Option<f64>) -> Option<String> {
    let n = miles?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    if n < 0.2 {
        Some("≈0.2 mi".to_string())
    } else if n < 10.0 {
        Some(format!("{n:.1} mi"))
    } else {
        Some(format!("{} mi", n.round() as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boise_to_meridian_is_about_ten_miles() {
        let boise = GeoPoint { lat: 43.6150, lon: -116.2023 };
        let meridian = GeoPoint { lat: 43.6121, lon: -116.3915 };
        let mi = distance_miles(boise, meridian);
        assert!((9.0..11.0).contains(&mi), "got {mi}");
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let p = GeoPoint { lat: 40.0, lon: -100.0 };
        assert!(distance_miles(p, p) < 1e-9);
    }

    #[test]
    fn labels_bucket_by_distance() {
        assert_eq!(distance_label(Some(0.05)).as_deref(), Some("≈0.2 mi"));
        assert_eq!(distance_label(Some(0.84)).as_deref(), Some("0.8 mi"));
        assert_eq!(distance_label(Some(3.46)).as_deref(), Some("3.5 mi"));
        assert_eq!(distance_label(Some(12.4)).as_deref(), Some("12 mi"));
        assert_eq!(distance_label(None), None);
        assert_eq!(distance_label(Some(f64::NAN)), None);
    }
}
