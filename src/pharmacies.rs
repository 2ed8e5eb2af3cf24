//! Nearby pharmacy directory.
//!
//! A fixed demo directory positioned at small offsets around the caller's
//! coordinate. The browser places these on the map; each entry carries a
//! directions link built from its exact coordinates.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f32,
    pub reviews: u32,
    pub directions_url: String,
}

struct DirectoryEntry {
    name: &'static str,
    lat_offset: f64,
    lon_offset: f64,
    rating: f32,
    reviews: u32,
}

const DIRECTORY: &[DirectoryEntry] = &[
    DirectoryEntry {
        name: "Apollo Pharmacy",
        lat_offset: 0.005,
        lon_offset: 0.005,
        rating: 4.5,
        reviews: 120,
    },
    DirectoryEntry {
        name: "MedPlus Wellness",
        lat_offset: -0.005,
        lon_offset: -0.002,
        rating: 4.8,
        reviews: 340,
    },
    DirectoryEntry {
        name: "Wellness Forever",
        lat_offset: 0.008,
        lon_offset: -0.004,
        rating: 4.2,
        reviews: 89,
    },
    DirectoryEntry {
        name: "Netmeds Store",
        lat_offset: -0.003,
        lon_offset: 0.007,
        rating: 3.9,
        reviews: 56,
    },
    DirectoryEntry {
        name: "Local Health Chemist",
        lat_offset: 0.002,
        lon_offset: -0.008,
        rating: 4.6,
        reviews: 210,
    },
];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LocationError {
    #[error("Latitude must be between -90 and 90, got {0}")]
    Latitude(f64),
    #[error("Longitude must be between -180 and 180, got {0}")]
    Longitude(f64),
}

pub fn directions_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={lat},{lon}")
}

/// Pharmacies around `(lat, lon)`, in directory order.
pub fn nearby(lat: f64, lon: f64) -> Result<Vec<Pharmacy>, LocationError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(LocationError::Latitude(lat));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(LocationError::Longitude(lon));
    }

    Ok(DIRECTORY
        .iter()
        .map(|e| {
            let latitude = lat + e.lat_offset;
            let longitude = lon + e.lon_offset;
            Pharmacy {
                name: e.name.to_string(),
                latitude,
                longitude,
                rating: e.rating,
                reviews: e.reviews,
                directions_url: directions_url(latitude, longitude),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_returns_full_directory_around_point() {
        let list = nearby(12.97, 77.59).unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list[0].name, "Apollo Pharmacy");
        assert!((list[0].latitude - 12.975).abs() < 1e-9);
        assert!((list[0].longitude - 77.595).abs() < 1e-9);
    }

    #[test]
    fn directions_url_uses_exact_coordinates() {
        let list = nearby(0.0, 0.0).unwrap();
        assert_eq!(
            list[1].directions_url,
            "https://www.google.com/maps/search/?api=1&query=-0.005,-0.002"
        );
    }

    #[test]
    fn out_of_range_latitude_rejected() {
        assert_eq!(nearby(91.0, 0.0).unwrap_err(), LocationError::Latitude(91.0));
    }

    #[test]
    fn out_of_range_longitude_rejected() {
        assert_eq!(
            nearby(0.0, -181.0).unwrap_err(),
            LocationError::Longitude(-181.0)
        );
    }

    #[test]
    fn non_finite_coordinates_rejected() {
        assert!(nearby(f64::NAN, 0.0).is_err());
        assert!(nearby(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(&nearby(1.0, 1.0).unwrap()[0]).unwrap();
        assert!(json.get("directionsUrl").is_some());
        assert_eq!(json["reviews"], 120);
    }
}
