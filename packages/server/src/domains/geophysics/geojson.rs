use serde::Serialize;

use super::Region;

/// GeoJSON `Point` geometry; coordinates are `[lng, lat]`
#[derive(Debug, Clone, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    kind: &'static str,
    pub coordinates: [f64; 2],
}

impl Geometry {
    pub fn point(lng: f64, lat: f64) -> Self {
        Self {
            kind: "Point",
            coordinates: [lng, lat],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature<P> {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: Geometry,
    pub properties: P,
}

impl<P> Feature<P> {
    pub fn at_region(region: &Region, properties: P) -> Self {
        Self {
            kind: "Feature",
            geometry: Geometry::point(region.lng, region.lat),
            properties,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection<P> {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }
}
