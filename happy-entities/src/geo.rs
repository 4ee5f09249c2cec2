use std::fmt;

/// A geographical position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    pub const LAT_DEG_MAX: f64 = 90.0;
    pub const LAT_DEG_MIN: f64 = -90.0;
    pub const LNG_DEG_MAX: f64 = 180.0;
    pub const LNG_DEG_MIN: f64 = -180.0;

    /// Create a point without checking its bounds.
    ///
    /// Only intended for constants that are known to be valid.
    pub const fn from_lat_lng_deg_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self { lat, lng };
        pos.is_valid().then_some(pos)
    }

    pub fn is_valid(&self) -> bool {
        is_valid_lat_deg(self.lat) && is_valid_lng_deg(self.lng)
    }
}

fn is_valid_lat_deg(lat: f64) -> bool {
    lat.is_finite() && (MapPoint::LAT_DEG_MIN..=MapPoint::LAT_DEG_MAX).contains(&lat)
}

fn is_valid_lng_deg(lng: f64) -> bool {
    lng.is_finite() && (MapPoint::LNG_DEG_MIN..=MapPoint::LNG_DEG_MAX).contains(&lng)
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// The visible part of a map: a center with the spanned
/// latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center: MapPoint,
    pub lat_delta: f64,
    pub lng_delta: f64,
}

impl MapRegion {
    pub fn is_valid(&self) -> bool {
        self.center.is_valid()
            && is_valid_delta(self.lat_delta, MapPoint::LAT_DEG_MAX - MapPoint::LAT_DEG_MIN)
            && is_valid_delta(self.lng_delta, MapPoint::LNG_DEG_MAX - MapPoint::LNG_DEG_MIN)
    }

    /// South-west and north-east corner, clamped to valid coordinates.
    pub fn corners(&self) -> (MapPoint, MapPoint) {
        let half_lat = self.lat_delta / 2.0;
        let half_lng = self.lng_delta / 2.0;
        let sw = MapPoint {
            lat: (self.center.lat - half_lat).max(MapPoint::LAT_DEG_MIN),
            lng: (self.center.lng - half_lng).max(MapPoint::LNG_DEG_MIN),
        };
        let ne = MapPoint {
            lat: (self.center.lat + half_lat).min(MapPoint::LAT_DEG_MAX),
            lng: (self.center.lng + half_lng).min(MapPoint::LNG_DEG_MAX),
        };
        (sw, ne)
    }

    pub fn contains(&self, pos: &MapPoint) -> bool {
        let (sw, ne) = self.corners();
        (sw.lat..=ne.lat).contains(&pos.lat) && (sw.lng..=ne.lng).contains(&pos.lng)
    }
}

fn is_valid_delta(delta: f64, max: f64) -> bool {
    delta.is_finite() && delta > 0.0 && delta <= max
}
