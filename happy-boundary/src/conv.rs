use super::*;
use happy_entities as e;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidOrphanage {
    #[error("Orphanage {id} has an invalid position ({lat}, {lng})")]
    Position { id: i64, lat: f64, lng: f64 },
}

impl From<e::orphanage::Orphanage> for Orphanage {
    fn from(from: e::orphanage::Orphanage) -> Self {
        let e::orphanage::Orphanage { id, name, pos } = from;
        Self {
            id: id.into(),
            name,
            latitude: pos.lat,
            longitude: pos.lng,
        }
    }
}

impl TryFrom<Orphanage> for e::orphanage::Orphanage {
    type Error = InvalidOrphanage;
    fn try_from(from: Orphanage) -> Result<Self, Self::Error> {
        let Orphanage {
            id,
            name,
            latitude,
            longitude,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(latitude, longitude).ok_or(
            InvalidOrphanage::Position {
                id,
                lat: latitude,
                lng: longitude,
            },
        )?;
        Ok(Self {
            id: id.into(),
            name,
            pos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_and_convert_orphanages() {
        let json = r#"[{"id":1,"name":"Lar Feliz","latitude":-23.94,"longitude":-46.37}]"#;
        let orphanages: Vec<Orphanage> = serde_json::from_str(json).unwrap();
        let orphanages = orphanages
            .into_iter()
            .map(e::orphanage::Orphanage::try_from)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(1, orphanages.len());
        assert_eq!(e::id::OrphanageId::new(1), orphanages[0].id);
        assert_eq!("Lar Feliz", orphanages[0].name);
        assert_eq!(-23.94, orphanages[0].pos.lat);
        assert_eq!(-46.37, orphanages[0].pos.lng);
    }

    #[test]
    fn reject_invalid_position() {
        let orphanage = Orphanage {
            id: 3,
            name: "Casa".into(),
            latitude: 123.0,
            longitude: 0.0,
        };
        assert_eq!(
            Err(InvalidOrphanage::Position {
                id: 3,
                lat: 123.0,
                lng: 0.0
            }),
            e::orphanage::Orphanage::try_from(orphanage)
        );
    }

    #[test]
    fn reject_incomplete_records() {
        let json = r#"[{"id":1,"name":"Lar Feliz","latitude":-23.94}]"#;
        assert!(serde_json::from_str::<Vec<Orphanage>>(json).is_err());
        let json = r#"[{"id":"1","name":"Lar Feliz","latitude":-23.94,"longitude":-46.37}]"#;
        assert!(serde_json::from_str::<Vec<Orphanage>>(json).is_err());
        let json = r#"{"id":1,"name":"Lar Feliz","latitude":-23.94,"longitude":-46.37}"#;
        assert!(serde_json::from_str::<Vec<Orphanage>>(json).is_err());
    }

    #[test]
    fn entity_into_boundary() {
        let orphanage = e::orphanage::Orphanage {
            id: 9.into(),
            name: "Casa Azul".into(),
            pos: e::geo::MapPoint::from_lat_lng_deg_unchecked(1.5, 2.5),
        };
        assert_eq!(
            Orphanage {
                id: 9,
                name: "Casa Azul".into(),
                latitude: 1.5,
                longitude: 2.5,
            },
            Orphanage::from(orphanage)
        );
    }

    #[test]
    fn decode_api_error() {
        let json = r#"{"http_status":500,"message":"Internal error"}"#;
        let err: Error = serde_json::from_str(json).unwrap();
        assert_eq!(500, err.http_status);
        assert_eq!("Internal error (HTTP 500)", err.to_string());
    }
}
