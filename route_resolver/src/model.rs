use serde::{Deserialize, Serialize};

/// Marker stored in `airport_codes` when no route is known for a callsign.
pub const UNKNOWN_ROUTE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AirportRecord {
    pub icao: String,
    pub iata: String,
    pub name: String,
    #[serde(rename = "countryiso2")]
    pub country_iso2: String,
    pub lat: f64,
    pub lon: f64,
}

impl AirportRecord {
    /// IATA code if the airport has one, otherwise the ICAO code.
    pub fn display_code(&self) -> &str {
        if self.iata.is_empty() {
            &self.icao
        } else {
            &self.iata
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub callsign: String,
    pub number: String,
    pub airline_code: String,
    pub airport_codes: String,
    #[serde(rename = "_airport_codes_iata")]
    pub airport_codes_iata: String,
    #[serde(rename = "_airports")]
    pub airports: Vec<AirportRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plausible: Option<bool>,
    /// Distance reported by the oracle for the segment that decided `plausible`.
    #[serde(skip)]
    pub plausibility_distance_nm: Option<f64>,
}

impl RouteRecord {
    pub fn unknown(callsign: impl Into<String>) -> Self {
        Self {
            callsign: callsign.into(),
            number: String::new(),
            airline_code: String::new(),
            airport_codes: UNKNOWN_ROUTE.into(),
            airport_codes_iata: UNKNOWN_ROUTE.into(),
            airports: Vec::new(),
            plausible: None,
            plausibility_distance_nm: None,
        }
    }

    pub fn known(
        callsign: impl Into<String>,
        number: impl Into<String>,
        airline_code: impl Into<String>,
        airports: Vec<AirportRecord>,
    ) -> Self {
        let airport_codes = airports
            .iter()
            .map(|a| a.icao.as_str())
            .collect::<Vec<_>>()
            .join("-");
        let airport_codes_iata = airports
            .iter()
            .map(AirportRecord::display_code)
            .collect::<Vec<_>>()
            .join("-");

        Self {
            callsign: callsign.into(),
            number: number.into(),
            airline_code: airline_code.into(),
            airport_codes,
            airport_codes_iata,
            airports,
            plausible: None,
            plausibility_distance_nm: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.airport_codes == UNKNOWN_ROUTE
    }

    /// Consecutive airport pairs in chain order.
    pub fn segments(&self) -> impl Iterator<Item = (&AirportRecord, &AirportRecord)> {
        self.airports.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// Observed position, kept as the text it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub lat: String,
    pub lng: String,
}

impl Position {
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub callsign: String,
    #[serde(flatten)]
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(icao: &str, iata: &str) -> AirportRecord {
        AirportRecord {
            icao: icao.into(),
            iata: iata.into(),
            name: String::new(),
            country_iso2: String::new(),
            lat: 0.0,
            lon: 0.0,
        }
    }

    #[test]
    fn known_route_joins_codes_in_chain_order() {
        let route = RouteRecord::known(
            "BAW117",
            "117",
            "BAW",
            vec![airport("EGLL", "LHR"), airport("KJFK", "JFK"), airport("XXXX", "")],
        );

        assert_eq!(route.airport_codes, "EGLL-KJFK-XXXX");
        assert_eq!(route.airport_codes_iata, "LHR-JFK-XXXX");
        assert!(!route.is_unknown());
        assert_eq!(route.segments().count(), 2);
    }

    #[test]
    fn unknown_route_has_no_segments_and_omits_plausible() {
        let route = RouteRecord::unknown("NOPE1");
        assert!(route.is_unknown());
        assert_eq!(route.segments().count(), 0);

        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["airport_codes"], "unknown");
        assert_eq!(json["_airport_codes_iata"], "unknown");
        assert!(json.get("plausible").is_none());
    }

    #[test]
    fn route_request_reads_flat_triples() {
        let req: RouteRequest =
            serde_json::from_str(r#"{"callsign":"DLH400","lat":"50.03","lng":"8.57"}"#).unwrap();
        assert_eq!(req.callsign, "DLH400");
        assert_eq!(req.position, Position::new("50.03", "8.57"));
    }
}
