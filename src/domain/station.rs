// Station domain model
use std::str::FromStr;

/// A CFT monitoring station that publishes rendered wave charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    BoaGorgona,
    BoaGiannutri,
    Gombo,
    CastiglioneDellaPescaia,
}

impl Station {
    /// The station identifier expected by the remote endpoint.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BoaGorgona => "TOS25000001",
            Self::BoaGiannutri => "TOS25000002",
            Self::Gombo => "TOS25000003",
            Self::CastiglioneDellaPescaia => "TOS25000004",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BoaGorgona => "Boa Gorgona",
            Self::BoaGiannutri => "Boa Giannutri",
            Self::Gombo => "Gombo",
            Self::CastiglioneDellaPescaia => "Castiglione della Pescaia",
        }
    }

    pub fn all() -> [Station; 4] {
        [
            Self::BoaGorgona,
            Self::BoaGiannutri,
            Self::Gombo,
            Self::CastiglioneDellaPescaia,
        ]
    }
}

impl FromStr for Station {
    type Err = String;

    /// Accepts either the remote identifier or the station name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Station::all()
            .into_iter()
            .find(|station| station.code() == s || station.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown station: {s}"))
    }
}
