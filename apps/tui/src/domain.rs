#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Debris,
    RocketBody,
    Satellite,
}

impl ObjectType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debris => "Debris",
            Self::RocketBody => "Rocket Body",
            Self::Satellite => "Satellite",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "debris" => Some(Self::Debris),
            "rocket body" => Some(Self::RocketBody),
            "satellite" => Some(Self::Satellite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitType {
    Leo,
    Meo,
    Geo,
}

impl OrbitType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leo => "LEO",
            Self::Meo => "MEO",
            Self::Geo => "GEO",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "LEO" => Some(Self::Leo),
            "MEO" => Some(Self::Meo),
            "GEO" => Some(Self::Geo),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Leo => "LEO (Low Earth Orbit)",
            Self::Meo => "MEO (Medium Earth Orbit)",
            Self::Geo => "GEO (Geostationary Orbit)",
        }
    }
}

/// Badge tier for an urgency score. Boundaries are inclusive on the
/// lower edge of each tier and open-ended above Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Critical,
    High,
    Medium,
    Low,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

pub fn classify(score: f64) -> Tier {
    if score >= 100.0 {
        Tier::Critical
    } else if score >= 80.0 {
        Tier::High
    } else if score >= 60.0 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Coarse risk band used for globe point coloring. This scale is
/// intentionally distinct from the badge tiers and must stay that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::Low => "Low Risk",
        }
    }

    pub const fn bounds(self) -> &'static str {
        match self {
            Self::High => "Score > 70",
            Self::Medium => "Score 40-70",
            Self::Low => "Score < 40",
        }
    }
}

pub fn risk_band(score: f64) -> RiskBand {
    if score > 70.0 {
        RiskBand::High
    } else if score >= 40.0 {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, risk_band, ObjectType, OrbitType, RiskBand, Tier};

    #[test]
    fn tier_boundaries_are_inclusive_on_the_lower_edge() {
        assert_eq!(classify(100.0), Tier::Critical);
        assert_eq!(classify(99.999), Tier::High);
        assert_eq!(classify(80.0), Tier::High);
        assert_eq!(classify(79.999), Tier::Medium);
        assert_eq!(classify(60.0), Tier::Medium);
        assert_eq!(classify(59.9), Tier::Low);
        assert_eq!(classify(0.0), Tier::Low);
    }

    #[test]
    fn critical_tier_has_no_upper_bound() {
        assert_eq!(classify(150.0), Tier::Critical);
        assert_eq!(classify(1.0e9), Tier::Critical);
    }

    #[test]
    fn risk_band_boundaries() {
        assert_eq!(risk_band(70.001), RiskBand::High);
        assert_eq!(risk_band(70.0), RiskBand::Medium);
        assert_eq!(risk_band(40.0), RiskBand::Medium);
        assert_eq!(risk_band(39.999), RiskBand::Low);
    }

    #[test]
    fn badge_and_globe_scales_diverge_at_seventy_five() {
        // 75 is High on the badge scale but already in the top globe band.
        assert_eq!(classify(75.0), Tier::High);
        assert_eq!(risk_band(75.0), RiskBand::High);
        // 65 is Medium on both, but for different reasons (60 vs 40 floors).
        assert_eq!(classify(65.0), Tier::Medium);
        assert_eq!(risk_band(65.0), RiskBand::Medium);
        // 45 drops to Low on the badge scale while staying Medium on the globe.
        assert_eq!(classify(45.0), Tier::Low);
        assert_eq!(risk_band(45.0), RiskBand::Medium);
    }

    #[test]
    fn parses_known_object_and_orbit_types() {
        assert_eq!(ObjectType::parse("Rocket Body"), Some(ObjectType::RocketBody));
        assert_eq!(ObjectType::parse("debris"), Some(ObjectType::Debris));
        assert_eq!(ObjectType::parse("lens cover"), None);
        assert_eq!(OrbitType::parse("leo"), Some(OrbitType::Leo));
        assert_eq!(OrbitType::parse("HEO"), None);
    }
}
