// src/lib.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod export;
pub mod normalize;
pub mod sample;
pub mod symbols;
pub mod validate;

pub use export::{
    export_filename, save_best_effort, share_summary, to_csv, to_json, to_text, ChartSink,
    ExportFormat,
};
pub use normalize::{normalize, ordinal};
pub use validate::{chart_or_sample, validate, ValidChart};

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Sign containing an absolute ecliptic longitude, each sign spanning 30°.
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized_longitude = longitude.rem_euclid(360.0);
        let sign_index = (normalized_longitude / 30.0).floor() as usize;
        match sign_index {
            0 => ZodiacSign::Aries,
            1 => ZodiacSign::Taurus,
            2 => ZodiacSign::Gemini,
            3 => ZodiacSign::Cancer,
            4 => ZodiacSign::Leo,
            5 => ZodiacSign::Virgo,
            6 => ZodiacSign::Libra,
            7 => ZodiacSign::Scorpio,
            8 => ZodiacSign::Sagittarius,
            9 => ZodiacSign::Capricorn,
            10 => ZodiacSign::Aquarius,
            11 => ZodiacSign::Pisces,
            _ => ZodiacSign::Aries, // Fallback
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "aries" => Some(ZodiacSign::Aries),
            "taurus" => Some(ZodiacSign::Taurus),
            "gemini" => Some(ZodiacSign::Gemini),
            "cancer" => Some(ZodiacSign::Cancer),
            "leo" => Some(ZodiacSign::Leo),
            "virgo" => Some(ZodiacSign::Virgo),
            "libra" => Some(ZodiacSign::Libra),
            "scorpio" => Some(ZodiacSign::Scorpio),
            "sagittarius" => Some(ZodiacSign::Sagittarius),
            "capricorn" => Some(ZodiacSign::Capricorn),
            "aquarius" => Some(ZodiacSign::Aquarius),
            "pisces" => Some(ZodiacSign::Pisces),
            _ => None,
        }
    }

    /// Ruling planet of the sign, modern rulerships.
    pub fn ruler(&self) -> CelestialBody {
        match self {
            ZodiacSign::Aries => CelestialBody::Mars,
            ZodiacSign::Taurus => CelestialBody::Venus,
            ZodiacSign::Gemini => CelestialBody::Mercury,
            ZodiacSign::Cancer => CelestialBody::Moon,
            ZodiacSign::Leo => CelestialBody::Sun,
            ZodiacSign::Virgo => CelestialBody::Mercury,
            ZodiacSign::Libra => CelestialBody::Venus,
            ZodiacSign::Scorpio => CelestialBody::Pluto,
            ZodiacSign::Sagittarius => CelestialBody::Jupiter,
            ZodiacSign::Capricorn => CelestialBody::Saturn,
            ZodiacSign::Aquarius => CelestialBody::Uranus,
            ZodiacSign::Pisces => CelestialBody::Neptune,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign_str = match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        };
        write!(f, "{}", sign_str)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
}

impl CelestialBody {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sun" => Some(CelestialBody::Sun),
            "moon" => Some(CelestialBody::Moon),
            "mercury" => Some(CelestialBody::Mercury),
            "venus" => Some(CelestialBody::Venus),
            "mars" => Some(CelestialBody::Mars),
            "jupiter" => Some(CelestialBody::Jupiter),
            "saturn" => Some(CelestialBody::Saturn),
            "uranus" => Some(CelestialBody::Uranus),
            "neptune" => Some(CelestialBody::Neptune),
            "pluto" => Some(CelestialBody::Pluto),
            "north node" | "northnode" | "rahu" => Some(CelestialBody::NorthNode),
            "south node" | "southnode" | "ketu" => Some(CelestialBody::SouthNode),
            "chiron" => Some(CelestialBody::Chiron),
            _ => None,
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let body_str = match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
            CelestialBody::NorthNode => "North Node",
            CelestialBody::SouthNode => "South Node",
            CelestialBody::Chiron => "Chiron",
        };
        write!(f, "{}", body_str)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
    Quintile,
    Biquintile,
}

impl AspectKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "conjunction" => Some(AspectKind::Conjunction),
            "opposition" => Some(AspectKind::Opposition),
            "trine" => Some(AspectKind::Trine),
            "square" => Some(AspectKind::Square),
            "sextile" => Some(AspectKind::Sextile),
            "quincunx" => Some(AspectKind::Quincunx),
            "semisextile" => Some(AspectKind::Semisextile),
            "semisquare" => Some(AspectKind::Semisquare),
            "sesquiquadrate" => Some(AspectKind::Sesquiquadrate),
            "quintile" => Some(AspectKind::Quintile),
            "biquintile" => Some(AspectKind::Biquintile),
            _ => None,
        }
    }

    /// Default orb when the caller supplies none. Conjunctions and
    /// oppositions get the wider allowance.
    pub fn default_orb(&self) -> f64 {
        match self {
            AspectKind::Conjunction | AspectKind::Opposition => 10.0,
            _ => 8.0,
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind_str = match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
            AspectKind::Quincunx => "Quincunx",
            AspectKind::Semisextile => "Semisextile",
            AspectKind::Semisquare => "Semisquare",
            AspectKind::Sesquiquadrate => "Sesquiquadrate",
            AspectKind::Quintile => "Quintile",
            AspectKind::Biquintile => "Biquintile",
        };
        write!(f, "{}", kind_str)
    }
}

// ---------------------------
// ## Structures
// ---------------------------

/// A planet placement after normalization. Name and sign stay string-typed
/// because the upstream vocabulary is open; unknown names render with a
/// fallback glyph instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub sign: String,
    /// Degree within the sign, in [0, 30).
    pub degree: f64,
    /// Ordinal house label ("7th") or the literal "Unknown".
    pub house: String,
    /// Absolute ecliptic longitude in [0, 360), when known.
    pub position: Option<f64>,
    pub retrograde: bool,
    pub aspects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePlacement {
    pub number: u8,
    pub sign: String,
    /// Degree within the sign, in [0, 30).
    pub degree: f64,
    /// Absolute cusp longitude in [0, 360).
    pub cusp: f64,
    pub ruler: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectEntry {
    pub planet1: String,
    pub planet2: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub orb: f64,
    pub applying: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub name: String,
    pub sign: String,
    pub degree: f64,
    pub house: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub name: String,
    pub sign: String,
    pub degree: f64,
    pub position: Option<f64>,
}

/// A fully normalized chart. All five sections are always present; a section
/// missing from the raw input normalizes to an empty vec.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chart {
    pub planets: Vec<Planet>,
    pub houses: Vec<HousePlacement>,
    pub aspects: Vec<AspectEntry>,
    pub asteroids: Vec<Asteroid>,
    pub angles: Vec<Angle>,
}

// ---------------------------
// ## Error Handling
// ---------------------------

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("platform capability unavailable: {0}")]
    Platform(String),
    #[error("malformed chart section: {0}")]
    Shape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_from_longitude_covers_all_segments() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(150.5), ZodiacSign::Virgo);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-10.0), ZodiacSign::Pisces);
    }

    #[test]
    fn rulers_follow_the_fixed_table() {
        assert_eq!(ZodiacSign::Aries.ruler(), CelestialBody::Mars);
        assert_eq!(ZodiacSign::Taurus.ruler(), CelestialBody::Venus);
        assert_eq!(ZodiacSign::Leo.ruler(), CelestialBody::Sun);
        assert_eq!(ZodiacSign::Cancer.ruler(), CelestialBody::Moon);
    }

    #[test]
    fn default_orbs_widen_for_conjunction_and_opposition() {
        assert_eq!(AspectKind::Conjunction.default_orb(), 10.0);
        assert_eq!(AspectKind::Opposition.default_orb(), 10.0);
        assert_eq!(AspectKind::Square.default_orb(), 8.0);
        assert_eq!(AspectKind::Biquintile.default_orb(), 8.0);
    }

    #[test]
    fn body_parse_accepts_node_synonyms() {
        assert_eq!(CelestialBody::from_name("rahu"), Some(CelestialBody::NorthNode));
        assert_eq!(CelestialBody::from_name("SUN"), Some(CelestialBody::Sun));
        assert_eq!(CelestialBody::from_name("vulcan"), None);
    }
}
