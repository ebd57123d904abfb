// src/sample.rs
//
// Bundled fallback chart, substituted when caller-supplied data fails the
// structural checks. Constructed in code, no I/O, identical on every call:
// 10 planets, 12 houses, 3 aspects, 2 asteroids, 4 angles. The wheel is an
// equal-house chart with the Ascendant at 0° Libra.

use super::*;

fn planet(name: &str, position: f64, house: &str, retrograde: bool) -> Planet {
    Planet {
        name: name.to_string(),
        sign: ZodiacSign::from_longitude(position).to_string(),
        degree: position % 30.0,
        house: house.to_string(),
        position: Some(position),
        retrograde,
        aspects: Vec::new(),
    }
}

fn aspect(planet1: &str, planet2: &str, kind: AspectKind, orb: f64, applying: &str) -> AspectEntry {
    AspectEntry {
        planet1: planet1.to_string(),
        planet2: planet2.to_string(),
        kind: kind.to_string(),
        orb,
        applying: applying.to_string(),
    }
}

/// The deterministic sample chart.
pub fn chart() -> Chart {
    let houses = (0u8..12)
        .map(|i| {
            let cusp = (180.0 + f64::from(i) * 30.0).rem_euclid(360.0);
            let sign = ZodiacSign::from_longitude(cusp);
            HousePlacement {
                number: i + 1,
                sign: sign.to_string(),
                degree: cusp % 30.0,
                cusp,
                ruler: sign.ruler().to_string(),
            }
        })
        .collect();

    Chart {
        planets: vec![
            planet("Sun", 155.42, "12th", false),
            planet("Moon", 350.0, "6th", false),
            planet("Mercury", 142.1, "11th", false),
            planet("Venus", 171.35, "12th", false),
            planet("Mars", 23.5, "7th", false),
            planet("Jupiter", 67.8, "9th", false),
            planet("Saturn", 96.0, "10th", true),
            planet("Uranus", 58.9, "8th", false),
            planet("Neptune", 357.75, "6th", true),
            planet("Pluto", 293.6, "4th", true),
        ],
        houses,
        aspects: vec![
            aspect("Moon", "Neptune", AspectKind::Conjunction, 7.75, "Separating"),
            aspect("Sun", "Jupiter", AspectKind::Square, 2.38, "Applying"),
            aspect("Mars", "Pluto", AspectKind::Square, 0.1, "Exact"),
        ],
        asteroids: vec![
            Asteroid {
                name: "Ceres".to_string(),
                sign: "Libra".to_string(),
                degree: 12.3,
                house: "1st".to_string(),
            },
            Asteroid {
                name: "Chiron".to_string(),
                sign: "Aries".to_string(),
                degree: 15.0,
                house: "7th".to_string(),
            },
        ],
        angles: vec![
            Angle {
                name: "Ascendant".to_string(),
                sign: "Libra".to_string(),
                degree: 0.0,
                position: Some(180.0),
            },
            Angle {
                name: "Midheaven".to_string(),
                sign: "Cancer".to_string(),
                degree: 0.0,
                position: Some(90.0),
            },
            Angle {
                name: "Descendant".to_string(),
                sign: "Aries".to_string(),
                degree: 0.0,
                position: Some(0.0),
            },
            Angle {
                name: "IC".to_string(),
                sign: "Capricorn".to_string(),
                degree: 0.0,
                position: Some(270.0),
            },
        ],
    }
}
