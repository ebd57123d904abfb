// src/normalize.rs
//
// Coerces a loosely shaped, upstream-supplied chart object into the canonical
// `Chart`. The upstream service is free to send each section as an array or as
// a keyed record; this boundary resolves that ambiguity immediately and never
// lets it leak further in. Normalization is total: malformed sections degrade
// to empty vecs, never to an error.

use serde_json::{Map, Value};

use super::*;

/// Which of the two upstream shapes a section arrived in.
enum SectionShape<'a> {
    Array(&'a Vec<Value>),
    Record(&'a Map<String, Value>),
    Missing,
}

impl<'a> SectionShape<'a> {
    fn of(section: Option<&'a Value>) -> Self {
        match section {
            Some(Value::Array(items)) => SectionShape::Array(items),
            Some(Value::Object(entries)) => SectionShape::Record(entries),
            _ => SectionShape::Missing,
        }
    }
}

/// Normalize a raw chart-like value into the canonical five-section `Chart`.
///
/// Total and side-effect-free: any input yields a `Chart`, with missing or
/// malformed sections reduced to empty vecs. Sign and degree-within-sign are
/// derived from absolute longitude where the input omits them, and planets
/// are placed into houses when the input carries exactly twelve cusps.
pub fn normalize(raw: &Value) -> Chart {
    let houses = normalize_houses(raw.get("houses"));

    // Planet-in-house lookup only works against a complete wheel.
    let cusps: Option<[f64; 12]> = if houses.len() == 12 {
        let mut wheel = [0.0; 12];
        for (i, house) in houses.iter().enumerate() {
            wheel[i] = house.cusp;
        }
        Some(wheel)
    } else {
        None
    };

    Chart {
        planets: normalize_planets(raw.get("planets"), cusps.as_ref()),
        houses,
        aspects: normalize_aspects(raw.get("aspects")),
        asteroids: normalize_asteroids(raw.get("asteroids"), cusps.as_ref()),
        angles: normalize_angles(raw.get("angles")),
    }
}

// ---------------------------
// ## Section ingestion
// ---------------------------

fn normalize_planets(section: Option<&Value>, cusps: Option<&[f64; 12]>) -> Vec<Planet> {
    match SectionShape::of(section) {
        SectionShape::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object())
            .map(|entry| planet_from_entry(entry, None, cusps))
            .collect(),
        SectionShape::Record(entries) => entries
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_object()
                    .map(|entry| planet_from_entry(entry, Some(key), cusps))
            })
            .collect(),
        SectionShape::Missing => Vec::new(),
    }
}

fn planet_from_entry(
    entry: &Map<String, Value>,
    key: Option<&str>,
    cusps: Option<&[f64; 12]>,
) -> Planet {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| key.map(capitalize))
        .unwrap_or_else(|| "Unknown".to_string());

    let position = coerce_f64(entry.get("position"))
        .or_else(|| coerce_f64(entry.get("longitude")))
        .map(|p| p.rem_euclid(360.0));

    let sign = entry
        .get("sign")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| derive_sign(position, coerce_f64(entry.get("degree"))));

    let degree = coerce_f64(entry.get("degree"))
        .or_else(|| position.map(|p| p % 30.0))
        .unwrap_or(0.0);

    let house = entry
        .get("house")
        .and_then(house_label)
        .or_else(|| position.and_then(|p| cusps.map(|c| house_of(p, c))))
        .unwrap_or_else(|| "Unknown".to_string());

    let aspects = entry
        .get("aspects")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Planet {
        name,
        sign,
        degree,
        house,
        position,
        retrograde: entry.get("retrograde").and_then(Value::as_bool).unwrap_or(false),
        aspects,
    }
}

fn normalize_houses(section: Option<&Value>) -> Vec<HousePlacement> {
    match SectionShape::of(section) {
        SectionShape::Array(items) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.as_object().map(|entry| house_from_entry(entry, i)))
            .collect(),
        SectionShape::Record(entries) => entries
            .iter()
            .enumerate()
            .filter_map(|(i, (key, value))| {
                value
                    .as_object()
                    .map(|entry| house_from_keyed_entry(entry, key, i))
            })
            .collect(),
        SectionShape::Missing => Vec::new(),
    }
}

fn house_from_entry(entry: &Map<String, Value>, index: usize) -> HousePlacement {
    let number = coerce_f64(entry.get("number"))
        .map(|n| n as i64)
        .filter(|n| (1..=12).contains(n))
        .unwrap_or(index as i64 + 1) as u8;
    house_with_number(entry, number)
}

fn house_from_keyed_entry(entry: &Map<String, Value>, key: &str, index: usize) -> HousePlacement {
    // Record keys arrive as "1", "house7" and the like; trailing digits win
    // over the insertion order, which is only a fallback.
    let from_key: Option<i64> = {
        let digits: String = key.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok().filter(|n| (1..=12).contains(n))
    };
    let number = coerce_f64(entry.get("number"))
        .map(|n| n as i64)
        .filter(|n| (1..=12).contains(n))
        .or(from_key)
        .unwrap_or(index as i64 + 1) as u8;
    house_with_number(entry, number)
}

fn house_with_number(entry: &Map<String, Value>, number: u8) -> HousePlacement {
    let cusp = coerce_f64(entry.get("cusp"))
        .or_else(|| coerce_f64(entry.get("position")))
        .map(|c| c.rem_euclid(360.0))
        .unwrap_or(0.0);

    let sign = entry
        .get("sign")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| ZodiacSign::from_longitude(cusp).to_string());

    let degree = coerce_f64(entry.get("degree")).unwrap_or(cusp % 30.0);

    let ruler = entry
        .get("ruler")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| match ZodiacSign::from_name(&sign) {
            Some(parsed) => parsed.ruler().to_string(),
            None => "Unknown".to_string(),
        });

    HousePlacement {
        number,
        sign,
        degree,
        cusp,
        ruler,
    }
}

fn normalize_aspects(section: Option<&Value>) -> Vec<AspectEntry> {
    // Aspects only ever arrive as an array; the record form is not a shape
    // the upstream service produces for them.
    let items = match section.and_then(Value::as_array) {
        Some(items) => items,
        None => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| item.as_object())
        .map(|entry| {
            let kind = entry
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| "Unknown".to_string());

            let orb = coerce_f64(entry.get("orb")).unwrap_or_else(|| {
                AspectKind::from_name(&kind)
                    .map(|k| k.default_orb())
                    .unwrap_or(8.0)
            });

            AspectEntry {
                planet1: string_or_unknown(entry.get("planet1")),
                planet2: string_or_unknown(entry.get("planet2")),
                kind,
                orb,
                applying: string_or_unknown(entry.get("applying")),
            }
        })
        .collect()
}

fn normalize_asteroids(section: Option<&Value>, cusps: Option<&[f64; 12]>) -> Vec<Asteroid> {
    // Same ingestion as planets, minus the planet-only fields.
    normalize_planets(section, cusps)
        .into_iter()
        .map(|p| Asteroid {
            name: p.name,
            sign: p.sign,
            degree: p.degree,
            house: p.house,
        })
        .collect()
}

fn normalize_angles(section: Option<&Value>) -> Vec<Angle> {
    match SectionShape::of(section) {
        SectionShape::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object())
            .map(|entry| angle_from_entry(entry, None))
            .collect(),
        SectionShape::Record(entries) => entries
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_object()
                    .map(|entry| angle_from_entry(entry, Some(key)))
            })
            .collect(),
        SectionShape::Missing => Vec::new(),
    }
}

fn angle_from_entry(entry: &Map<String, Value>, key: Option<&str>) -> Angle {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| key.map(angle_name))
        .unwrap_or_else(|| "Unknown".to_string());

    let position = coerce_f64(entry.get("position"))
        .or_else(|| coerce_f64(entry.get("longitude")))
        .map(|p| p.rem_euclid(360.0));

    let sign = entry
        .get("sign")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| derive_sign(position, coerce_f64(entry.get("degree"))));

    let degree = coerce_f64(entry.get("degree"))
        .or_else(|| position.map(|p| p % 30.0))
        .unwrap_or(0.0);

    Angle {
        name,
        sign,
        degree,
        position,
    }
}

/// Expand the common short keys for chart angles; anything else is just
/// capitalized like a planet key.
fn angle_name(key: &str) -> String {
    match key.trim().to_ascii_lowercase().as_str() {
        "asc" | "ascendant" => "Ascendant".to_string(),
        "mc" | "midheaven" => "Midheaven".to_string(),
        "dsc" | "desc" | "descendant" => "Descendant".to_string(),
        "ic" | "imum coeli" | "imumcoeli" => "IC".to_string(),
        _ => capitalize(key),
    }
}

// ---------------------------
// ## Coercion helpers
// ---------------------------

/// JSON number or numeric string to f64. Anything else is a shape error and
/// coerces to `None` so the caller's default applies.
fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_or_unknown(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "Unknown".to_string())
}

fn derive_sign(position: Option<f64>, degree: Option<f64>) -> String {
    match position.or(degree) {
        Some(longitude) => ZodiacSign::from_longitude(longitude).to_string(),
        None => "Unknown".to_string(),
    }
}

/// A caller-supplied house field may be a ready-made label or a bare number.
/// Numbers outside the twelve-house wheel are no label at all.
fn house_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => n
            .as_f64()
            .map(|f| f as i64)
            .filter(|n| (1..=12).contains(n))
            .map(|n| ordinal(n as u32)),
        _ => None,
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => "Unknown".to_string(),
    }
}

/// Which house an absolute longitude falls in, given the twelve cusps. The
/// wheel wraps: the last house runs from its cusp through 360° back around to
/// the first cusp.
fn house_of(position: f64, cusps: &[f64; 12]) -> String {
    let position = position.rem_euclid(360.0);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let contains = if start <= end {
            start <= position && position < end
        } else {
            // Wraparound segment crossing 360° → 0°.
            position >= start || position < end
        };
        if contains {
            return ordinal(i as u32 + 1);
        }
    }
    "Unknown".to_string()
}

/// Ordinal label for a house number. 11–13 take "th" before the last-digit
/// rule applies.
pub fn ordinal(n: u32) -> String {
    let suffix = match n % 100 {
        11 | 12 | 13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn empty_input_yields_all_sections_as_empty_vecs() {
        let chart = normalize(&json!({}));
        assert!(chart.planets.is_empty());
        assert!(chart.houses.is_empty());
        assert!(chart.aspects.is_empty());
        assert!(chart.asteroids.is_empty());
        assert!(chart.angles.is_empty());
    }

    #[test]
    fn degree_and_sign_derive_from_absolute_position() {
        let chart = normalize(&json!({
            "planets": [{ "name": "Mars", "position": 150.5 }]
        }));
        let mars = &chart.planets[0];
        assert_relative_eq!(mars.degree, 0.5, epsilon = 1e-9);
        assert_eq!(mars.sign, "Virgo");
        assert_relative_eq!(mars.position.unwrap(), 150.5, epsilon = 1e-9);
    }

    #[test]
    fn record_shaped_planets_become_array_entries() {
        let chart = normalize(&json!({
            "planets": { "sun": { "position": 88.42 } }
        }));
        assert_eq!(chart.planets.len(), 1);
        let sun = &chart.planets[0];
        assert_eq!(sun.name, "Sun");
        assert_eq!(sun.sign, "Gemini");
        assert_relative_eq!(sun.degree, 28.42, epsilon = 1e-9);
    }

    #[test]
    fn normalize_leaves_its_input_untouched() {
        let raw = json!({
            "planets": { "moon": { "position": 200.0, "retrograde": false } },
            "aspects": [{ "planet1": "Moon", "planet2": "Saturn", "type": "Trine" }]
        });
        let snapshot = raw.clone();
        let first = normalize(&raw);
        let second = normalize(&raw);
        assert_eq!(first, second);
        assert_eq!(raw, snapshot);
    }

    #[test]
    fn aspect_orb_defaults_by_kind() {
        let chart = normalize(&json!({
            "aspects": [
                { "planet1": "Venus", "planet2": "Mars", "type": "Square" },
                { "planet1": "Sun", "planet2": "Moon", "type": "Conjunction" },
                { "planet1": "Sun", "planet2": "Pluto", "type": "Opposition" },
            ]
        }));
        assert_relative_eq!(chart.aspects[0].orb, 8.0);
        assert_relative_eq!(chart.aspects[1].orb, 10.0);
        assert_relative_eq!(chart.aspects[2].orb, 10.0);
    }

    #[test]
    fn explicit_orb_wins_even_as_a_numeric_string() {
        let chart = normalize(&json!({
            "aspects": [
                { "planet1": "Venus", "planet2": "Mars", "type": "Square", "orb": "5.2" },
                { "planet1": "Sun", "planet2": "Moon", "type": "Conjunction", "orb": 2.5 },
            ]
        }));
        assert_relative_eq!(chart.aspects[0].orb, 5.2);
        assert_relative_eq!(chart.aspects[1].orb, 2.5);
    }

    #[test]
    fn aspect_fields_default_to_unknown() {
        let chart = normalize(&json!({ "aspects": [{}] }));
        let aspect = &chart.aspects[0];
        assert_eq!(aspect.planet1, "Unknown");
        assert_eq!(aspect.planet2, "Unknown");
        assert_eq!(aspect.kind, "Unknown");
        assert_relative_eq!(aspect.orb, 8.0);
    }

    #[test]
    fn house_ruler_derives_from_cusp_sign() {
        let chart = normalize(&json!({
            "houses": [
                { "number": 1, "cusp": 12.0 },
                { "number": 2, "cusp": 47.0 },
            ]
        }));
        assert_eq!(chart.houses[0].sign, "Aries");
        assert_eq!(chart.houses[0].ruler, "Mars");
        assert_eq!(chart.houses[1].sign, "Taurus");
        assert_eq!(chart.houses[1].ruler, "Venus");
    }

    #[test]
    fn planets_land_in_houses_via_cusp_lookup() {
        let houses: Vec<_> = (0..12)
            .map(|i| json!({ "number": i + 1, "cusp": (i * 30) as f64 }))
            .collect();
        let chart = normalize(&json!({
            "houses": houses,
            "planets": [
                { "name": "Sun", "position": 15.0 },
                { "name": "Moon", "position": 355.0 },
            ]
        }));
        assert_eq!(chart.planets[0].house, "1st");
        assert_eq!(chart.planets[1].house, "12th");
    }

    #[test]
    fn cusp_wraparound_places_positions_across_zero() {
        // First cusp sits late in the zodiac, so the wheel crosses 0° Aries
        // inside the first house.
        let houses: Vec<_> = (0..12)
            .map(|i| json!({ "number": i + 1, "cusp": ((350 + i * 30) % 360) as f64 }))
            .collect();
        let chart = normalize(&json!({
            "houses": houses,
            "planets": [{ "name": "Mercury", "position": 5.0 }]
        }));
        assert_eq!(chart.planets[0].house, "1st");
    }

    #[test]
    fn incomplete_wheel_leaves_house_unknown() {
        let chart = normalize(&json!({
            "houses": [{ "number": 1, "cusp": 0.0 }],
            "planets": [{ "name": "Sun", "position": 15.0 }]
        }));
        assert_eq!(chart.planets[0].house, "Unknown");
    }

    #[test]
    fn caller_supplied_house_number_formats_as_ordinal() {
        let chart = normalize(&json!({
            "planets": [
                { "name": "Venus", "house": 3 },
                { "name": "Mars", "house": "10th" },
            ]
        }));
        assert_eq!(chart.planets[0].house, "3rd");
        assert_eq!(chart.planets[1].house, "10th");
    }

    #[test]
    fn out_of_wheel_house_numbers_fall_back_to_unknown() {
        let chart = normalize(&json!({
            "planets": [
                { "name": "Venus", "house": 0 },
                { "name": "Mars", "house": -3 },
                { "name": "Jupiter", "house": 13 },
            ]
        }));
        assert_eq!(chart.planets[0].house, "Unknown");
        assert_eq!(chart.planets[1].house, "Unknown");
        assert_eq!(chart.planets[2].house, "Unknown");
    }

    #[test]
    fn record_shaped_houses_take_number_from_key() {
        let chart = normalize(&json!({
            "houses": { "house7": { "cusp": 200.0 } }
        }));
        assert_eq!(chart.houses[0].number, 7);
        assert_eq!(chart.houses[0].sign, "Libra");
    }

    #[test]
    fn angle_keys_expand_to_full_names() {
        let chart = normalize(&json!({
            "angles": {
                "asc": { "position": 95.0 },
                "mc": { "position": 2.0 },
            }
        }));
        let names: Vec<_> = chart.angles.iter().map(|a| a.name.as_str()).collect();
        assert!(names.contains(&"Ascendant"));
        assert!(names.contains(&"Midheaven"));
    }

    #[test]
    fn malformed_sections_degrade_to_empty() {
        let chart = normalize(&json!({
            "planets": "not a section",
            "aspects": 42,
            "houses": null,
        }));
        assert!(chart.planets.is_empty());
        assert!(chart.aspects.is_empty());
        assert!(chart.houses.is_empty());
    }

    #[test]
    fn ordinal_suffixes_handle_teens() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
    }
}
