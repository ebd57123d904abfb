// src/validate.rs
//
// Structural gate in front of the normalizer. The check is permissive on
// vocabulary and strict only on shape: it decides whether caller-supplied
// data is worth normalizing at all, or whether the bundled sample chart
// should stand in.

use serde_json::Value;

use super::*;

const SECTION_KEYS: [&str; 5] = ["planets", "houses", "aspects", "asteroids", "angles"];

/// Proof that a raw value passed the structural checks. Borrowed so the
/// caller's value is never cloned just to be inspected.
#[derive(Debug, Clone, Copy)]
pub struct ValidChart<'a> {
    raw: &'a Value,
}

impl<'a> ValidChart<'a> {
    pub fn raw(&self) -> &'a Value {
        self.raw
    }

    pub fn chart(&self) -> Chart {
        normalize(self.raw)
    }
}

/// Structural validation of a chart-like value.
///
/// Accepts any object carrying at least one recognized section. Houses sent
/// as an array must form a plausible wheel (1 to 12 entries, integer house
/// numbers in 1..=12, cusps within 0..=360). Planet and asteroid fields are
/// optional but type-checked when present. Returns `None` on any structural
/// failure; nothing here panics or allocates an error.
pub fn validate(input: &Value) -> Option<ValidChart<'_>> {
    let object = input.as_object()?;

    if !SECTION_KEYS.iter().any(|key| object.contains_key(*key)) {
        return None;
    }

    if let Some(houses) = object.get("houses") {
        if let Some(items) = houses.as_array() {
            if items.is_empty() || items.len() > 12 {
                return None;
            }
            for item in items {
                let entry = item.as_object()?;
                let number = entry.get("number")?.as_i64()?;
                if !(1..=12).contains(&number) {
                    return None;
                }
                let cusp = entry.get("cusp")?.as_f64()?;
                if !(0.0..=360.0).contains(&cusp) {
                    return None;
                }
            }
        }
    }

    for key in ["planets", "asteroids"] {
        if let Some(section) = object.get(key) {
            let entries: Vec<&Value> = match section {
                Value::Array(items) => items.iter().collect(),
                Value::Object(record) => record.values().collect(),
                _ => return None,
            };
            for entry in entries {
                let body = entry.as_object()?;
                if let Some(position) = body.get("position") {
                    let p = position.as_f64()?;
                    if !(0.0..=360.0).contains(&p) {
                        return None;
                    }
                }
                if let Some(retrograde) = body.get("retrograde") {
                    if !retrograde.is_boolean() {
                        return None;
                    }
                }
            }
        }
    }

    Some(ValidChart { raw: input })
}

/// Validate-then-normalize, substituting the bundled sample chart when the
/// input fails the structural checks. This is the one "failure" path in the
/// whole subsystem and it is silent by design.
pub fn chart_or_sample(input: &Value) -> Chart {
    match validate(input) {
        Some(valid) => valid.chart(),
        None => sample::chart(),
    }
}
