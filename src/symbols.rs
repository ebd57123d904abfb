// src/symbols.rs
//
// Display glyphs for the closed astrological vocabularies, plus the small
// planet-in-sign interpretation table. Lookups are case-insensitive on the
// name strings the normalizer leaves in place, and every unknown name maps
// to a fallback glyph rather than an error.

/// Glyph for a planet name. Unknown planets render as `●`.
pub fn planet_glyph(name: &str) -> &'static str {
    match name.trim().to_ascii_lowercase().as_str() {
        "sun" => "☉",
        "moon" => "☽",
        "mercury" => "☿",
        "venus" => "♀",
        "mars" => "♂",
        "jupiter" => "♃",
        "saturn" => "♄",
        "uranus" => "♅",
        "neptune" => "♆",
        "pluto" => "♇",
        "north node" | "rahu" => "☊",
        "south node" | "ketu" => "☋",
        "chiron" => "⚷",
        _ => "●", // Fallback
    }
}

/// Glyph for a zodiac sign. Unknown signs render as `○`.
pub fn sign_glyph(name: &str) -> &'static str {
    match name.trim().to_ascii_lowercase().as_str() {
        "aries" => "♈",
        "taurus" => "♉",
        "gemini" => "♊",
        "cancer" => "♋",
        "leo" => "♌",
        "virgo" => "♍",
        "libra" => "♎",
        "scorpio" => "♏",
        "sagittarius" => "♐",
        "capricorn" => "♑",
        "aquarius" => "♒",
        "pisces" => "♓",
        _ => "○", // Fallback
    }
}

/// Glyph for an aspect type. Unknown types render as `◇`.
pub fn aspect_glyph(name: &str) -> &'static str {
    match name.trim().to_ascii_lowercase().as_str() {
        "conjunction" => "☌",
        "opposition" => "☍",
        "trine" => "△",
        "square" => "□",
        "sextile" => "⚹",
        "quincunx" => "⚻",
        "semisextile" => "⚺",
        "semisquare" => "∠",
        "sesquiquadrate" => "⚼",
        "quintile" => "Q",
        "biquintile" => "bQ",
        _ => "◇", // Fallback
    }
}

/// Glyph for an asteroid name, sharing the planet fallback `●`.
pub fn asteroid_glyph(name: &str) -> &'static str {
    match name.trim().to_ascii_lowercase().as_str() {
        "ceres" => "⚳",
        "pallas" => "⚴",
        "juno" => "⚵",
        "vesta" => "⚶",
        "chiron" => "⚷",
        _ => "●", // Fallback
    }
}

/// One-sentence reading for a planet in a sign. Pairs outside the table get
/// the generic "{planet} in {sign}".
pub fn interpretation(planet: &str, sign: &str) -> String {
    let tabulated = match (
        planet.trim().to_ascii_lowercase().as_str(),
        sign.trim().to_ascii_lowercase().as_str(),
    ) {
        ("sun", "aries") => Some("Identity expressed through bold, pioneering action."),
        ("sun", "taurus") => Some("Identity grounded in steadiness and material security."),
        ("sun", "gemini") => Some("Identity animated by curiosity and exchange of ideas."),
        ("sun", "cancer") => Some("Identity rooted in home, memory, and emotional ties."),
        ("sun", "leo") => Some("Identity radiating through creative self-expression."),
        ("sun", "virgo") => Some("Identity refined through service and careful craft."),
        ("sun", "libra") => Some("Identity balanced through partnership and fairness."),
        ("sun", "scorpio") => Some("Identity forged in intensity and transformation."),
        ("sun", "sagittarius") => Some("Identity expanded by exploration and meaning-seeking."),
        ("sun", "capricorn") => Some("Identity built through discipline and ambition."),
        ("sun", "aquarius") => Some("Identity oriented toward innovation and the collective."),
        ("sun", "pisces") => Some("Identity dissolved into imagination and compassion."),
        ("moon", "aries") => Some("Feelings flare quickly and demand direct expression."),
        ("moon", "taurus") => Some("Feelings settle into comfort, routine, and calm."),
        ("moon", "gemini") => Some("Feelings processed by talking and thinking them through."),
        ("moon", "cancer") => Some("Feelings run deep, protective, and tidal."),
        ("moon", "leo") => Some("Feelings warm, dramatic, and loyal at heart."),
        ("moon", "virgo") => Some("Feelings steadied by order, analysis, and usefulness."),
        ("moon", "libra") => Some("Feelings seek harmony and a responsive other."),
        ("moon", "scorpio") => Some("Feelings private, intense, and all-or-nothing."),
        ("moon", "sagittarius") => Some("Feelings lift with freedom, humor, and distance."),
        ("moon", "capricorn") => Some("Feelings contained, dutiful, and slow to trust."),
        ("moon", "aquarius") => Some("Feelings observed from a cool, curious remove."),
        ("moon", "pisces") => Some("Feelings porous, empathic, and dream-tinged."),
        _ => None,
    };
    match tabulated {
        Some(text) => text.to_string(),
        None => format!("{} in {}", planet, sign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vocabularies_resolve_to_glyphs() {
        assert_eq!(planet_glyph("Sun"), "☉");
        assert_eq!(planet_glyph("  pluto "), "♇");
        assert_eq!(sign_glyph("Virgo"), "♍");
        assert_eq!(aspect_glyph("Trine"), "△");
        assert_eq!(asteroid_glyph("Ceres"), "⚳");
    }

    #[test]
    fn unknown_names_fall_back_per_vocabulary() {
        assert_eq!(planet_glyph("Vulcan"), "●");
        assert_eq!(sign_glyph("Ophiuchus"), "○");
        assert_eq!(aspect_glyph("Novile"), "◇");
        assert_eq!(asteroid_glyph("Eris"), "●");
    }

    #[test]
    fn interpretation_falls_back_to_planet_in_sign() {
        assert_eq!(
            interpretation("Sun", "Leo"),
            "Identity radiating through creative self-expression."
        );
        assert_eq!(interpretation("Mercury", "Leo"), "Mercury in Leo");
        assert_eq!(interpretation("Sun", "Ophiuchus"), "Sun in Ophiuchus");
    }
}
