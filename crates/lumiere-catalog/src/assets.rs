// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation asset lookups: 3D models by gift name, audio tracks by theme.

use lumiere_core::Theme;

macro_rules! sample_root {
    () => {
        "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0"
    };
}

/// Binary glTF of a named sample model.
macro_rules! sample {
    ($name:literal) => {
        concat!(sample_root!(), "/", $name, "/glTF-Binary/", $name, ".glb")
    };
}

macro_rules! viewer {
    ($file:literal) => {
        concat!("https://modelviewer.dev/shared-assets/models/", $file)
    };
}

const SAMPLE_MODELS: &str = sample_root!();

/// Keyword to model URL. Ordered; the first keyword contained in the
/// lower-cased gift name wins.
pub const MODEL_KEYWORDS: &[(&str, &str)] = &[
    ("iphone", viewer!("Astronaut.glb")),
    ("phone", viewer!("Astronaut.glb")),
    ("mobile", viewer!("Astronaut.glb")),
    ("car", sample!("ToyCar")),
    ("vehicle", sample!("ToyCar")),
    ("buggy", sample!("Buggy")),
    ("truck", sample!("CesiumMilkTruck")),
    ("shoe", sample!("MaterialsVariantsShoe")),
    ("sneaker", sample!("MaterialsVariantsShoe")),
    ("nike", sample!("MaterialsVariantsShoe")),
    ("helmet", sample!("DamagedHelmet")),
    ("bike", sample!("DamagedHelmet")),
    ("corset", sample!("Corset")),
    ("space", viewer!("Astronaut.glb")),
    ("astronaut", viewer!("Astronaut.glb")),
    ("robot", viewer!("RobotExpressive.glb")),
    ("cyborg", viewer!("RobotExpressive.glb")),
    ("camera", sample!("AntiqueCamera")),
    ("photo", sample!("AntiqueCamera")),
    ("chair", viewer!("chair.glb")),
    ("furniture", viewer!("chair.glb")),
    ("food", sample!("Avocado")),
    ("burger", sample!("Avocado")),
    ("avocado", sample!("Avocado")),
    ("mixer", viewer!("mixer.glb")),
    ("lantern", sample!("Lantern")),
    ("light", sample!("Lantern")),
    ("lamp", sample!("Lantern")),
    ("duck", sample!("Duck")),
    ("radio", sample!("BoomBox")),
    ("music", sample!("BoomBox")),
    ("speaker", sample!("BoomBox")),
    ("audio", sample!("BoomBox")),
];

/// Model URL for a gift name, if any keyword matches.
pub fn model_url(gift_name: &str) -> Option<&'static str> {
    let lower = gift_name.to_lowercase();
    MODEL_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, url)| *url)
}

/// Whether `url` points at the shared sample-model repository.
pub fn is_sample_model(url: &str) -> bool {
    url.starts_with(SAMPLE_MODELS)
}

/// Festive background track.
pub const FESTIVE_TRACK: &str = "https://actions.google.com/sounds/v1/holidays/jingle_bells.ogg";
/// Track for romantic recipients.
pub const ROMANTIC_TRACK: &str = "/romantic.mp3";
/// Track for every other theme.
pub const OTHER_TRACK: &str = "/other.mp3";

/// Audio track for a gift theme. Luxury has no dedicated track and keeps
/// the festive one.
pub fn audio_track(theme: Theme) -> &'static str {
    audio_track_for_mood(&theme.to_string())
}

/// Audio track for a named mood. Unknown moods fall back to the festive track.
pub fn audio_track_for_mood(mood: &str) -> &'static str {
    match mood.trim().to_lowercase().as_str() {
        "festive" => FESTIVE_TRACK,
        "romantic" => ROMANTIC_TRACK,
        "whimsical" | "cosmic" | "tech" | "classic" | "inspiration" => OTHER_TRACK,
        _ => FESTIVE_TRACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_keyword_wins() {
        // "iphone" precedes "phone" and "space".
        assert_eq!(
            model_url("iPhone 17 Pro Max Titanium"),
            Some("https://modelviewer.dev/shared-assets/models/Astronaut.glb")
        );
        assert!(model_url("Futuristic Cyber Truck").unwrap().contains("CesiumMilkTruck"));
        assert!(model_url("Toy Car").unwrap().contains("ToyCar"));
    }

    #[test]
    fn sample_urls_expand_to_binary_gltf() {
        assert_eq!(
            model_url("Toy Car"),
            Some(
                "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0\
                 /ToyCar/glTF-Binary/ToyCar.glb"
            )
        );
        assert_eq!(
            model_url("Stand Mixer"),
            Some("https://modelviewer.dev/shared-assets/models/mixer.glb")
        );
        assert!(MODEL_KEYWORDS.iter().all(|(_, url)| {
            url.starts_with(SAMPLE_MODELS) || url.starts_with("https://modelviewer.dev/")
        }));
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert!(model_url("The LANTERN of Eternal Love").unwrap().contains("Lantern"));
        assert!(model_url("A Cute Robot Guardian").unwrap().contains("RobotExpressive"));
        assert!(model_url("Designer Sneakers").unwrap().contains("Shoe"));
    }

    #[test]
    fn abstract_gifts_have_no_model() {
        assert_eq!(model_url("A Year of Serenity"), None);
        assert_eq!(model_url("The Gift of Wisdom"), None);
        assert_eq!(model_url("Retro BoomBox"), None);
    }

    #[test]
    fn sample_model_detection() {
        assert!(is_sample_model(model_url("Retro Radio").unwrap()));
        assert!(!is_sample_model(model_url("Modern Chair").unwrap()));
        assert!(!is_sample_model(model_url("High-Tech Space Astronaut Suit").unwrap()));
    }

    #[test]
    fn audio_by_theme_and_mood() {
        assert_eq!(audio_track(Theme::Festive), FESTIVE_TRACK);
        assert_eq!(audio_track(Theme::Luxury), FESTIVE_TRACK);
        assert_eq!(audio_track(Theme::Tech), OTHER_TRACK);
        assert_eq!(audio_track_for_mood("Romantic"), ROMANTIC_TRACK);
        assert_eq!(audio_track_for_mood("cosmic"), OTHER_TRACK);
        assert_eq!(audio_track_for_mood("unknown"), FESTIVE_TRACK);
    }
}
