use anyhow::{bail, Result};

/// What each nominee entry in a category carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Film title only.
    TitleOnly,
    /// Person plus film (directors, acting categories).
    SubjectTitle,
    /// Song title plus film; the song title stays quote-wrapped in labels.
    Song,
}

const TITLE_ONLY: &[&str] = &[
    "Best Picture",
    "Best Original Screenplay",
    "Best Adapted Screenplay",
    "Best International Feature Film",
    "Best Cinematography",
    "Best Costume Design",
    "Best Production Design",
    "Best Makeup and Hairstyling",
    "Best Sound",
    "Best Original Score",
    "Best Film Editing",
    "Best Visual Effects",
    "Best Animated Feature Film",
    "Best Animated Short Film",
    "Best Documentary Feature",
    "Best Documentary Short Subject",
    "Best Live Action Short Film",
];

const SUBJECT_TITLE: &[&str] = &[
    "Best Director",
    "Best Actor",
    "Best Actress",
    "Best Supporting Actor",
    "Best Supporting Actress",
];

const SONG: &[&str] = &["Best Original Song"];

/// Shorter spreadsheet-friendly names for the wordier categories.
const REMAP: &[(&str, &str)] = &[
    ("Best Makeup and Hairstyling", "Best Makeup"),
    ("Best Film Editing", "Best Editing"),
    ("Best Animated Feature Film", "Best Animated Feature"),
    ("Best Animated Short Film", "Best Animated Short"),
    ("Best Documentary Feature", "Best Documentary"),
    ("Best Documentary Short Subject", "Best Short Documentary"),
    ("Best Live Action Short Film", "Best Live Short"),
    ("Best Supporting Actor", "Supporting Actor"),
    ("Best Supporting Actress", "Supporting Actress"),
];

/// Classify a category name into its nominee shape.
///
/// The three sets partition every known category; a name outside all of
/// them means the source page changed shape, which the run cannot safely
/// interpret, so this is fatal rather than skippable.
pub fn classify(name: &str) -> Result<Shape> {
    if TITLE_ONLY.contains(&name) {
        Ok(Shape::TitleOnly)
    } else if SUBJECT_TITLE.contains(&name) {
        Ok(Shape::SubjectTitle)
    } else if SONG.contains(&name) {
        Ok(Shape::Song)
    } else {
        bail!("not sure how to handle category {:?}", name)
    }
}

/// Shorten verbose category names for presentation; unmapped names pass
/// through unchanged.
pub fn simplify(name: &str) -> &str {
    REMAP
        .iter()
        .find(|(long, _)| *long == name)
        .map(|(_, short)| *short)
        .unwrap_or(name)
}

/// The song category under both its scraped and hand-transcribed names.
pub fn is_song(name: &str) -> bool {
    name == "Best Original Song" || name == "Original Song"
}
