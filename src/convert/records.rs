//! Record builder: strict rows in, per-film award-label map out.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use tracing::warn;

use crate::category;
use crate::rows;
use crate::titles;

/// Award labels accumulated for one film. Keyed externally by the
/// title-sort form of the film's title; labels keep arrival order and are
/// only sorted at emission.
#[derive(Debug, Default)]
pub struct FilmRecord {
    labels: Vec<String>,
}

impl FilmRecord {
    pub fn push_label(&mut self, label: String) {
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// A film with any "Short" award counts as a short, even when it also
    /// holds feature-category awards.
    pub fn is_short(&self) -> bool {
        self.labels.iter().any(|label| label.contains("Short"))
    }
}

pub type FilmMap = BTreeMap<String, FilmRecord>;

/// Fold strict rows into the film map. Unreadable nominee fields are
/// logged and skipped; the category row keeps going.
pub fn accumulate(input_rows: &[Vec<String>]) -> Result<FilmMap> {
    let mut films = FilmMap::new();
    for row in input_rows {
        let Some((name_field, nominee_fields)) = row.split_first() else {
            continue;
        };
        let name = name_field.trim();
        if name.is_empty() {
            continue;
        }
        for field in nominee_fields {
            let parsed = rows::decode_nominee(field)
                .and_then(|fields| parse_nominee(name, &fields));
            match parsed {
                Ok(Some((film, label))) => {
                    films
                        .entry(titles::title_prep(&film))
                        .or_default()
                        .push_label(label);
                }
                Ok(None) => {}
                Err(e) => warn!("skipping nominee in {}: {}", name, e),
            }
        }
    }
    Ok(films)
}

fn parse_nominee(name: &str, fields: &[String]) -> Result<Option<(String, String)>> {
    match fields {
        [] => Ok(None),
        [film] if film.trim().is_empty() => Ok(None),
        [film] => Ok(Some((film.clone(), name.to_string()))),
        [subject, film] => Ok(Some((film.clone(), award_label(name, subject)))),
        _ => bail!("nominee has {} fields, expected 1 or 2", fields.len()),
    }
}

/// Compose the display label for a subject-bearing nomination. Song titles
/// are re-quoted so they keep their identity once labels are joined into
/// one comma-separated cell.
pub fn award_label(name: &str, subject: &str) -> String {
    if category::is_song(name) {
        format!("{} (\"{}\")", name, subject)
    } else {
        format!("{} ({})", name, subject)
    }
}
