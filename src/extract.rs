//! Extractor: turn the nominations table of a Wikipedia awards page into
//! category listings, then into strict intermediate rows.

use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::category::{self, Shape};
use crate::rows;

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table.wikitable").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody tr td").unwrap());
static NAME_DIV: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div").unwrap());
static ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ul li").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static ITALIC: LazyLock<Selector> = LazyLock::new(|| Selector::parse("i").unwrap());

static FOOTNOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[a-z0-9]+\]").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// One nominee within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nominee {
    Film(String),
    Pair { subject: String, film: String },
}

/// A category block in page order: award name plus its nominees.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub award: String,
    pub nominees: Vec<Nominee>,
}

/// Pull every category listing out of a nominations page.
///
/// A nominee entry that cannot be read is logged and skipped; a category
/// name outside the classification table aborts the run before any output.
pub fn extract_listings(html: &str) -> Result<Vec<CategoryListing>> {
    let doc = Html::parse_document(html);
    let table = find_nominations_table(&doc)?;

    let mut listings = Vec::new();
    for cell in table.select(&CELL) {
        let Some(name_div) = cell.select(&NAME_DIV).next() else {
            if cell.select(&ITEM).next().is_some() {
                bail!("category cell has nominees but no name div");
            }
            continue;
        };
        let award = element_text(&name_div);
        debug!("{}", award);
        let shape = category::classify(&award)?;

        let mut nominees = Vec::new();
        for item in cell.select(&ITEM) {
            match extract_nominee(&item, shape) {
                Ok(nominee) => {
                    debug!("    {:?}", nominee);
                    nominees.push(nominee);
                }
                Err(e) => warn!("can't understand nominee in {}: {}", award, e),
            }
        }
        listings.push(CategoryListing { award, nominees });
    }
    Ok(listings)
}

/// Serialize listings as strict rows, shortening award names on the way.
pub fn listings_to_rows(listings: &[CategoryListing]) -> Result<Vec<Vec<String>>> {
    let mut out = Vec::with_capacity(listings.len());
    for listing in listings {
        let mut row = vec![category::simplify(&listing.award).to_string()];
        for nominee in &listing.nominees {
            let field = match nominee {
                Nominee::Film(film) => rows::encode_nominee(&[film.as_str()])?,
                Nominee::Pair { subject, film } => {
                    rows::encode_nominee(&[subject.as_str(), film.as_str()])?
                }
            };
            row.push(field);
        }
        out.push(row);
    }
    Ok(out)
}

/// The page usually carries several wikitables (winners grid, summary
/// boxes); the nominations table is the one with a Best Picture cell.
fn find_nominations_table(doc: &Html) -> Result<ElementRef<'_>> {
    doc.select(&TABLE)
        .find(|table| {
            table.select(&CELL).any(|cell| {
                cell.select(&NAME_DIV)
                    .next()
                    .is_some_and(|div| element_text(&div) == "Best Picture")
            })
        })
        .context("no wikitable with a Best Picture cell; the page structure must have changed")
}

fn extract_nominee(item: &ElementRef<'_>, shape: Shape) -> Result<Nominee> {
    match shape {
        Shape::TitleOnly => {
            let title = item
                .select(&LINK)
                .next()
                .or_else(|| item.select(&ITALIC).next())
                .map(|el| element_text(&el))
                .unwrap_or_else(|| element_text(item));
            Ok(Nominee::Film(title))
        }
        Shape::SubjectTitle => extract_pair(item),
        Shape::Song => {
            let (subject, film) = parse_song_entry(&element_text(item))?;
            Ok(Nominee::Pair { subject, film })
        }
    }
}

/// Markup varies between pages: some entries link both the person and the
/// film, others link the person and italicize the film. Strategies are
/// tried in that order of specificity.
fn extract_pair(item: &ElementRef<'_>) -> Result<Nominee> {
    let links: Vec<_> = item.select(&LINK).collect();
    if links.len() >= 2 {
        return Ok(Nominee::Pair {
            subject: element_text(&links[0]),
            film: element_text(&links[1]),
        });
    }
    if let (Some(link), Some(italic)) = (links.first(), item.select(&ITALIC).next()) {
        return Ok(Nominee::Pair {
            subject: element_text(link),
            film: element_text(&italic),
        });
    }
    bail!("expected a subject and a film, found {} link(s)", links.len())
}

/// Song entries read `"<song>" from <film> – <extra>`: truncate at the
/// dash, drop the quotes, split on the literal `" from "`.
pub fn parse_song_entry(raw: &str) -> Result<(String, String)> {
    let head = match raw.find(['\u{2013}', '\u{2014}']) {
        Some(dash) => &raw[..dash],
        None => raw,
    };
    let cleaned = head.replace('"', "");
    let (song, film) = cleaned
        .split_once(" from ")
        .with_context(|| format!("song entry has no \" from \" separator: {:?}", raw))?;
    Ok((song.trim().to_string(), film.trim().to_string()))
}

/// Collapse an element's text nodes into one tidy string, dropping
/// footnote markers like `[a]` or `[12]`.
fn element_text(el: &ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    let no_refs = FOOTNOTE_RE.replace_all(&raw, "");
    WS_RE.replace_all(no_refs.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<CategoryListing> {
        let html = std::fs::read_to_string("tests/fixtures/nominations.html").unwrap();
        extract_listings(&html).unwrap()
    }

    fn listing<'a>(listings: &'a [CategoryListing], award: &str) -> &'a CategoryListing {
        listings
            .iter()
            .find(|l| l.award == award)
            .unwrap_or_else(|| panic!("no listing for {}", award))
    }

    #[test]
    fn finds_the_nominations_table() {
        // The fixture has a decoy wikitable before the real one.
        let listings = fixture();
        assert_eq!(listings.len(), 5);
        assert_eq!(listings[0].award, "Best Picture");
    }

    #[test]
    fn title_only_falls_back_through_link_italic_text() {
        let listings = fixture();
        let picture = listing(&listings, "Best Picture");
        assert_eq!(
            picture.nominees,
            vec![
                Nominee::Film("Coco".to_string()),
                Nominee::Film("The Shape of Water".to_string()),
                Nominee::Film("Phantom Thread".to_string()),
                Nominee::Film("Dunkirk".to_string()),
            ]
        );
    }

    #[test]
    fn subject_title_handles_both_markup_variants() {
        let listings = fixture();
        let actor = listing(&listings, "Best Actor");
        assert_eq!(
            actor.nominees,
            vec![
                Nominee::Pair {
                    subject: "Gary Oldman".to_string(),
                    film: "Darkest Hour".to_string(),
                },
                Nominee::Pair {
                    subject: "Daniel Day-Lewis".to_string(),
                    film: "Phantom Thread".to_string(),
                },
            ]
        );
    }

    #[test]
    fn linkless_subject_entry_skipped_but_siblings_kept() {
        // The Best Actor cell has a third entry with no links at all; it
        // must be dropped without losing the first two.
        let listings = fixture();
        assert_eq!(listing(&listings, "Best Actor").nominees.len(), 2);
    }

    #[test]
    fn song_entries_split_on_from() {
        let listings = fixture();
        let song = listing(&listings, "Best Original Song");
        assert_eq!(
            song.nominees,
            vec![Nominee::Pair {
                subject: "Remember Me".to_string(),
                film: "Coco".to_string(),
            }]
        );
    }

    #[test]
    fn parse_song_entry_examples() {
        let (song, film) =
            parse_song_entry("\"Remember Me\" from Coco \u{2013} Music and Lyrics").unwrap();
        assert_eq!(song, "Remember Me");
        assert_eq!(film, "Coco");

        let (song, film) = parse_song_entry("\"Mighty River\" from Mudbound").unwrap();
        assert_eq!(song, "Mighty River");
        assert_eq!(film, "Mudbound");

        assert!(parse_song_entry("\"Stand Up for Something\" \u{2013} Marshall").is_err());
    }

    #[test]
    fn unknown_category_aborts() {
        let html = r#"<table class="wikitable"><tbody><tr>
            <td><div>Best Picture</div><ul><li><a>Coco</a></li></ul></td>
            <td><div>Best Stunt Work</div><ul><li><a>Atomic Blonde</a></li></ul></td>
            </tr></tbody></table>"#;
        let err = extract_listings(html).unwrap_err();
        assert!(err.to_string().contains("Best Stunt Work"));
    }

    #[test]
    fn rows_carry_simplified_names_and_encoded_pairs() {
        let listings = fixture();
        let out = listings_to_rows(&listings).unwrap();
        let short_row = out
            .iter()
            .find(|r| r[0] == "Best Animated Short")
            .expect("short category row");
        assert_eq!(short_row[1], "Dear Basketball");
        let actor_row = out.iter().find(|r| r[0] == "Best Actor").unwrap();
        assert_eq!(actor_row[1], "Gary Oldman,Darkest Hour");
    }

    #[test]
    fn footnote_markers_are_stripped() {
        let html = r#"<table class="wikitable"><tbody><tr>
            <td><div>Best Picture</div><ul><li>Dunkirk<sup>[a]</sup></li></ul></td>
            </tr></tbody></table>"#;
        let listings = extract_listings(html).unwrap();
        assert_eq!(listings[0].nominees, vec![Nominee::Film("Dunkirk".to_string())]);
    }
}
