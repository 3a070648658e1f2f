//! Title-sort normalization: "The Jungle Book" sorts as "Jungle Book, The".

const ARTICLES: &[&str] = &["A", "An", "The"];

/// Rewrite a leading article to the back so the title sorts on its first
/// real word. Only the very first whitespace token is examined; internal
/// commas are never touched.
pub fn title_prep(title: &str) -> String {
    let mut words = title.split(' ');
    match words.next() {
        Some(first) if ARTICLES.contains(&first) => {
            let rest = words.collect::<Vec<_>>().join(" ");
            if rest.is_empty() {
                title.to_string()
            } else {
                format!("{}, {}", rest, first)
            }
        }
        _ => title.to_string(),
    }
}

/// Undo `title_prep` for display. Only the very last whitespace token is
/// examined, so titles with internal commas pass through unchanged.
pub fn restore_title(title: &str) -> String {
    let words: Vec<&str> = title.split(' ').collect();
    match words.split_last() {
        Some((last, rest)) if ARTICLES.contains(last) && !rest.is_empty() => {
            let mut restored = format!("{} {}", last, rest.join(" "));
            if restored.ends_with(',') {
                restored.pop();
            }
            restored
        }
        _ => title.to_string(),
    }
}

/// Normalize the typographic punctuation that sneaks into hand
/// transcriptions.
pub fn tidy_punctuation(text: &str) -> String {
    text.replace('\u{2019}', "'")
        .replace('\u{201c}', "\"")
        .replace('\u{201d}', "\"")
}
