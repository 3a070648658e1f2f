//! Tokenizer for the hand-transcribed "loose" format: categories separated
//! by blank lines, one nominee per line, internal commas protected by
//! quoting. Produces the same strict rows the extractor emits.

use anyhow::Result;

use crate::category;
use crate::rows;
use crate::titles;

/// Collapse loose blocks into strict rows.
pub fn prep_text(input: &str) -> Result<Vec<Vec<String>>> {
    let tidy = titles::tidy_punctuation(&input.replace("\r\n", "\n"));
    let mut out = Vec::new();
    for block in tidy.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        out.push(prep_block(block)?);
    }
    Ok(out)
}

fn prep_block(block: &str) -> Result<Vec<String>> {
    let mut lines = block.lines();
    let name = lines.next().unwrap_or("").trim().to_string();
    // Transcriptions quote song titles; drop the quotes so a song line
    // reads like any subject+film line (convert re-quotes the label).
    let strip_song_quotes = category::is_song(&name);

    let mut row = vec![name];
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line = if strip_song_quotes {
            line.replace('"', "")
        } else {
            line.to_string()
        };
        row.push(prep_nominee(&line)?);
    }
    Ok(row)
}

fn prep_nominee(line: &str) -> Result<String> {
    if line.starts_with('"') {
        // A quoted line is a bare film title with an internal comma.
        let film = line.replace('"', "");
        return rows::encode_nominee(&[film.trim()]);
    }
    match line.split_once(',') {
        Some((subject, film)) => {
            let film = film.trim().replace('"', "");
            rows::encode_nominee(&[subject.trim(), film.trim()])
        }
        None => rows::encode_nominee(&[line]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_fixture_collapses_to_strict_rows() {
        let text = std::fs::read_to_string("tests/fixtures/loose.txt").unwrap();
        let out = prep_text(&text).unwrap();
        assert_eq!(out.len(), 3);

        assert_eq!(out[0][0], "Best Picture");
        assert_eq!(out[0][1], "The Shape of Water");
        assert_eq!(out[0][2], "\"Three Billboards Outside Ebbing, Missouri\"");
        assert_eq!(out[0][3], "Dunkirk");

        assert_eq!(out[1][0], "Lead Actor");
        assert_eq!(out[1][1], "Timoth\u{e9}e Chalamet,Call Me by Your Name");
        assert_eq!(out[1][3], "Denzel Washington,\"Roman J. Israel, Esq.\"");

        assert_eq!(out[2][0], "Original Song");
        assert_eq!(out[2][1], "Remember Me,Coco");
        assert_eq!(out[2][2], "Mighty River,Mudbound");
    }

    #[test]
    fn song_block_quotes_stripped() {
        let out = prep_text("Original Song\n\"Remember Me\", Coco\n").unwrap();
        assert_eq!(out[0][1], "Remember Me,Coco");
    }

    #[test]
    fn typographic_quotes_normalized() {
        let out =
            prep_text("Original Song\n\u{201c}Mighty River\u{201d}, Mudbound\n").unwrap();
        assert_eq!(out[0][1], "Mighty River,Mudbound");
    }

    #[test]
    fn quoted_title_line_protects_internal_comma() {
        let out = prep_text(
            "Best Picture\n\"Three Billboards Outside Ebbing, Missouri\"\n",
        )
        .unwrap();
        assert_eq!(out[0][1], "\"Three Billboards Outside Ebbing, Missouri\"");
        assert_eq!(
            rows::decode_nominee(&out[0][1]).unwrap(),
            vec!["Three Billboards Outside Ebbing, Missouri"]
        );
    }

    #[test]
    fn split_only_on_first_comma() {
        let out = prep_text("Lead Actor\nDenzel Washington, \"Roman J. Israel, Esq.\"\n")
            .unwrap();
        assert_eq!(
            rows::decode_nominee(&out[0][1]).unwrap(),
            vec!["Denzel Washington", "Roman J. Israel, Esq."]
        );
    }

    #[test]
    fn blank_edges_and_crlf_tolerated() {
        let out = prep_text("\r\nBest Picture\r\nDunkirk\r\n\r\nLead Actor\r\nGary Oldman, Darkest Hour\r\n").unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1][1], "Gary Oldman,Darkest Hour");
    }
}
