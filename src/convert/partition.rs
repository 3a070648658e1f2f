//! Feature/short partitioning and the two-key ordering used for output.

use tracing::warn;

use super::records::FilmMap;

/// Split films into features and shorts. Films matching neither predicate
/// are reported once and dropped.
pub fn partition(films: &FilmMap) -> (Vec<&str>, Vec<&str>) {
    let mut features = Vec::new();
    let mut shorts = Vec::new();
    let mut missed = Vec::new();
    for (key, record) in films {
        if record.is_short() {
            shorts.push(key.as_str());
        } else if record.count() > 0 {
            features.push(key.as_str());
        } else {
            missed.push(key.as_str());
        }
    }
    if !missed.is_empty() {
        warn!("the following films were missed: {:?}", missed);
    }
    (features, shorts)
}

/// Order films by award count descending, then title-sort key ascending.
/// Film identity is the grouping key, so full ties cannot occur.
pub fn order_films(keys: &mut [&str], films: &FilmMap) {
    keys.sort_by(|a, b| {
        films[*b]
            .count()
            .cmp(&films[*a].count())
            .then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::records::accumulate;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn every_film_lands_in_exactly_one_class() {
        let films = accumulate(&[
            row(&["Best Picture", "Dunkirk", "Get Out"]),
            row(&["Best Animated Short", "Dear Basketball"]),
        ])
        .unwrap();
        let (features, shorts) = partition(&films);
        assert_eq!(features.len() + shorts.len(), films.len());
        assert!(features.iter().all(|f| !shorts.contains(f)));
    }

    #[test]
    fn short_rule_wins_over_feature_membership() {
        let films = accumulate(&[
            row(&["Best Picture", "Coco"]),
            row(&["Best Animated Short Film", "Coco"]),
        ])
        .unwrap();
        let (features, shorts) = partition(&films);
        assert_eq!(shorts, ["Coco"]);
        assert!(features.is_empty());
    }

    #[test]
    fn two_key_sort_counts_then_titles() {
        let films = accumulate(&[
            row(&["Best Picture", "Zeta", "Alpha", "Omega"]),
            row(&["Best Editing", "Zeta", "Alpha"]),
            row(&["Best Sound", "Zeta", "Alpha"]),
        ])
        .unwrap();
        let (mut features, _) = partition(&films);
        order_films(&mut features, &films);
        assert_eq!(features, ["Alpha", "Zeta", "Omega"]);
    }

    #[test]
    fn sort_keys_on_title_sort_form_not_display_form() {
        // "Shape of Water, The" sorts under S, not T.
        let films = accumulate(&[
            row(&["Best Picture", "The Shape of Water", "Phantom Thread", "Zama"]),
        ])
        .unwrap();
        let (mut features, _) = partition(&films);
        order_films(&mut features, &films);
        assert_eq!(features, ["Phantom Thread", "Shape of Water, The", "Zama"]);
    }
}
