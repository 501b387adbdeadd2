//! Star-rating fill computation and submitter-name parsing.
//!
//! Rating buttons are named `star-<rating>-<pk>` so the server can recover
//! both values from the submit event alone.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static SUBMITTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^star-(\d+)-(\d+)$").unwrap());

/// Which of `num_stars` stars are lit for `rating`.
///
/// Stars `1..=rating` are lit; a rating beyond `num_stars` simply lights
/// them all.
pub fn fill_levels(rating: u8, num_stars: u8) -> Vec<bool> {
    (1..=num_stars).map(|star| star <= rating).collect()
}

/// Form name of the rating button for star `star` on film `pk`.
pub fn submitter_name(star: u8, pk: u32) -> String {
    format!("star-{}-{}", star, pk)
}

/// Recover `(rating, film_pk)` from a rating button's submitter name.
///
/// Malformed names are logged and rejected; the submit handler ignores
/// them.
pub fn parse_submitter(name: &str) -> Option<(u8, u32)> {
    let Some(captures) = SUBMITTER_REGEX.captures(name) else {
        warn!("unrecognized rating submitter {:?}", name);
        return None;
    };
    let rating = captures[1].parse::<u8>().ok()?;
    let pk = captures[2].parse::<u32>().ok()?;
    Some((rating, pk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_lights_stars_up_to_rating() {
        assert_eq!(fill_levels(3, 5), vec![true, true, true, false, false]);
        assert_eq!(fill_levels(0, 5), vec![false; 5]);
        assert_eq!(fill_levels(5, 5), vec![true; 5]);
    }

    #[test]
    fn overshoot_rating_lights_everything() {
        assert_eq!(fill_levels(9, 5), vec![true; 5]);
    }

    #[test]
    fn submitter_name_round_trips() {
        let name = submitter_name(4, 117);
        assert_eq!(name, "star-4-117");
        assert_eq!(parse_submitter(&name), Some((4, 117)));
    }

    #[test]
    fn malformed_submitters_are_rejected() {
        assert_eq!(parse_submitter("star-4"), None);
        assert_eq!(parse_submitter("star-x-117"), None);
        assert_eq!(parse_submitter("rate-4-117"), None);
        assert_eq!(parse_submitter(""), None);
        // rating wider than u8
        assert_eq!(parse_submitter("star-300-117"), None);
    }
}
