use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlainGameDescriptor {
    pub game_id: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComprehendDetectionEntry {
    pub game_id: &'static str,
    pub filename: &'static str,
    pub md5: &'static str,
}

pub const COMPREHEND_GAME_LIST: &[PlainGameDescriptor] = &[
    PlainGameDescriptor { game_id: "crimsoncrown", description: "Crimson Crown" },
    PlainGameDescriptor { game_id: "ootopis", description: "OO-Topos" },
    PlainGameDescriptor { game_id: "transylvania", description: "Transylvania" },
    PlainGameDescriptor { game_id: "talisman", description: "Talisman" },
];

pub const COMPREHEND_GAMES: &[ComprehendDetectionEntry] = &[
    // DOS games
    ComprehendDetectionEntry { game_id: "crimsoncrown", filename: "cc1.gda", md5: "f2abf019675ac5c9bcfd81032bc7787b" },
    ComprehendDetectionEntry { game_id: "transylvania", filename: "tr.gda", md5: "22e08633eea02ceee49b909dfd982d22" },
];

pub fn find_game(game_id: &str) -> Option<&'static PlainGameDescriptor> {
    COMPREHEND_GAME_LIST.iter().find(|game| game.game_id == game_id)
}

pub fn entries_for_file<'a>(filename: &'a str) -> impl Iterator<Item = &'static ComprehendDetectionEntry> + 'a {
    COMPREHEND_GAMES
        .iter()
        .filter(move |entry| entry.filename.eq_ignore_ascii_case(filename))
}

/// Matches an already hashed game file against the known releases.
pub fn match_file(filename: &str, md5: &str) -> Option<&'static PlainGameDescriptor> {
    entries_for_file(filename)
        .find(|entry| entry.md5.eq_ignore_ascii_case(md5))
        .and_then(|entry| find_game(entry.game_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn every_entry_has_a_descriptor() {
        for entry in COMPREHEND_GAMES {
            assert!(find_game(entry.game_id).is_some(), "{} has no descriptor", entry.game_id);
            assert_eq!(entry.md5.len(), 32);
        }
    }

    #[test_case("crimsoncrown", Some("Crimson Crown") ; "crimson crown")]
    #[test_case("ootopis", Some("OO-Topos") ; "oo topos")]
    #[test_case("talisman", Some("Talisman") ; "talisman")]
    #[test_case("zork", None ; "unknown game")]
    fn find_game_by_id(game_id: &str, description: Option<&str>) {
        assert_eq!(find_game(game_id).map(|game| game.description), description);
    }

    #[test_case("cc1.gda", "f2abf019675ac5c9bcfd81032bc7787b", Some("crimsoncrown") ; "exact")]
    #[test_case("CC1.GDA", "F2ABF019675AC5C9BCFD81032BC7787B", Some("crimsoncrown") ; "case insensitive")]
    #[test_case("tr.gda", "22e08633eea02ceee49b909dfd982d22", Some("transylvania") ; "transylvania")]
    #[test_case("tr.gda", "f2abf019675ac5c9bcfd81032bc7787b", None ; "wrong checksum")]
    #[test_case("talisman.gda", "00000000000000000000000000000000", None ; "unknown file")]
    fn match_known_files(filename: &str, md5: &str, game_id: Option<&str>) {
        assert_eq!(match_file(filename, md5).map(|game| game.game_id), game_id);
    }

    #[test]
    fn entries_for_unknown_file() {
        assert_eq!(entries_for_file("oo.gda").count(), 0);
        assert_eq!(entries_for_file("TR.gda").count(), 1);
    }
}
