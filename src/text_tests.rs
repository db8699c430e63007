//! Unit tests for text cleaning and field inference.

use super::*;

mod clean_tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(clean("  Topps \t Chrome   Update "), "Topps Chrome Update");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \t "), "");
    }

    #[test]
    fn missing_cell_is_empty() {
        assert_eq!(clean_cell(None), "");
        assert_eq!(clean_cell(Some("  Messi ")), "Messi");
    }
}

mod infer_year_tests {
    use super::*;

    #[test]
    fn finds_year_in_card_name() {
        assert_eq!(infer_year("2023 Prizm Auto /25", ""), "2023");
    }

    #[test]
    fn falls_back_to_card_set() {
        assert_eq!(infer_year("Prizm Silver", "2019 Panini Prizm"), "2019");
    }

    #[test]
    fn card_name_wins_over_card_set() {
        assert_eq!(infer_year("1998 Refractor", "2024 Topps Finest"), "1998");
    }

    #[test]
    fn ignores_other_centuries_and_embedded_digits() {
        assert_eq!(infer_year("Card 1850", ""), "");
        assert_eq!(infer_year("#120234", ""), "");
    }

    #[test]
    fn empty_when_nothing_matches() {
        assert_eq!(infer_year("Base", "Topps Chrome"), "");
    }

    #[test]
    fn takes_first_year() {
        assert_eq!(infer_year("2022-2023 Road to UEFA", ""), "2022");
    }
}

mod infer_serial_tests {
    use super::*;

    #[test]
    fn finds_serial_in_features() {
        assert_eq!(infer_serial("Gold Refractor /50", "2023 Prizm"), "50");
    }

    #[test]
    fn features_win_over_card_name() {
        assert_eq!(infer_serial("Red /5", "Auto /25"), "5");
    }

    #[test]
    fn falls_back_to_card_name() {
        assert_eq!(infer_serial("Refractor", "2023 Prizm Auto /25"), "25");
    }

    #[test]
    fn allows_space_after_slash() {
        assert_eq!(infer_serial("Numbered / 99", ""), "99");
    }

    #[test]
    fn rejects_numbers_longer_than_four_digits() {
        assert_eq!(infer_serial("/12345", ""), "");
    }

    #[test]
    fn empty_without_slash() {
        assert_eq!(infer_serial("Refractor 25", "Base"), "");
    }
}

mod infer_auto_tests {
    use super::*;

    #[test]
    fn detects_auto_in_any_case() {
        assert!(infer_auto("AUTO", ""));
        assert!(infer_auto("", "Rookie Autograph"));
        assert!(infer_auto("auto /10", ""));
    }

    #[test]
    fn requires_whole_word() {
        assert!(!infer_auto("Autographed", ""));
        assert!(!infer_auto("Automatic", "Autos"));
    }

    #[test]
    fn no_token_no_auto() {
        assert!(!infer_auto("Refractor", "2023 Prizm"));
    }
}

mod supplementary_tests {
    use super::*;

    #[test]
    fn set_short_strips_leading_year() {
        assert_eq!(infer_set_short("2024 Topps Finest MLS"), "Topps Finest MLS");
        assert_eq!(infer_set_short("Topps 2024 Finest"), "Topps 2024 Finest");
    }

    #[test]
    fn slug_normalizes() {
        assert_eq!(slug("Lionel Messi"), "lionel_messi");
        assert_eq!(slug("  Kylian Mbappé! "), "kylian_mbapp");
        assert_eq!(slug(""), "x");
        assert_eq!(slug("---"), "x");
    }

    #[test]
    fn alphanumeric_only_strips_punctuation() {
        assert_eq!(alphanumeric_only("#RC-12"), "RC12");
    }

    #[test]
    fn parses_prices() {
        assert_eq!(parse_price(" 9.99 "), Some(9.99));
        assert_eq!(parse_price("12"), Some(12.0));
        assert_eq!(parse_price("$5"), None);
        assert_eq!(parse_price(""), None);
    }
}
