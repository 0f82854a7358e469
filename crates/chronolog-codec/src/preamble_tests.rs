    use super::*;

    const STORED: &str = "---\nid: 20250513T231243\ntitle: Meeting\ncreated: 20250513T231243\nsummary: Agenda items\n---\n\n# Meeting\nAgenda items\n";

    #[test]
    fn test_decode_stored_note() {
        let decoded = decode(STORED);
        assert!(decoded.is_structured());
        let preamble = decoded.preamble().unwrap();
        assert_eq!(preamble.id.as_deref(), Some("20250513T231243"));
        assert_eq!(preamble.title.as_deref(), Some("Meeting"));
        assert_eq!(preamble.created.as_deref(), Some("20250513T231243"));
        assert_eq!(preamble.summary.as_deref(), Some("Agenda items"));
        assert!(preamble.is_complete());
        assert_eq!(decoded.body(), "# Meeting\nAgenda items\n");
    }

    #[test]
    fn test_decode_without_preamble() {
        let decoded = decode("no preamble here");
        assert_eq!(
            decoded,
            DecodedNote::Plain {
                body: "no preamble here".to_string(),
                reason: CodecError::NoPreamble,
            }
        );
        let (preamble, body) = decoded.into_parts();
        assert!(preamble.is_empty());
        assert_eq!(body, "no preamble here");
    }

    #[test]
    fn test_decode_tolerates_missing_blank_line() {
        let decoded = decode("---\ntitle: x\n---\nbody");
        assert_eq!(decoded.body(), "body");
    }

    #[test]
    fn test_decode_strips_only_one_blank_line() {
        let decoded = decode("---\ntitle: x\n---\n\n\nbody");
        assert_eq!(decoded.body(), "\nbody");
    }

    #[test]
    fn test_decode_keeps_separators_in_body() {
        let decoded = decode("---\ntitle: x\n---\n\na\n---\nb\n");
        assert_eq!(decoded.body(), "a\n---\nb\n");
    }

    #[test]
    fn test_decode_crlf() {
        let decoded = decode("---\r\ntitle: x\r\n---\r\n\r\nbody\r\n");
        assert_eq!(decoded.preamble().unwrap().title.as_deref(), Some("x"));
        assert_eq!(decoded.body(), "body\r\n");
    }

    #[test]
    fn test_decode_any_field_order_and_extra_keys() {
        let decoded = decode("---\nsummary: s\ntags:\n  - a\n  - b\nid: 42\n---\nbody");
        let preamble = decoded.preamble().unwrap();
        assert_eq!(preamble.id.as_deref(), Some("42"));
        assert_eq!(preamble.summary.as_deref(), Some("s"));
        assert!(preamble.title.is_none());
        assert!(preamble.extra.contains_key("tags"));
        assert!(!preamble.is_complete());
    }

    #[test]
    fn test_decode_malformed_yaml_falls_back() {
        let content = "---\ntitle: [unclosed\n---\nbody";
        let decoded = decode(content);
        assert!(matches!(
            decoded,
            DecodedNote::Plain { reason: CodecError::PreambleParse(_), .. }
        ));
        assert_eq!(decoded.body(), content);
    }

    #[test]
    fn test_decode_scalar_block_is_not_a_preamble() {
        let content = "intro text\n---\nmore";
        let decoded = decode(content);
        assert_eq!(
            decoded,
            DecodedNote::Plain {
                body: content.to_string(),
                reason: CodecError::PreambleNotMapping,
            }
        );
    }

    #[test]
    fn test_decode_empty_body() {
        let decoded = decode("---\ntitle: x\n---\n\n");
        assert!(decoded.is_structured());
        assert_eq!(decoded.body(), "");
    }

    #[test]
    fn test_generate_preamble_field_order() {
        let yaml = generate_preamble("20250513T231243", "Title", "20250513T231243", "Sum").unwrap();
        let positions: Vec<usize> = ["id:", "title:", "created:", "summary:"]
            .iter()
            .map(|key| yaml.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(yaml.ends_with('\n'));
        assert!(!yaml.starts_with("---"));
    }

    #[test]
    fn test_generate_preamble_sentinels() {
        let yaml = generate_preamble("", "", "   ", "").unwrap();
        let decoded = decode(&format!("---\n{}---\n", yaml));
        let preamble = decoded.preamble().unwrap();
        assert_eq!(preamble.id.as_deref(), Some(ZERO_TIMESTAMP));
        assert_eq!(preamble.title.as_deref(), Some(UNTITLED));
        assert_eq!(preamble.created.as_deref(), Some(ZERO_TIMESTAMP));
        assert_eq!(preamble.summary.as_deref(), Some(NO_CONTENT_SUMMARY));
    }

    #[test]
    fn test_generate_preamble_keeps_untrimmed_values() {
        let yaml = generate_preamble("id-1", " Spaced ", "20250101T000000", "s").unwrap();
        let decoded = decode(&format!("---\n{}---\n", yaml));
        assert_eq!(decoded.preamble().unwrap().title.as_deref(), Some(" Spaced "));
    }
