    use super::*;
    use crate::error::CodecError;
    use crate::markdown::Block;
    use crate::preamble::{NO_CONTENT_SUMMARY, UNTITLED};

    const ID: &str = "20250513T231243";

    struct FailingInspector;

    impl MarkdownInspector for FailingInspector {
        fn inspect(&self, _markdown: &str) -> Result<Vec<Block>, CodecError> {
            Err(CodecError::DocumentTooLarge { len: 1, limit: 0 })
        }
    }

    #[test]
    fn test_encode_layout() {
        let note = encode_note("# Meeting\n\nAgenda items", ID, ID);
        assert!(note.starts_with("---\nid: "));
        assert!(note.ends_with("---\n\n# Meeting\n\nAgenda items"));

        let decoded = decode_note(&note);
        let preamble = decoded.preamble().unwrap();
        assert_eq!(preamble.id.as_deref(), Some(ID));
        assert_eq!(preamble.title.as_deref(), Some("Meeting"));
        assert_eq!(preamble.created.as_deref(), Some(ID));
        assert_eq!(preamble.summary.as_deref(), Some("Agenda items"));
    }

    #[test]
    fn test_roundtrip_preserves_body() {
        let bodies = [
            "# Title\n\nbody\n",
            "",
            "plain text without heading",
            "\n\nleading blank lines",
            "---\nstarts with a separator\n---\n",
            "# 見出し\n\n本文です。\r\nCRLF line\r\n",
            "trailing spaces   \n\n\n",
        ];
        for body in bodies {
            let note = encode_note(body, ID, ID);
            let decoded = decode_note(&note);
            assert!(decoded.is_structured(), "no preamble for {:?}", body);
            assert_eq!(decoded.body(), body);
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let body = "# Same\n\nsame body";
        assert_eq!(encode_note(body, ID, ID), encode_note(body, ID, ID));
    }

    #[test]
    fn test_encode_empty_body_uses_sentinels() {
        let decoded = decode_note(&encode_note("", "", ""));
        let preamble = decoded.preamble().unwrap();
        assert_eq!(preamble.title.as_deref(), Some(UNTITLED));
        assert_eq!(preamble.summary.as_deref(), Some(NO_CONTENT_SUMMARY));
        assert_eq!(preamble.id.as_deref(), Some("00000000T000000"));
        assert!(preamble.is_complete());
    }

    #[test]
    fn test_update_carries_id_and_created() {
        let prior = "---\nid: 20240101T000000\ncreated: 20240101T000000\n---\nold body";
        let updated = update_note("# New title\n\nnew body", prior, "20991231T235959");
        let decoded = decode_note(&updated);
        let preamble = decoded.preamble().unwrap();
        assert_eq!(preamble.id.as_deref(), Some("20240101T000000"));
        assert_eq!(preamble.created.as_deref(), Some("20240101T000000"));
        assert_eq!(preamble.title.as_deref(), Some("New title"));
        assert_eq!(preamble.summary.as_deref(), Some("new body"));
        assert_eq!(decoded.body(), "# New title\n\nnew body");
    }

    #[test]
    fn test_update_plain_prior_uses_fallback_id() {
        let updated = update_note("body", "no preamble at all", "20240202T020202");
        let decoded = decode_note(&updated);
        let preamble = decoded.preamble().unwrap();
        assert_eq!(preamble.id.as_deref(), Some("20240202T020202"));
        assert_eq!(preamble.created.as_deref(), Some("20240202T020202"));
    }

    #[test]
    fn test_custom_summary_length() {
        let codec = NoteCodec::with_options(CodecOptions {
            summary_chars: 5,
            ..CodecOptions::default()
        });
        assert_eq!(codec.summary("# T\n\nabcdefghij"), "abcde");
        assert_eq!(codec.options().summary_chars, 5);
    }

    #[test]
    fn test_oversized_document_falls_back_to_first_line() {
        let codec = NoteCodec::with_options(CodecOptions {
            max_document_bytes: 4,
            ..CodecOptions::default()
        });
        assert_eq!(codec.title("# Heading\n\nbody"), "# Heading");
        assert_eq!(codec.description("# Heading\n\nbody"), "");
    }

    #[test]
    fn test_failing_inspector_still_encodes() {
        let codec = NoteCodec::with_inspector(FailingInspector, CodecOptions::default());
        let note = codec.encode("# Heading\nsecond line", ID, ID);
        let decoded = codec.decode(&note);
        let preamble = decoded.preamble().unwrap();
        assert_eq!(preamble.title.as_deref(), Some("# Heading"));
        assert_eq!(preamble.summary.as_deref(), Some("second line"));
        assert_eq!(decoded.body(), "# Heading\nsecond line");
    }
