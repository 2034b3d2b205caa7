use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::{
    error::Result,
    types::{Caption, Transcript},
};

/// Parse captions from JSON: a bare array or a transcript with `segments`
pub fn parse_captions(json: &str) -> Result<Vec<Caption>> {
    let captions = if json.trim_start().starts_with('{') {
        serde_json::from_str::<Transcript>(json)?.segments
    } else {
        serde_json::from_str::<Vec<Caption>>(json)?
    };
    Ok(captions)
}

/// Load captions from a JSON file
pub async fn load_captions(path: &Path) -> Result<Vec<Caption>> {
    let json_content = fs::read_to_string(path).await?;
    let captions = parse_captions(&json_content)?;
    debug!(path = %path.display(), count = captions.len(), "loaded captions");
    Ok(captions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaptionError;

    #[test]
    fn test_parse_list() {
        let captions =
            parse_captions(r#"[{"start": 0, "end": 1.5, "text": "Hi"}]"#).unwrap();
        assert_eq!(captions, vec![Caption::new(0.0, 1.5, "Hi")]);
    }

    #[test]
    fn test_parse_transcript() {
        let json = r#"{
            "text": " Hello there. General Kenobi.",
            "language": "en",
            "segments": [
                {"id": 0, "start": 0.0, "end": 2.0, "text": " Hello there."},
                {"id": 1, "start": 2.0, "end": 4.24, "text": " General Kenobi."}
            ]
        }"#;
        let captions = parse_captions(json).unwrap();
        assert_eq!(captions.len(), 2);
        assert_eq!(captions[1].end, 4.24);
        assert_eq!(captions[1].text, " General Kenobi.");
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_captions("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_captions(r#"[{"start": 0}]"#),
            Err(CaptionError::Json(_))
        ));
        assert!(matches!(parse_captions("not json"), Err(CaptionError::Json(_))));
    }

    #[test]
    fn test_parse_transcript_reports_bad_segment() {
        let err = parse_captions(r#"  {"segments": [{"start": 0, "end": 1}]}"#).unwrap_err();
        assert!(matches!(err, CaptionError::Json(_)));
        assert!(err.to_string().contains("missing field `text`"), "{err}");

        let err = parse_captions(r#"{"language": "en"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `segments`"), "{err}");
    }

    #[tokio::test]
    async fn test_load_captions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("captions.json");
        std::fs::write(&path, r#"[{"start": 1, "end": 2, "text": "a"}]"#).unwrap();

        let captions = load_captions(&path).await.unwrap();
        assert_eq!(captions, vec![Caption::new(1.0, 2.0, "a")]);

        let missing = load_captions(&dir.path().join("missing.json")).await;
        assert!(matches!(missing, Err(CaptionError::Io(_))));
    }
}
