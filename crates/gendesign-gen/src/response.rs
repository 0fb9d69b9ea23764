//! Parsing of `generateContent` replies into design options

use gendesign_core::{DesignOption, GenerationError};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Concatenated text parts of the first candidate.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, GenerationError> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| GenerationError::empty_response("response has no candidates"))?;

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(GenerationError::empty_response(format!(
            "first candidate has no text (finishReason: {reason})"
        )));
    }
    Ok(text)
}

/// Parses the model's JSON text into design options.
///
/// Surrounding whitespace and an optional Markdown code fence are stripped.
/// Anything that is not an array of complete design objects is a schema error.
pub fn parse_design_options(text: &str) -> Result<Vec<DesignOption>, GenerationError> {
    let json = strip_code_fence(text.trim());
    serde_json::from_str(json).map_err(|e| GenerationError::schema(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (`json`) up to the first newline
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gendesign_core::GenerationErrorKind;

    const FOUR_DESIGNS: &str = r#"[
        {"designName":"Rangka X","materialUsed":"Serat Karbon","estimatedCost":4500000,"strengthLevel":"Tinggi","materialEfficiencyScore":92,"description":"Sangat ringan."},
        {"designName":"Rangka H","materialUsed":"Aluminium","estimatedCost":3200000.5,"strengthLevel":"Sedang","materialEfficiencyScore":78,"description":"Mudah dirakit."},
        {"designName":"Rangka Kisi","materialUsed":"Titanium","estimatedCost":4999000,"strengthLevel":"Sangat Tinggi","materialEfficiencyScore":85,"description":"Tahan benturan."},
        {"designName":"Rangka Ekonomis","materialUsed":"Plastik ABS","estimatedCost":900000,"strengthLevel":"Rendah","materialEfficiencyScore":60,"description":"Murah.","extra":"ignored"}
    ]"#;

    fn response(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_conforming_array() {
        let options = parse_design_options(FOUR_DESIGNS).unwrap();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].design_name, "Rangka X");
        assert_eq!(options[0].material_used, "Serat Karbon");
        assert_eq!(options[0].estimated_cost, 4_500_000.0);
        assert_eq!(options[0].strength_level, "Tinggi");
        assert_eq!(options[0].material_efficiency_score, 92);
        assert_eq!(options[0].description, "Sangat ringan.");
        assert_eq!(options[1].estimated_cost, 3_200_000.5);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_design_options("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_strips_code_fence() {
        let fenced = format!("```json\n{FOUR_DESIGNS}\n```\n");
        assert_eq!(parse_design_options(&fenced).unwrap().len(), 4);
    }

    #[test]
    fn test_missing_field_is_schema_error() {
        let text = r#"[{"designName":"A","materialUsed":"Baja","estimatedCost":1,"strengthLevel":"Sedang","description":"d"}]"#;
        let err = parse_design_options(text).unwrap_err();
        assert_eq!(err.kind, GenerationErrorKind::Schema);
        assert!(err.detail.contains("materialEfficiencyScore"));
    }

    #[test]
    fn test_wrong_type_is_schema_error() {
        let text = r#"[{"designName":"A","materialUsed":"Baja","estimatedCost":"mahal","strengthLevel":"Sedang","materialEfficiencyScore":50,"description":"d"}]"#;
        let err = parse_design_options(text).unwrap_err();
        assert_eq!(err.kind, GenerationErrorKind::Schema);
    }

    #[test]
    fn test_object_instead_of_array_is_schema_error() {
        let err = parse_design_options(r#"{"designs":[]}"#).unwrap_err();
        assert_eq!(err.kind, GenerationErrorKind::Schema);
    }

    #[test]
    fn test_non_json_is_schema_error() {
        let err = parse_design_options("Maaf, saya tidak bisa.").unwrap_err();
        assert_eq!(err.kind, GenerationErrorKind::Schema);
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let resp = response(
            r#"{"candidates":[{"content":{"parts":[{"text":"[{\"a\":"},{"text":"1}]"}],"role":"model"},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(extract_text(&resp).unwrap(), r#"[{"a":1}]"#);
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let resp = response(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        let err = extract_text(&resp).unwrap_err();
        assert_eq!(err.kind, GenerationErrorKind::EmptyResponse);
    }

    #[test]
    fn test_extract_text_reports_finish_reason() {
        let resp = response(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#);
        let err = extract_text(&resp).unwrap_err();
        assert_eq!(err.kind, GenerationErrorKind::EmptyResponse);
        assert!(err.detail.contains("MAX_TOKENS"));
    }
}
