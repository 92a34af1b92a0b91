use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::services::exercise_catalog::{ExerciseCatalog, ExerciseProfile};
use crate::services::extraction;
use crate::services::gemini_provider::GeminiProvider;
use crate::services::prompt;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub video_id: String,
    pub muscle_group: String,
    pub exercise_name: String,
    #[serde(default)]
    pub video_base64: Option<String>,
}

/// Runs the full analysis pipeline for one request: prompt construction,
/// the gateway call, extraction, and normalization. Every failure path maps
/// to a schema-conformant body; this function never errors.
pub async fn analyze_video(
    gemini: &GeminiProvider,
    catalog: &ExerciseCatalog,
    req: &AnalysisRequest,
) -> Value {
    let profile = catalog
        .profile(&req.muscle_group, &req.exercise_name)
        .cloned()
        .unwrap_or_default();

    let instruction = prompt::build_analysis_prompt(&req.exercise_name, &req.muscle_group, &profile);

    let reply = match gemini
        .generate(&instruction, req.video_base64.as_deref())
        .await
    {
        Ok(text) => text,
        Err(err) => {
            warn!(video_id = %req.video_id, error = %err, "analysis request failed");
            return error_result(req, &err.to_string());
        }
    };

    match extraction::extract_json(&reply) {
        Some(analysis) => normalized_result(analysis, req, &profile),
        None => {
            warn!(
                video_id = %req.video_id,
                reply_len = reply.len(),
                "model reply had no parsable JSON, returning raw text fallback"
            );
            fallback_result(req, &profile, &reply)
        }
    }
}

/// Defaults each feedback entry, then stamps the request metadata over the
/// model's output. The request is authoritative for identity fields; the
/// model's fields are authoritative for everything it filled in.
fn normalized_result(mut analysis: Value, req: &AnalysisRequest, profile: &ExerciseProfile) -> Value {
    apply_feedback_defaults(&mut analysis);

    if let Some(object) = analysis.as_object_mut() {
        object.insert("video_id".to_string(), json!(req.video_id));
        object.insert("exercise".to_string(), json!(req.exercise_name));
        object.insert("muscle_group".to_string(), json!(req.muscle_group));
        object.insert("form_cues".to_string(), json!(profile.form_cues));
        object.insert("common_mistakes".to_string(), json!(profile.common_mistakes));
    }

    analysis
}

fn apply_feedback_defaults(analysis: &mut Value) {
    let Some(pairs) = analysis
        .get_mut("feedback_pairs")
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    for (position, pair) in pairs.iter_mut().enumerate() {
        let Some(entry) = pair.as_object_mut() else {
            continue;
        };
        entry.entry("id").or_insert(json!(position + 1));
        entry.entry("confidence").or_insert(json!(75));
        entry
            .entry("timestamp")
            .or_insert(json!("throughout video"));
        entry.entry("severity").or_insert(json!("medium"));
    }
}

/// Reply arrived but no strategy recovered structured data: preserve the
/// raw text for manual inspection behind a neutral placeholder score.
fn fallback_result(req: &AnalysisRequest, profile: &ExerciseProfile, raw: &str) -> Value {
    json!({
        "video_id": req.video_id,
        "exercise": req.exercise_name,
        "muscle_group": req.muscle_group,
        "form_score": 6,
        "confidence": 50,
        "assessment": "AI provided feedback but format was unclear. Manual review of text below recommended.",
        "feedback_pairs": [{
            "id": 1,
            "body_part": "General Form",
            "issue": "Analysis completed but structured data unavailable",
            "correction": "Review raw AI response below",
            "severity": "medium",
            "risk": "See detailed feedback",
            "confidence": 50,
            "timestamp": "N/A"
        }],
        "strengths": ["Completed exercise attempt"],
        "next_steps": ["Review AI text feedback", "Consider re-recording with better angle"],
        "raw_feedback": raw,
        "form_cues": profile.form_cues,
        "common_mistakes": profile.common_mistakes
    })
}

fn error_result(req: &AnalysisRequest, message: &str) -> Value {
    json!({
        "video_id": req.video_id,
        "exercise": req.exercise_name,
        "muscle_group": req.muscle_group,
        "error": message,
        "form_score": 0,
        "confidence": 0,
        "feedback_pairs": []
    })
}
