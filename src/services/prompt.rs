use crate::services::exercise_catalog::ExerciseProfile;

/// Builds the coaching instruction prompt for one analysis request. Pure
/// string composition; the cue and mistake blocks collapse to empty strings
/// when the profile carries no data.
pub fn build_analysis_prompt(
    exercise_name: &str,
    muscle_group: &str,
    profile: &ExerciseProfile,
) -> String {
    let form_cues_text = checklist(&profile.form_cues, '✓');
    let mistakes_text = checklist(&profile.common_mistakes, '✗');

    format!(
        r#"You are an ELITE certified strength & conditioning coach analyzing a video of {exercise_name} for {muscle_group}.

**CORRECT FORM CHECKLIST for {exercise_name}:**
{form_cues_text}

**COMMON MISTAKES TO CHECK FOR:**
{mistakes_text}

**YOUR TASK:**
1. Watch the ENTIRE video carefully
2. Identify SPECIFIC form issues you observe (not generic advice)
3. For each issue, explain EXACTLY what you see wrong and HOW to fix it
4. Rate form quality 1-10 (be critical but fair)
5. Provide confidence level for each observation

**RESPOND WITH VALID JSON ONLY (no markdown, no extra text):**

{{
  "form_score": <1-10 integer>,
  "confidence": <1-100 integer, how confident in analysis>,
  "assessment": "<2-3 sentence professional summary of overall form>",
  "feedback_pairs": [
    {{
      "id": 1,
      "body_part": "<specific body part: e.g., 'Lower Back', 'Left Elbow', 'Knees'>",
      "issue": "<SPECIFIC observation from video: what you SAW wrong>",
      "correction": "<SPECIFIC actionable fix: exact steps to correct>",
      "severity": "<critical|high|medium|low>",
      "risk": "<specific injury risk if not corrected>",
      "timestamp": "<approximate time in video when visible, e.g., '0:03-0:05'>",
      "confidence": <1-100 integer, confidence in this specific issue>
    }}
  ],
  "strengths": ["<specific thing done well>", "<another strength>"],
  "next_steps": [
    "<immediate priority fix>",
    "<secondary improvement>",
    "<progression suggestion>"
  ],
  "rep_count": <approximate number of reps completed>,
  "tempo_analysis": "<assessment of movement speed and control>"
}}

**CRITICAL RULES:**
- BE SPECIFIC: "Left knee caves inward during descent" NOT "bad knee alignment"
- PROVIDE EXACT FIXES: "Actively push knees outward, think 'spreading the floor'" NOT "fix your knees"
- CONFIDENCE SCORING: 80-100 = very clear issue, 60-79 = likely issue, below 60 = uncertain
- ONLY report issues you actually SEE in the video
- If form is excellent, say so! High scores are allowed.
- Respond with ONLY the JSON object, nothing else"#
    )
}

fn checklist(items: &[String], marker: char) -> String {
    items
        .iter()
        .map(|item| format!("  {marker} {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
