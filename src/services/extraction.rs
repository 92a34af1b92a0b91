use serde_json::Value;

type Strategy = fn(&str) -> Option<Value>;

// Ordered from strictest to loosest; first success wins.
const STRATEGIES: &[Strategy] = &[fenced_block, keyed_object_scan, outer_bounds];

/// Recovers a JSON object from free-form model output. The reply usually
/// contains the requested object somewhere, but may wrap it in a code fence,
/// surround it with prose, or mangle the structure. Returns `None` when no
/// strategy finds an object; never panics.
pub fn extract_json(text: &str) -> Option<Value> {
    STRATEGIES.iter().find_map(|strategy| strategy(text))
}

/// Strategy 1: the contents of the first fenced code block, when they parse.
fn fenced_block(text: &str) -> Option<Value> {
    let body = fence_body(text, "```json").or_else(|| fence_body(text, "```"))?;
    parse_object(body)
}

fn fence_body<'a>(text: &'a str, opening: &str) -> Option<&'a str> {
    let start = text.find(opening)? + opening.len();
    let end = text[start..].find("```")?;
    Some(&text[start..start + end])
}

/// Strategy 2: scan for brace-balanced candidates nested at most one level
/// deep and take the first that parses to an object carrying a "form_score"
/// or "assessment" key. The key check keeps small unrelated objects embedded
/// in prose from matching.
fn keyed_object_scan(text: &str) -> Option<Value> {
    shallow_object_candidates(text)
        .into_iter()
        .filter_map(parse_object)
        .find(|value| value.get("form_score").is_some() || value.get("assessment").is_some())
}

/// Strategy 3: the substring from the first '{' to the last '}', accepted
/// whenever it parses at all.
fn outer_bounds(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    parse_object(&text[start..=end])
}

fn parse_object(candidate: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(value) if value.is_object() => Some(value),
        _ => None,
    }
}

fn shallow_object_candidates(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut candidates = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        match shallow_end(bytes, i) {
            Some(end) => {
                candidates.push(&text[i..=end]);
                i = end + 1;
            }
            // Too deeply nested; re-scan from the next '{' so inner
            // objects still get a chance.
            None => i += 1,
        }
    }
    candidates
}

fn shallow_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        match byte {
            b'{' => {
                depth += 1;
                if depth > 2 {
                    return None;
                }
            }
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_block_with_surrounding_prose() {
        let text = "Here is my analysis:\n```json\n{\"form_score\": 8, \"assessment\": \"ok\"}\n```\nLet me know if you have questions.";
        let value = extract_json(text).expect("fenced block should parse");

        assert_eq!(value["form_score"], 8);
        assert_eq!(value["assessment"], "ok");
    }

    #[test]
    fn fenced_block_without_language_tag() {
        let text = "```\n{\"form_score\": 5}\n```";
        let value = extract_json(text).expect("bare fence should parse");
        assert_eq!(value["form_score"], 5);
    }

    #[test]
    fn scan_skips_unrelated_object() {
        let text = r#"Metadata: {"page": 1, "lang": "en"}. The result is {"form_score": 7, "feedback_pairs": []} as requested."#;
        let value = extract_json(text).expect("keyed object should match");

        assert_eq!(value["form_score"], 7);
        assert!(value.get("page").is_none());
    }

    #[test]
    fn scan_accepts_one_level_of_nesting() {
        let text = r#"note {"assessment": "solid", "detail": {"depth": "full"}} end"#;
        let value = extract_json(text).expect("nested candidate should match");
        assert_eq!(value["assessment"], "solid");
    }

    #[test]
    fn outer_bounds_recovers_when_scan_fails() {
        // Three levels of nesting defeat strategy 2; the outer-bound slice
        // still parses.
        let text = r#"reply: {"form_score": 9, "a": {"b": {"c": 1}}}"#;
        let value = extract_json(text).expect("outer bounds should parse");
        assert_eq!(value["form_score"], 9);
    }

    #[test]
    fn unparsable_text_yields_none() {
        assert!(extract_json("the form looked pretty good overall").is_none());
        assert!(extract_json("broken { not json }").is_none());
        assert!(extract_json("").is_none());
    }

    #[test]
    fn bare_array_reply_is_not_a_match() {
        assert!(extract_json("[1, 2, 3]").is_none());
    }

    #[test]
    fn fenced_array_falls_through_to_object_scan() {
        let value = extract_json("```json\n[{\"form_score\": 1}]\n```")
            .expect("embedded object should match");
        assert_eq!(value["form_score"], 1);
    }
}
