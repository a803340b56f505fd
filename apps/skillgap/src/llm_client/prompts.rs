// Prompt text for LLM calls. Keep prompts here, next to the client that sends them.

/// System prompt that asks for bare JSON.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences.";

/// Asks for the 5 to 8 most important subtopics of `skill` as a JSON array of strings.
pub fn subtopics_prompt(skill: &str) -> String {
    format!(
        "Generate a list of 5 to 8 MOST IMPORTANT subtopics required to master '{skill}'. \
         Return ONLY a valid JSON ARRAY of strings, nothing else. \
         Example: [\"Introduction\", \"Basics\", \"Advanced Concepts\"]"
    )
}
