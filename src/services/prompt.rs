use crate::models::RecommendationRequest;

const CATEGORY_HINTS: &[&str] = &[
    "Arrays & Hashing",
    "Two Pointers",
    "Stack & Queue",
    "Binary Search",
    "Sliding Window",
    "Linked Lists",
    "Trees & Graphs",
    "Dynamic Programming",
];

/// Builds the natural-language prompt sent to the generative model
pub fn recommendation_prompt(request: &RecommendationRequest) -> String {
    let topic = request.topic_filter().unwrap_or("Any");
    let difficulty = request.difficulty_filter().unwrap_or("Any");
    let categories: String = CATEGORY_HINTS
        .iter()
        .map(|c| format!("- {c}\n"))
        .collect();

    format!(
        "As a LeetCode expert, recommend 3 coding problems for user '{username}'.\n\
         \n\
         User preferences:\n\
         - Topic: {topic}\n\
         - Difficulty: {difficulty}\n\
         \n\
         Consider these problem categories:\n\
         {categories}\
         \n\
         For each recommendation, provide:\n\
         1. Problem title\n\
         2. Difficulty (Easy/Medium/Hard)\n\
         3. Main tags (2-3 tags)\n\
         4. Brief reason why it's good for this user\n\
         \n\
         Format as JSON array with fields: title, difficulty, tags, reason\n",
        username = request.username,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_defaults_to_any() {
        let prompt = recommendation_prompt(&RecommendationRequest::new("alice"));

        assert!(prompt.contains("for user 'alice'"));
        assert!(prompt.contains("- Topic: Any\n"));
        assert!(prompt.contains("- Difficulty: Any\n"));
    }

    #[test]
    fn test_prompt_embeds_filters() {
        let request = RecommendationRequest::new("bob")
            .with_topic("Stack")
            .with_difficulty("Medium");
        let prompt = recommendation_prompt(&request);

        assert!(prompt.contains("- Topic: Stack\n"));
        assert!(prompt.contains("- Difficulty: Medium\n"));
    }

    #[test]
    fn test_prompt_lists_every_category() {
        let prompt = recommendation_prompt(&RecommendationRequest::new("alice"));
        for category in CATEGORY_HINTS {
            assert!(prompt.contains(&format!("- {category}\n")), "missing {category}");
        }
    }
}
