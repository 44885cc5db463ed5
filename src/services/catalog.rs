use crate::models::{Difficulty, Problem};

/// Problems available for recommendation, in the order they are offered
pub static CATALOG: &[Problem] = &[
    Problem {
        title: "Two Sum",
        slug: "two-sum",
        difficulty: Difficulty::Easy,
        tags: &["Array", "Hash Table"],
    },
    Problem {
        title: "Longest Substring Without Repeating Characters",
        slug: "longest-substring-without-repeating-characters",
        difficulty: Difficulty::Medium,
        tags: &["Hash Table", "String", "Sliding Window"],
    },
    Problem {
        title: "Median of Two Sorted Arrays",
        slug: "median-of-two-sorted-arrays",
        difficulty: Difficulty::Hard,
        tags: &["Array", "Binary Search", "Divide and Conquer"],
    },
    Problem {
        title: "Valid Parentheses",
        slug: "valid-parentheses",
        difficulty: Difficulty::Easy,
        tags: &["String", "Stack"],
    },
    Problem {
        title: "Binary Tree Inorder Traversal",
        slug: "binary-tree-inorder-traversal",
        difficulty: Difficulty::Easy,
        tags: &["Stack", "Tree", "Depth-First Search"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_are_well_formed() {
        assert_eq!(CATALOG.len(), 5);
        for problem in CATALOG {
            assert!(!problem.tags.is_empty(), "{} has no tags", problem.title);
            assert!(problem
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn test_catalog_slugs_are_unique() {
        let slugs: HashSet<_> = CATALOG.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), CATALOG.len());
    }
}
