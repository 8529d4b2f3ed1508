//! Retrieval result models

use serde::Serialize;

use super::fragment::Fragment;

/// A fragment returned by a search, with its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredFragment<'a> {
    /// The matched fragment, borrowed from the index
    pub fragment: &'a Fragment,

    /// Squared Euclidean distance (lower is better, 0 = identical)
    pub distance: f32,
}

impl<'a> ScoredFragment<'a> {
    pub fn new(fragment: &'a Fragment, distance: f32) -> Self {
        Self { fragment, distance }
    }

    /// Normalized similarity score: `1 / (1 + distance)`, in (0, 1]
    pub fn score(&self) -> f32 {
        1.0 / (1.0 + self.distance)
    }

    pub fn text(&self) -> &'a str {
        &self.fragment.text
    }
}

/// Fragments ranked by ascending distance to a query.
///
/// Length is `min(top_k, corpus size)`. An empty result is a valid
/// outcome (for example `top_k == 0`) and is distinct from an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RetrievalResult<'a> {
    hits: Vec<ScoredFragment<'a>>,
}

impl<'a> RetrievalResult<'a> {
    pub(crate) fn new(hits: Vec<ScoredFragment<'a>>) -> Self {
        Self { hits }
    }

    pub fn empty() -> Self {
        Self { hits: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Best match, if any
    pub fn top(&self) -> Option<&ScoredFragment<'a>> {
        self.hits.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredFragment<'a>> {
        self.hits.iter()
    }

    pub fn hits(&self) -> &[ScoredFragment<'a>] {
        &self.hits
    }

    /// Fragment ids in result order
    pub fn ids(&self) -> Vec<usize> {
        self.hits.iter().map(|hit| hit.fragment.id).collect()
    }

    /// Fragment texts in result order
    pub fn texts(&self) -> Vec<&'a str> {
        self.hits.iter().map(ScoredFragment::text).collect()
    }
}

impl<'a> IntoIterator for RetrievalResult<'a> {
    type Item = ScoredFragment<'a>;
    type IntoIter = std::vec::IntoIter<ScoredFragment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

impl<'r, 'a> IntoIterator for &'r RetrievalResult<'a> {
    type Item = &'r ScoredFragment<'a>;
    type IntoIter = std::slice::Iter<'r, ScoredFragment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_from_distance() {
        let fragment = Fragment::new(0, "a".into(), 1, vec![0.0]);
        assert!((ScoredFragment::new(&fragment, 0.0).score() - 1.0).abs() < f32::EPSILON);
        assert!((ScoredFragment::new(&fragment, 1.0).score() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_texts_and_ids_follow_result_order() {
        let first = Fragment::new(4, "four".into(), 1, vec![0.0]);
        let second = Fragment::new(1, "one".into(), 1, vec![0.0]);
        let result = RetrievalResult::new(vec![
            ScoredFragment::new(&first, 0.1),
            ScoredFragment::new(&second, 0.2),
        ]);

        assert_eq!(result.ids(), vec![4, 1]);
        assert_eq!(result.texts(), vec!["four", "one"]);
        assert_eq!(result.top().map(|hit| hit.fragment.id), Some(4));
    }

    #[test]
    fn test_serializes_without_embeddings() {
        let fragment = Fragment::new(0, "text".into(), 2, vec![1.0, 2.0]);
        let result = RetrievalResult::new(vec![ScoredFragment::new(&fragment, 0.5)]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json[0]["fragment"]["text"], "text");
        assert_eq!(json[0]["fragment"]["page"], 2);
        assert!(json[0]["fragment"].get("embedding").is_none());
    }
}
