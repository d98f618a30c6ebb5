use crate::graph::Graph;

/// Minimum Jaro-Winkler similarity for a vertex name to count as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Every vertex name in the graph, sorted ascending by code point.
///
/// Names are unique in the graph, so the result has no duplicates.
pub fn list_vertices(graph: &Graph) -> Vec<String> {
    let mut names: Vec<String> = graph.vertex_names().map(str::to_string).collect();
    names.sort_unstable();
    names
}

/// Up to `limit` vertex names that closely resemble `name`, best match first.
pub fn fuzzy_vertex_matches(graph: &Graph, name: &str, limit: usize) -> Vec<String> {
    let needle = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = graph
        .vertex_names()
        .map(|candidate| {
            (
                strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                candidate,
            )
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
