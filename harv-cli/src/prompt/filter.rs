/// Case-insensitive substring filtering over an option list.
///
/// Returns the indices of matching options in their original order. An empty
/// query matches everything. The result is always computed from the full
/// list, never from a previous filtered view, so removing query characters
/// restores previously hidden options.
pub fn filter_indices(options: &[String], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        ["Alpha", "Beta", "Gamma"].map(String::from).to_vec()
    }

    #[test]
    fn empty_query_keeps_every_option() {
        assert_eq!(filter_indices(&options(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(filter_indices(&options(), "alph"), vec![0]);
        assert_eq!(filter_indices(&options(), "AMM"), vec![2]);
    }

    #[test]
    fn preserves_original_order() {
        assert_eq!(filter_indices(&options(), "a"), vec![0, 1, 2]);
        assert_eq!(filter_indices(&options(), "am"), vec![2]);
    }

    #[test]
    fn no_match_yields_empty_view() {
        assert!(filter_indices(&options(), "zzz").is_empty());
    }

    #[test]
    fn shorter_query_restores_hidden_options() {
        // Filtering must restart from the full list: "ab" hides everything,
        // dropping back to "a" must show the same view as typing "a" alone.
        assert!(filter_indices(&options(), "ab").is_empty());
        assert_eq!(filter_indices(&options(), "a"), filter_indices(&options(), "a"));
        assert_eq!(filter_indices(&options(), "a"), vec![0, 1, 2]);
    }
}
