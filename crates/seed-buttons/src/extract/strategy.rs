//! Ordered heuristic chains.
//!
//! Each property with a fallback chain lists its heuristics as a slice of
//! pure functions. The first one that produces a value decides; the
//! property's documented default covers the case where none does.

/// A single heuristic over some input.
pub type Strategy<I, T> = fn(&I) -> Option<T>;

/// Run `strategies` in order and return the first value produced.
pub fn first_match<I, T>(strategies: &[Strategy<I, T>], input: &I) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &i32) -> Option<&'static str> {
        None
    }

    fn positive(n: &i32) -> Option<&'static str> {
        (*n > 0).then_some("positive")
    }

    fn always(_: &i32) -> Option<&'static str> {
        Some("fallback")
    }

    #[test]
    fn test_first_match_order() {
        let chain: [Strategy<i32, &str>; 3] = [never, positive, always];
        assert_eq!(first_match(&chain, &5), Some("positive"));
        assert_eq!(first_match(&chain, &-5), Some("fallback"));
    }

    #[test]
    fn test_empty_chain() {
        let chain: [Strategy<i32, &str>; 0] = [];
        assert_eq!(first_match(&chain, &1), None);
    }
}
