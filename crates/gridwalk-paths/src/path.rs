use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Result, SearchError};

/// Predecessor map built by a search. The start node maps to `None`.
pub type CameFrom<N> = HashMap<N, Option<N>>;

/// Best known accumulated cost per discovered node.
pub type CostSoFar<N> = HashMap<N, i32>;

/// Rebuild the path from `start` to `goal` (both inclusive) by walking
/// `came_from` backwards from `goal`.
///
/// Fails with [`SearchError::UnreachableGoal`] if `goal` was never
/// discovered, and with [`SearchError::MalformedPredecessorChain`] if the
/// walk hits a missing entry, a root other than `start`, or takes more steps
/// than there are entries (a cycle).
pub fn reconstruct_path<N>(came_from: &CameFrom<N>, start: &N, goal: &N) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    if goal == start {
        return Ok(vec![start.clone()]);
    }
    if !came_from.contains_key(goal) {
        return Err(SearchError::UnreachableGoal);
    }

    let mut path = vec![goal.clone()];
    let mut current = goal;
    let mut steps = 0;
    while current != start {
        steps += 1;
        if steps > came_from.len() {
            return Err(SearchError::MalformedPredecessorChain { steps });
        }
        current = match came_from.get(current) {
            Some(Some(prev)) => prev,
            _ => return Err(SearchError::MalformedPredecessorChain { steps }),
        };
        path.push(current.clone());
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(pairs: &[(char, Option<char>)]) -> CameFrom<char> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn walks_back_to_start() {
        let cf = chain(&[('a', None), ('b', Some('a')), ('c', Some('b')), ('x', Some('a'))]);
        assert_eq!(reconstruct_path(&cf, &'a', &'c'), Ok(vec!['a', 'b', 'c']));
        assert_eq!(reconstruct_path(&cf, &'a', &'x'), Ok(vec!['a', 'x']));
    }

    #[test]
    fn start_equals_goal() {
        let cf = chain(&[('a', None)]);
        assert_eq!(reconstruct_path(&cf, &'a', &'a'), Ok(vec!['a']));
        assert_eq!(reconstruct_path(&CameFrom::new(), &'a', &'a'), Ok(vec!['a']));
    }

    #[test]
    fn undiscovered_goal_is_unreachable() {
        let cf = chain(&[('a', None), ('b', Some('a'))]);
        assert_eq!(
            reconstruct_path(&cf, &'a', &'z'),
            Err(SearchError::UnreachableGoal)
        );
    }

    #[test]
    fn cycle_is_malformed() {
        let cf = chain(&[('a', None), ('b', Some('c')), ('c', Some('b'))]);
        assert!(matches!(
            reconstruct_path(&cf, &'a', &'b'),
            Err(SearchError::MalformedPredecessorChain { .. })
        ));
    }

    #[test]
    fn dangling_predecessor_is_malformed() {
        let cf = chain(&[('a', None), ('c', Some('q'))]);
        assert_eq!(
            reconstruct_path(&cf, &'a', &'c'),
            Err(SearchError::MalformedPredecessorChain { steps: 2 })
        );
    }

    #[test]
    fn foreign_root_is_malformed() {
        // 'r' is the root of a different search.
        let cf = chain(&[('r', None), ('b', Some('r'))]);
        assert_eq!(
            reconstruct_path(&cf, &'a', &'b'),
            Err(SearchError::MalformedPredecessorChain { steps: 2 })
        );
    }
}
