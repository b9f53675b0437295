//! Search states and the arena that holds them
//!
//! States are stored once in a [`SearchTree`] and point back to their parent
//! by [`NodeId`]. Solution paths are rebuilt by walking those links.

use super::board::{Board, GOAL_TARGET};
use super::movegen::successor_boards;

// ============================================================================
// GOAL AND HEURISTIC
// ============================================================================

/// True when the goal piece's top-left cell sits on the target
pub fn goal_test(board: &Board) -> bool {
    board.goal().is_some_and(|goal| goal.origin == GOAL_TARGET)
}

/// Manhattan distance from the goal piece to the target.
///
/// Each slide moves the goal piece by at most one cell, so this never
/// overestimates the number of slides left.
pub fn heuristic(board: &Board) -> u32 {
    board
        .goal()
        .map_or(0, |goal| goal.origin.distance_to(GOAL_TARGET))
}

// ============================================================================
// STATE
// ============================================================================

/// Node identifier (index into arena)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// A board plus the bookkeeping the searches need
#[derive(Clone, Debug)]
pub struct State {
    pub board: Board,
    /// Slides from the root
    pub depth: u32,
    /// Path cost so far (one per slide)
    pub cost: u32,
    /// Cost plus heuristic
    pub f: u32,
    /// Content-derived tie-break for the A* frontier
    pub id: u64,
    /// Parent node (None for root)
    pub parent: Option<NodeId>,
}

impl State {
    /// Root state: no cost yet, so f is the heuristic alone
    pub fn root(board: Board) -> Self {
        let f = heuristic(&board);
        let id = board.content_id();
        Self {
            board,
            depth: 0,
            cost: 0,
            f,
            id,
            parent: None,
        }
    }

    fn child(&self, parent: NodeId, board: Board) -> Self {
        let cost = self.cost + 1;
        let f = cost + heuristic(&board);
        let id = board.content_id();
        Self {
            board,
            depth: self.depth + 1,
            cost,
            f,
            id,
            parent: Some(parent),
        }
    }

    /// Successor states of this one, which lives at `me` in the arena
    pub fn expand(&self, me: NodeId) -> Vec<State> {
        successor_boards(&self.board)
            .into_iter()
            .map(|board| self.child(me, board))
            .collect()
    }

    pub fn is_goal(&self) -> bool {
        goal_test(&self.board)
    }
}

// ============================================================================
// ARENA
// ============================================================================

/// Every state created during one search
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<State>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a state and return its id
    pub fn add(&mut self, state: State) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(state);
        id
    }

    pub fn get(&self, id: NodeId) -> &State {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Boards from the root down to `id`
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            let state = self.get(node);
            path.push(state.board.clone());
            current = state.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str = "^11^\nv11v\n^<>^\nv22v\n2..2\n";
    const SOLVED: &str = "^<>^\nv22v\n^22^\nv11v\n.11.\n";

    #[test]
    fn test_heuristic_and_goal_test() {
        let classic = Board::parse(CLASSIC).unwrap();
        assert_eq!(heuristic(&classic), 3);
        assert!(!goal_test(&classic));

        let solved = Board::parse(SOLVED).unwrap();
        assert_eq!(heuristic(&solved), 0);
        assert!(goal_test(&solved));
    }

    #[test]
    fn test_root_f_is_heuristic() {
        let root = State::root(Board::parse(CLASSIC).unwrap());
        assert_eq!(root.depth, 0);
        assert_eq!(root.cost, 0);
        assert_eq!(root.f, 3);
        assert!(root.parent.is_none());
    }

    #[test]
    fn test_children_cost_one_more() {
        let root = State::root(Board::parse(CLASSIC).unwrap());
        let children = root.expand(NodeId::ROOT);
        assert_eq!(children.len(), 4);
        for child in &children {
            assert_eq!(child.depth, 1);
            assert_eq!(child.cost, 1);
            assert_eq!(child.f, 1 + heuristic(&child.board));
            assert_eq!(child.parent, Some(NodeId::ROOT));
            assert_eq!(child.id, child.board.content_id());
        }
    }

    #[test]
    fn test_path_to_walks_back_to_root() {
        let mut tree = SearchTree::new();
        let root = State::root(Board::parse(CLASSIC).unwrap());
        let root_board = root.board.clone();
        let root_id = tree.add(root);

        let child = tree.get(root_id).expand(root_id).remove(0);
        let child_board = child.board.clone();
        let child_id = tree.add(child);

        let grandchild = tree.get(child_id).expand(child_id).remove(0);
        let grandchild_board = grandchild.board.clone();
        let grandchild_id = tree.add(grandchild);

        assert_eq!(tree.len(), 3);
        assert_eq!(
            tree.path_to(grandchild_id),
            vec![root_board.clone(), child_board, grandchild_board]
        );
        assert_eq!(tree.path_to(root_id), vec![root_board]);
    }
}
