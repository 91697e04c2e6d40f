//! Breadth-first tree construction from the edge table.

use std::collections::{HashSet, VecDeque};

use crate::error::{NodeGraphError, Result};
use crate::graph::store::EdgeStore;
use crate::types::NodeTree;

/// A node in the traversal arena. Children are indices into the arena;
/// every child index is greater than its parent's, so assembly can recurse
/// without bookkeeping.
struct Slot {
    id: i64,
    children: Vec<usize>,
}

/// Build the tree of descendants reachable from `root_id`.
///
/// The root must appear as the source or the target of at least one edge;
/// otherwise [`NodeGraphError::NotFound`] is returned. A root with only
/// incoming edges is a legitimate leaf and yields a single-node tree.
///
/// Expansion is breadth-first, one `children_of` query per dequeued node,
/// children appended in the order the store returns them. Stored edges may
/// form cycles; a visited set keeps the traversal finite. An id reached a
/// second time (through a cycle or a second parent) is attached as an
/// unexpanded leaf at that position.
///
/// The traversal is read-only and not isolated against concurrent edge
/// mutations: a concurrent insert or delete may produce a tree reflecting
/// a graph state that never existed at a single instant.
pub fn build_tree(store: &EdgeStore, root_id: i64) -> Result<NodeTree> {
    if !store.node_exists(root_id)? {
        return Err(NodeGraphError::NotFound(format!(
            "Node {root_id} not found."
        )));
    }

    let mut arena = vec![Slot {
        id: root_id,
        children: Vec::new(),
    }];
    let mut queue: VecDeque<usize> = VecDeque::from([0]);
    let mut visited: HashSet<i64> = HashSet::from([root_id]);

    while let Some(current) = queue.pop_front() {
        let parent_id = arena[current].id;
        for child_id in store.children_of(parent_id)? {
            let slot = arena.len();
            arena.push(Slot {
                id: child_id,
                children: Vec::new(),
            });
            arena[current].children.push(slot);
            if visited.insert(child_id) {
                queue.push_back(slot);
            }
        }
    }

    Ok(assemble(&arena, 0))
}

fn assemble(arena: &[Slot], index: usize) -> NodeTree {
    NodeTree {
        id: arena[index].id,
        children: arena[index]
            .children
            .iter()
            .map(|&child| assemble(arena, child))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
