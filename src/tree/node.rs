//! Defines the inner representation of the decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::sample::Example;
use super::split_rule::{Answer, Predicate};


/// Enumeration of `BranchNode` and `LeafNode`.
/// Every node is exactly one of the two:
/// a branch owns a predicate and two children,
/// a leaf owns a decision and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) predicate: Predicate,
    pub(super) yes: Box<Node>,
    pub(super) no: Box<Node>,
}


impl BranchNode {
    /// Returns the predicate tested at this branch.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }


    /// Returns the subtree for examples satisfying the predicate.
    pub fn yes_branch(&self) -> &Node {
        &self.yes
    }


    /// Returns the subtree for examples failing the predicate.
    pub fn no_branch(&self) -> &Node {
        &self.no
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) decision: bool,
}


impl LeafNode {
    /// Returns the decision this leaf predicts.
    pub fn decision(&self) -> bool {
        self.decision
    }
}


impl Node {
    /// Construct a branch node from its components.
    #[inline]
    pub(super) fn branch(predicate: Predicate, yes: Node, no: Node) -> Self {
        Self::Branch(BranchNode {
            predicate,
            yes: Box::new(yes),
            no: Box::new(no),
        })
    }


    /// Construct a leaf node that predicts `decision`.
    #[inline]
    pub(super) fn leaf(decision: bool) -> Self {
        Self::Leaf(LeafNode { decision, })
    }


    /// Predicts the label of the given example
    /// by walking the tree to a leaf.
    /// Terminates since the tree is finite and acyclic.
    #[inline]
    pub fn classify(&self, example: &Example) -> bool {
        match self {
            Node::Branch(node) => {
                match node.predicate.apply(example) {
                    Answer::Yes => node.yes.classify(example),
                    Answer::No => node.no.classify(example),
                }
            },
            Node::Leaf(node) => node.decision,
        }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Returns the number of leaves of this sub-tree.
    #[inline]
    pub fn leaves(&self) -> usize {
        match self {
            Node::Branch(node) => node.yes.leaves() + node.no.leaves(),
            Node::Leaf(_) => 1_usize,
        }
    }


    // Render this sub-tree as nested if/else statements,
    // indented four spaces per level.
    pub(super) fn write_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
    ) -> fmt::Result
    {
        let pad = "    ".repeat(depth);
        match self {
            Node::Branch(node) => {
                writeln!(f, "{pad}if {}", node.predicate)?;
                node.yes.write_indented(f, depth + 1)?;
                writeln!(f, "{pad}else")?;
                node.no.write_indented(f, depth + 1)
            },
            Node::Leaf(node) => {
                let decision = if node.decision { "YES" } else { "NO" };
                writeln!(f, "{pad}{decision}")
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{pred} ?\" ];\n",
                    pred = b.predicate,
                );

                let (l_info, next_id) = b.yes.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.no.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = if l.decision { "YES" } else { "NO" },
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
