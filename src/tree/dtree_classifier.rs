//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;
use std::io;

use crate::Sample;
use crate::hypothesis::Classifier;
use super::node::Node;


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, sample: &Sample, row: usize) -> bool {
        self.root.classify(sample.at(row))
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node of this tree.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}")?;

        Ok(())
    }


    /// Write the current decision tree to a JSON file,
    /// so that a fitted tree can be stored and reloaded.
    pub fn to_json_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let json = serde_json::to_string(self)
            .map_err(|e| io::Error::new(
                io::ErrorKind::InvalidData, e.to_string(),
            ))?;
        let mut f = File::create(path)?;
        f.write_all(json.as_bytes())
    }


    /// Read a decision tree written by
    /// [`DecisionTreeClassifier::to_json_file`].
    pub fn from_json_file<P>(path: P) -> io::Result<Self>
        where P: AsRef<Path>
    {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| io::Error::new(
                io::ErrorKind::InvalidData, e.to_string(),
            ))
    }
}


impl fmt::Display for DecisionTreeClassifier {
    /// Renders the tree as nested if/else statements,
    /// one leaf decision (`YES`/`NO`) per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_indented(f, 0)
    }
}
