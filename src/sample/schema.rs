//! Column names, column types, and the designated target column.
use std::io;

use serde::{Serialize, Deserialize};


/// The type of a feature column.
/// Each column is tagged exactly once, by inspecting the first data row,
/// and keeps its tag for the lifetime of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// The column holds `f64` values.
    /// Splits on this column compare with `<` against a threshold.
    Numeric,
    /// The column holds arbitrary strings.
    /// Splits on this column compare with `=` against an observed value.
    Categorical,
}


/// An ordered list of column names with their types,
/// one column of which is the boolean classification target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    names: Vec<String>,
    types: Vec<ColumnType>,
    target: usize,
}


impl Schema {
    /// Construct a schema from explicit column names and types.
    /// `target_feature` designates the target column by exact name.
    ///
    /// # Panics
    /// Panics when no column is named `target_feature`
    /// or when `names` and `types` differ in length.
    pub fn new<S>(names: Vec<String>, types: Vec<ColumnType>, target_feature: S)
        -> Self
        where S: AsRef<str>
    {
        assert!(
            names.len() == types.len(),
            "Each column needs exactly one type tag",
        );
        let target_feature = target_feature.as_ref();
        let target = names.iter()
            .position(|name| name == target_feature)
            .expect("The target class does not exist");

        Self { names, types, target, }
    }


    /// Infer a schema from the header names and the first data row.
    /// A column whose first value parses as `f64` is tagged
    /// [`ColumnType::Numeric`]; every other column is
    /// [`ColumnType::Categorical`].
    /// The target column is always tagged categorical since its raw
    /// field is compared against the truthy label as a string.
    /// The tags are never revisited,
    /// even if a later row fails to parse for a numeric column.
    ///
    /// # Panics
    /// Panics when no column is named `target_feature`.
    pub fn infer<S, T>(names: Vec<String>, target_feature: S, first_row: &[T])
        -> io::Result<Self>
        where S: AsRef<str>,
              T: AsRef<str>,
    {
        if names.len() != first_row.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "The first data row has {} fields, expected {}",
                    first_row.len(),
                    names.len(),
                ),
            ));
        }

        let target_feature = target_feature.as_ref();
        let target = names.iter()
            .position(|name| name == target_feature)
            .expect("The target class does not exist");

        let types = first_row.iter()
            .enumerate()
            .map(|(i, field)| {
                if i == target {
                    return ColumnType::Categorical;
                }
                match field.as_ref().trim().parse::<f64>() {
                    Ok(_) => ColumnType::Numeric,
                    Err(_) => ColumnType::Categorical,
                }
            })
            .collect::<Vec<_>>();

        Ok(Self { names, types, target, })
    }


    /// Returns the number of columns, including the target column.
    pub fn n_columns(&self) -> usize {
        self.names.len()
    }


    /// Returns the name of the `column`-th column.
    pub fn name(&self, column: usize) -> &str {
        &self.names[column]
    }


    /// Returns the type tag of the `column`-th column.
    pub fn column_type(&self, column: usize) -> ColumnType {
        self.types[column]
    }


    /// Returns the index of the target column.
    pub fn target_index(&self) -> usize {
        self.target
    }


    /// Returns an iterator over the feature column indices,
    /// in schema order, skipping the target column.
    pub fn feature_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.names.len()).filter(move |&i| i != self.target)
    }
}
