//! A single typed row of a sample.
use std::io;

use serde::{Serialize, Deserialize};

use super::schema::{ColumnType, Schema};


/// The value an example holds for one column.
/// Which variant is meaningful is fixed by the column's
/// [`ColumnType`] tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A value of a numeric column.
    Numeric(f64),
    /// A value of a categorical column.
    Categorical(String),
}


/// An immutable typed row:
/// one [`Value`] per column plus the boolean target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    values: Vec<Value>,
    target: bool,
}


impl Example {
    /// Construct an example from typed values and its target.
    /// The `values` are indexed by schema column;
    /// the entry at the target column is never read.
    pub fn new(values: Vec<Value>, target: bool) -> Self {
        Self { values, target, }
    }


    /// Parse the fields of a CSV row against `schema`.
    /// The target field is compared against `positive_label`
    /// to obtain the boolean target.
    ///
    /// A field of a numeric column that fails to parse is a data
    /// inconsistency and yields `io::ErrorKind::InvalidData`;
    /// the column is **not** re-typed.
    pub(super) fn parse<T>(
        fields: &[T],
        schema: &Schema,
        positive_label: &str,
    ) -> io::Result<Self>
        where T: AsRef<str>,
    {
        let mut target = false;
        let mut values = Vec::with_capacity(fields.len());
        for (column, field) in fields.iter().enumerate() {
            let field = field.as_ref().trim();
            if column == schema.target_index() {
                target = field == positive_label;
                values.push(Value::Categorical(field.to_string()));
                continue;
            }

            let value = match schema.column_type(column) {
                ColumnType::Numeric => {
                    let value = field.parse::<f64>()
                        .map_err(|_| io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!(
                                "Got non-numerical value `{field}` \
                                 in numeric column `{name}`",
                                name = schema.name(column),
                            ),
                        ))?;
                    Value::Numeric(value)
                },
                ColumnType::Categorical => {
                    Value::Categorical(field.to_string())
                },
            };
            values.push(value);
        }

        Ok(Self { values, target, })
    }


    /// Returns the value of the `column`-th column.
    pub fn value(&self, column: usize) -> &Value {
        &self.values[column]
    }


    /// Returns the numeric value of the `column`-th column.
    ///
    /// # Panics
    /// Panics when the column is not numeric.
    pub fn numeric(&self, column: usize) -> f64 {
        match &self.values[column] {
            Value::Numeric(value) => *value,
            Value::Categorical(_) => {
                panic!("Column {column} is not a numeric column");
            },
        }
    }


    /// Returns the categorical value of the `column`-th column.
    ///
    /// # Panics
    /// Panics when the column is not categorical.
    pub fn categorical(&self, column: usize) -> &str {
        match &self.values[column] {
            Value::Categorical(value) => value,
            Value::Numeric(_) => {
                panic!("Column {column} is not a categorical column");
            },
        }
    }


    /// Returns the target value of this example.
    pub fn target(&self) -> bool {
        self.target
    }
}
