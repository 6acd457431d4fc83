use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use polars::prelude::*;

use super::schema::{ColumnType, Schema};
use super::example::{Example, Value};


// Column values collected from a dataframe before rows are assembled.
enum RawColumn {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}


/// Struct `Sample` holds a batch of typed examples
/// together with their column schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(crate) schema: Schema,
    pub(crate) examples: Vec<Example>,
}


impl Sample {
    /// Construct a sample from an existing schema and typed rows.
    /// Use this when the caller already holds typed examples;
    /// otherwise prefer [`SampleReader`](super::SampleReader).
    ///
    /// # Panics
    /// Panics when some example does not conform to
    /// the schema's column types.
    pub fn new(schema: Schema, examples: Vec<Example>) -> Self {
        let n_columns = schema.n_columns();
        let consistent = examples.iter()
            .all(|example| {
                (0..n_columns).all(|c| {
                    c == schema.target_index()
                        || type_matches(&schema, example, c)
                })
            });
        assert!(
            consistent,
            "Every example must conform to the schema's column types",
        );

        Self { schema, examples, }
    }


    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist
    /// or contains inconsistent data.
    pub(crate) fn from_csv<P>(
        file: P,
        target_feature: &str,
        positive_label: &str,
    ) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, target_feature, positive_label)
    }


    /// Read one CSV section from a [`BufReader`].
    ///
    /// The first line is the header naming the columns;
    /// `target_feature` designates the target column by exact name.
    /// Column types are inferred from the first data row and fixed.
    /// Rows containing `?` (missing values) are excluded,
    /// rows with the wrong number of fields are skipped with a warning
    /// on stderr, and a line starting with `---` ends the section.
    ///
    /// # Panics
    /// Panics when no column is named `target_feature`.
    pub fn from_reader<R>(
        reader: BufReader<R>,
        target_feature: &str,
        positive_label: &str,
    ) -> io::Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines();
        let names = read_header(&mut lines)?;
        let rows = read_section(&mut lines, names.len())?;

        let first = rows.first()
            .ok_or_else(|| io::Error::new(
                io::ErrorKind::InvalidData,
                "The file contains no usable data rows",
            ))?;
        let schema = Schema::infer(names, target_feature, first)?;

        let examples = rows.iter()
            .map(|fields| Example::parse(fields, &schema, positive_label))
            .collect::<io::Result<Vec<_>>>()?;

        Ok(Self { schema, examples, })
    }


    /// Read a training/test pair from a [`BufReader`]
    /// whose two CSV sections are separated by a `---` line.
    /// Both sections share the header
    /// and the types inferred from the first training row.
    ///
    /// # Panics
    /// Panics when no column is named `target_feature`.
    pub fn from_reader_train_test<R>(
        reader: BufReader<R>,
        target_feature: &str,
        positive_label: &str,
    ) -> io::Result<(Self, Self)>
        where R: Read,
    {
        let mut lines = reader.lines();
        let names = read_header(&mut lines)?;
        let width = names.len();

        let train_rows = read_section(&mut lines, width)?;
        let first = train_rows.first()
            .ok_or_else(|| io::Error::new(
                io::ErrorKind::InvalidData,
                "The training section contains no usable data rows",
            ))?;
        let schema = Schema::infer(names, target_feature, first)?;

        let train = train_rows.iter()
            .map(|fields| Example::parse(fields, &schema, positive_label))
            .collect::<io::Result<Vec<_>>>()?;

        let test_rows = read_section(&mut lines, width)?;
        let test = test_rows.iter()
            .map(|fields| Example::parse(fields, &schema, positive_label))
            .collect::<io::Result<Vec<_>>>()?;

        let train = Self { schema: schema.clone(), examples: train, };
        let test = Self { schema, examples: test, };
        Ok((train, test))
    }


    /// See [`Sample::from_reader_train_test`].
    pub(crate) fn from_csv_train_test<P>(
        file: P,
        target_feature: &str,
        positive_label: &str,
    ) -> io::Result<(Self, Self)>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader_train_test(reader, target_feature, positive_label)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    ///
    /// Utf8 columns become categorical features;
    /// every other column is cast to `f64` and becomes numeric.
    /// The target series may be boolean,
    /// Utf8 (truthy value `"1"`),
    /// or numeric (truthy value `1`).
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> io::Result<Self>
    {
        let (n_sample, _) = data.shape();

        let mut names = Vec::new();
        let mut types = Vec::new();
        let mut columns = Vec::new();
        for series in data.get_columns() {
            names.push(series.name().to_string());
            if series.dtype() == &DataType::Utf8 {
                let column = series.utf8()
                    .map_err(invalid)?
                    .into_iter()
                    .map(|value| value.map(String::from))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| null_value(series.name()))?;
                types.push(ColumnType::Categorical);
                columns.push(RawColumn::Categorical(column));
            } else {
                let casted = series.cast(&DataType::Float64)
                    .map_err(invalid)?;
                let column = casted.f64()
                    .map_err(invalid)?
                    .into_iter()
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| null_value(series.name()))?;
                types.push(ColumnType::Numeric);
                columns.push(RawColumn::Numeric(column));
            }
        }

        let target_values = target_as_bool(&target)?;
        if target_values.len() != n_sample {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "The target holds {} values, expected {n_sample}",
                    target_values.len(),
                ),
            ));
        }

        names.push(target.name().to_string());
        types.push(ColumnType::Categorical);
        let schema = Schema::new(names, types, target.name());

        let examples = (0..n_sample)
            .map(|row| {
                let y = target_values[row];
                let mut values = columns.iter()
                    .map(|column| match column {
                        RawColumn::Numeric(v) => Value::Numeric(v[row]),
                        RawColumn::Categorical(v) => {
                            Value::Categorical(v[row].clone())
                        },
                    })
                    .collect::<Vec<_>>();
                let raw = if y { "1" } else { "0" };
                values.push(Value::Categorical(raw.to_string()));
                Example::new(values, y)
            })
            .collect::<Vec<_>>();

        Ok(Self { schema, examples, })
    }


    /// Returns the column schema of this sample.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Returns a slice over the examples of this sample.
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns the pair of the number of examples and
    /// the number of feature columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.schema.n_columns() - 1)
    }


    /// Returns the `row`-th example.
    pub fn at(&self, row: usize) -> &Example {
        &self.examples[row]
    }


    /// Split `self` into two samples.
    /// The examples whose position in `ix` falls in `start..end`
    /// form the second (test) sample; the rest form the first.
    pub fn split<T>(&self, ix: T, start: usize, end: usize)
        -> (Sample, Sample)
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        let test_size = end - start;
        let mut train = Vec::with_capacity(ix.len().saturating_sub(test_size));
        let mut test = Vec::with_capacity(test_size);

        for (i, &row) in ix.iter().enumerate() {
            let example = self.examples[row].clone();
            if start <= i && i < end {
                test.push(example);
            } else {
                train.push(example);
            }
        }

        let train = Self { schema: self.schema.clone(), examples: train, };
        let test = Self { schema: self.schema.clone(), examples: test, };
        (train, test)
    }
}


fn type_matches(schema: &Schema, example: &Example, column: usize) -> bool {
    matches!(
        (schema.column_type(column), example.value(column)),
        (ColumnType::Numeric, Value::Numeric(_))
            | (ColumnType::Categorical, Value::Categorical(_))
    )
}


fn read_header<B>(lines: &mut io::Lines<B>) -> io::Result<Vec<String>>
    where B: BufRead,
{
    let line = lines.next()
        .ok_or_else(|| io::Error::new(
            io::ErrorKind::InvalidData,
            "The file is empty; expected a header row",
        ))??;
    let names = line.split(',')
        .map(|name| name.trim().to_string())
        .collect::<Vec<_>>();
    Ok(names)
}


// Collect the data rows of one CSV section.
// Stops at a `---` delimiter line or at the end of input.
fn read_section<B>(lines: &mut io::Lines<B>, width: usize)
    -> io::Result<Vec<Vec<String>>>
    where B: BufRead,
{
    let mut rows = Vec::new();
    for line in lines.by_ref() {
        let line = line?;
        if line.starts_with("---") {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        // Rows with missing values are excluded upstream.
        if line.contains('?') {
            continue;
        }

        let fields = line.split(',')
            .map(|field| field.trim().to_string())
            .collect::<Vec<_>>();
        if fields.len() != width {
            eprintln!(
                "Skipping a row with {got} fields, expected {width}: {line}",
                got = fields.len(),
            );
            continue;
        }
        rows.push(fields);
    }
    Ok(rows)
}


fn target_as_bool(target: &Series) -> io::Result<Vec<bool>> {
    let values = match target.dtype() {
        DataType::Boolean => {
            target.bool()
                .map_err(invalid)?
                .into_iter()
                .collect::<Option<Vec<_>>>()
        },
        DataType::Utf8 => {
            target.utf8()
                .map_err(invalid)?
                .into_iter()
                .map(|value| value.map(|value| value == "1"))
                .collect::<Option<Vec<_>>>()
        },
        _ => {
            let casted = target.cast(&DataType::Float64)
                .map_err(invalid)?;
            casted.f64()
                .map_err(invalid)?
                .into_iter()
                .map(|value| value.map(|value| value == 1.0))
                .collect::<Option<Vec<_>>>()
        },
    };
    values.ok_or_else(|| null_value(target.name()))
}


fn invalid<E>(error: E) -> io::Error
    where E: ToString,
{
    io::Error::new(io::ErrorKind::InvalidData, error.to_string())
}


fn null_value(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("The column `{name}` contains null values"),
    )
}
