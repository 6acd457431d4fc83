use std::path::Path;
use std::io;

use super::sample_struct::Sample;

const DEFAULT_POSITIVE_LABEL: &str = "1";


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use greedytree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .target_feature("Target")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    target: Option<S>,
    positive_label: String,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            target: None,
            positive_label: DEFAULT_POSITIVE_LABEL.to_string(),
        }
    }


    /// Set the raw target value that counts as `true`.
    /// Default is `"1"`.
    pub fn positive_label<T: ToString>(mut self, label: T) -> Self {
        self.positive_label = label.to_string();
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `std::io::Result<Sample>`.
    /// This method consumes `self.`
    ///
    /// # Panics
    /// Panics when the file name or the target column is not set.
    pub fn read(self) -> io::Result<Sample> {
        let (file, target) = self.required();
        Sample::from_csv(file, target.as_ref(), &self.positive_label)
    }


    /// Reads a file whose training and test sections are separated by
    /// a `---` line, and returns the pair `(train, test)`.
    /// This method consumes `self.`
    ///
    /// # Panics
    /// Panics when the file name or the target column is not set.
    pub fn read_train_test(self) -> io::Result<(Sample, Sample)> {
        let (file, target) = self.required();
        Sample::from_csv_train_test(
            file, target.as_ref(), &self.positive_label,
        )
    }


    fn required(&self) -> (&P, &S) {
        let file = self.file.as_ref()
            .unwrap_or_else(|| panic!("The file name for csv is not set"));
        let target = self.target.as_ref()
            .unwrap_or_else(|| panic!(
                "Target (class) column is not specified. \
                 Use `SampleReader::target_feature`."
            ));
        (file, target)
    }
}
