use std::path::Path;

use crate::error::Result;
use super::dataset_struct::Dataset;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a CSV format file to [`Dataset`].
/// The last column of the file is the prediction target.
/// # Example
/// ```no_run
/// use minitrees::DatasetReader;
/// let filename = "/path/to/csv/file.csv";
/// let dataset = DatasetReader::new()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P> {
    file: Option<P>,
    has_header: bool,
}


impl<P> DatasetReader<P> {
    /// Construct a new instance of [`DatasetReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P> Default for DatasetReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> DatasetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns the materialized [`Dataset`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Dataset> {
        let file = self.file
            .expect("The file name for csv is not set. Use `DatasetReader::file`.");
        Dataset::from_csv(file, self.has_header)
    }
}
