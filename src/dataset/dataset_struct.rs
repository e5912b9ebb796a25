use polars::prelude::*;
use rayon::prelude::*;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;

use crate::error::{Result, TreeError};
use super::filter::Filter;
use super::breakdown::{Breakdown, Histogram};


/// A dictionary-encoded categorical column.
#[derive(Debug, Clone, Default)]
pub(crate) struct Column {
    levels: Vec<String>,
    codes: Vec<u32>,
    index: HashMap<String, u32>,
}


impl Column {
    /// Append a value to the tail of this column.
    #[inline]
    pub(crate) fn push(&mut self, value: &str) {
        let code = match self.index.get(value) {
            Some(&code) => code,
            None => {
                let code = self.levels.len() as u32;
                self.levels.push(value.to_string());
                self.index.insert(value.to_string(), code);
                code
            },
        };
        self.codes.push(code);
    }


    /// Convert `polars::Series` into `Column`.
    /// Every dtype is cast to string first.
    fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();
        let series = series.cast(&DataType::Utf8)?;
        let values = series.utf8()?;

        let mut column = Self::default();
        for (row, value) in values.into_iter().enumerate() {
            let value = value.ok_or_else(|| {
                TreeError::MissingValue { column: name.clone(), row }
            })?;
            column.push(value);
        }
        Ok(column)
    }


    #[inline]
    fn code_of(&self, value: &str) -> Option<u32> {
        self.index.get(value).copied()
    }


    #[inline]
    fn value_at(&self, row: usize) -> &str {
        &self.levels[self.codes[row] as usize]
    }


    /// Number of distinct values in this column.
    #[inline]
    pub(crate) fn n_levels(&self) -> usize {
        self.levels.len()
    }
}


/// A filter resolved to dictionary codes.
/// `None` means the value never appears in the column,
/// so no row matches.
type Resolved = Vec<(usize, Option<u32>)>;


/// Struct `Dataset` holds a materialized categorical table.
/// The last column is the prediction target,
/// all other columns are features addressed by 1-based indices.
/// A `Dataset` is never modified after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(super) names: Vec<String>,
    pub(super) columns: Vec<Column>,
    pub(super) n_rows: usize,
}


impl Dataset {
    /// Construct a `Dataset` from the column names and string rows.
    /// Each row must have exactly `names.len()` cells.
    pub fn from_rows<S, R, T>(names: &[S], rows: R) -> Result<Self>
        where S: AsRef<str>,
              R: IntoIterator<Item = Vec<T>>,
              T: AsRef<str>,
    {
        let names = names.iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();
        let width = names.len();
        let mut columns = vec![Column::default(); width];

        let mut n_rows = 0_usize;
        for row in rows {
            if row.len() != width {
                return Err(TreeError::RaggedRow {
                    row: n_rows, expected: width, found: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row.iter()) {
                column.push(value.as_ref());
            }
            n_rows += 1;
        }

        Ok(Self { names, columns, n_rows })
    }


    /// Read a CSV format file to `Dataset` type.
    /// Cells are trimmed. If the file has no header,
    /// the columns are named `Feat. [1]`, `Feat. [2]`, ...
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut names = Vec::new();
        if has_header {
            match lines.next() {
                Some(line) => {
                    names = line?.split(',')
                        .map(|name| name.trim().to_string())
                        .collect::<Vec<_>>();
                },
                None => { return Err(TreeError::EmptySource); },
            }
        }

        let mut rows = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let row = line.split(',')
                .map(|x| x.trim().to_string())
                .collect::<Vec<_>>();

            // if the header does not exist,
            // construct a dummy header.
            if names.is_empty() {
                names = (1..=row.len())
                    .map(|i| format!("Feat. [{i}]"))
                    .collect::<Vec<_>>();
            }
            rows.push(row);
        }

        Self::from_rows(&names[..], rows)
    }


    /// Convert `polars::DataFrame` into `Dataset`.
    /// The last column of `data` is used as the target.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let n_rows = data.height();
        let names = data.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();

        let columns = data.get_columns()
            .par_iter()
            .map(Column::from_series)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { names, columns, n_rows })
    }


    /// Returns the pair `(# of rows, # of columns)`.
    /// The column count includes the target.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }


    /// Returns the number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }


    /// Returns the number of columns, target included.
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }


    /// Returns the column names.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns an iterator over the rows that satisfy
    /// every filter in `filters`.
    /// Each row is returned as the full list of cells, target included.
    pub fn rows<'a>(&'a self, filters: &[Filter]) -> Rows<'a> {
        Rows {
            dataset: self,
            filters: self.resolve(filters),
            cursor: 0,
        }
    }


    /// Group the rows matching `path` by the value of `column`,
    /// counting the target classes per group.
    pub fn breakdown(&self, path: &[Filter], column: usize) -> Breakdown {
        let n_features = self.width().saturating_sub(1);
        assert!(
            (1..=n_features).contains(&column),
            "Column {column} is not a feature column (1..={n_features})"
        );

        let target = self.target();
        let n_class = target.n_levels();
        let resolved = self.resolve(path);
        let feature = &self.columns[column - 1];

        let mut groups: HashMap<u32, Histogram> = HashMap::new();
        for row in (0..self.n_rows).filter(|&r| self.matches(&resolved, r)) {
            groups.entry(feature.codes[row])
                .or_insert_with(|| Histogram::new(n_class))
                .add(target.codes[row] as usize);
        }

        let mut breakdown = Breakdown::new(n_class);
        breakdown.distribution = groups.into_iter()
            .map(|(code, hist)| (feature.levels[code as usize].clone(), hist))
            .collect();
        breakdown
    }


    #[inline]
    fn target(&self) -> &Column {
        self.columns.last()
            .expect("A dataset without columns has no target")
    }


    fn resolve(&self, filters: &[Filter]) -> Resolved {
        filters.iter()
            .map(|filter| {
                let column = filter.column - 1;
                let code = self.columns.get(column)
                    .and_then(|col| col.code_of(&filter.value));
                (column, code)
            })
            .collect()
    }


    #[inline]
    fn matches(&self, resolved: &Resolved, row: usize) -> bool {
        resolved.iter()
            .all(|&(column, code)| {
                code.is_some_and(|c| self.columns[column].codes[row] == c)
            })
    }
}


/// Iterator over the rows of a [`Dataset`] that match a filter conjunction.
/// Constructed by [`Dataset::rows`].
pub struct Rows<'a> {
    dataset: &'a Dataset,
    filters: Resolved,
    cursor: usize,
}


impl<'a> Iterator for Rows<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        let dataset = self.dataset;
        while self.cursor < dataset.n_rows {
            let row = self.cursor;
            self.cursor += 1;
            if dataset.matches(&self.filters, row) {
                let cells = dataset.columns.iter()
                    .map(|column| column.value_at(row))
                    .collect::<Vec<_>>();
                return Some(cells);
            }
        }
        None
    }
}
