//! Tabular input: columns, records, and tables.

use std::{ops::Deref, sync::Arc};

use crate::{
    error::RecordError,
    value::{ScalarType, Value},
};

/// One named, typed column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    data_type: ScalarType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> ScalarType {
        self.data_type
    }
}

/// Validated, ordered column set shared by every record of a table.
///
/// Column names are non-empty and unique under ASCII-case-insensitive
/// comparison; lookup is always case-insensitive equality, never prefix or
/// fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns(Vec<Column>);

impl Columns {
    pub fn new(columns: Vec<Column>) -> Result<Self, RecordError> {
        if columns.is_empty() {
            return Err(RecordError::NoColumns);
        }
        for (i, column) in columns.iter().enumerate() {
            if column.name().is_empty() {
                return Err(RecordError::EmptyColumnName);
            }
            if columns[..i]
                .iter()
                .any(|c| c.name().eq_ignore_ascii_case(column.name()))
            {
                return Err(RecordError::DuplicateColumn {
                    name: column.name().to_string(),
                });
            }
        }
        Ok(Self(columns))
    }

    /// Position of the column matching `name` case-insensitively.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn as_slice(&self) -> &[Column] {
        &self.0
    }
}

impl Deref for Columns {
    type Target = [Column];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[Column]> for Columns {
    fn as_ref(&self) -> &[Column] {
        self.as_slice()
    }
}

/// One row of named, typed, nullable field values.
///
/// Records are transient: built per input row, consumed by one
/// materialization, then discarded. The column set is shared via `Arc` so a
/// table's rows carry no per-row schema copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Arc<Columns>,
    values: Vec<Value>,
}

impl Record {
    /// Build a record over `columns`; the value count must match the column
    /// count exactly.
    pub fn new(columns: Arc<Columns>, values: Vec<Value>) -> Result<Self, RecordError> {
        if values.len() != columns.len() {
            return Err(RecordError::WidthMismatch {
                expected: columns.len(),
                actual: values.len(),
            });
        }
        Ok(Self { columns, values })
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    /// Field value by case-insensitive column name.
    ///
    /// `None` means the column is absent from the record's schema, which is
    /// distinct from `Some(&Value::Null)` (present but null).
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.columns.index_of(name).map(|i| &self.values[i])
    }

    /// Field value by column position.
    ///
    /// Panics if `index` is out of bounds; valid indices come from
    /// [`Columns::index_of`].
    pub fn value_at(&self, index: usize) -> &Value {
        &self.values[index]
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Columns paired with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Column, &Value)> {
        self.columns.iter().zip(self.values.iter())
    }
}

/// Ordered collection of records sharing one column set.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Arc<Columns>,
    records: Vec<Record>,
}

impl Table {
    pub fn new(columns: Columns) -> Self {
        Self {
            columns: Arc::new(columns),
            records: Vec::new(),
        }
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Append a row; width-checked against the table's columns.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<(), RecordError> {
        let record = Record::new(Arc::clone(&self.columns), values)?;
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
