use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use csv::StringRecord;
use thiserror::Error;

/// Longest name accepted from an input row.
pub const NAME_MAX: usize = 99;

/// Row-to-record conversion errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid row format: {0}")]
    InvalidFormat(String),

    #[error("invalid value for field '{field}': '{value}'")]
    InvalidType { field: String, value: String },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field '{field}' exceeds {limit} characters")]
    FieldTooLong { field: String, limit: usize },
}

fn text_field<'a>(row: &'a StringRecord, index: usize, name: &str) -> Result<&'a str, ParseError> {
    row.get(index)
        .ok_or_else(|| ParseError::MissingField(name.into()))
}

fn numeric_field<N>(row: &StringRecord, index: usize, name: &str) -> Result<N, ParseError>
where
    N: FromStr,
{
    let raw = text_field(row, index, name)?;
    raw.parse().map_err(|_| ParseError::InvalidType {
        field: name.into(),
        value: raw.into(),
    })
}

fn name_field(row: &StringRecord, index: usize) -> Result<String, ParseError> {
    let raw = text_field(row, index, "name")?;
    if raw.chars().count() > NAME_MAX {
        return Err(ParseError::FieldTooLong {
            field: "name".into(),
            limit: NAME_MAX,
        });
    }
    Ok(raw.to_string())
}

// =============================================================================
// Student
// =============================================================================

/// A student record, ordered by id in the demo databases.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub gpa: f32,
}

impl Student {
    pub fn new(id: u64, name: impl Into<String>, gpa: f32) -> Self {
        Student {
            id,
            name: name.into(),
            gpa,
        }
    }

    /// A lookup template: only the id takes part in the ordering, so the
    /// other fields stay blank.
    pub fn template(id: u64) -> Self {
        Student::new(id, "", 0.0)
    }

    /// Comparator for id-ordered containers.
    pub fn compare_by_id(a: &Student, b: &Student) -> Ordering {
        a.id.cmp(&b.id)
    }

    /// Converts a `id,name,gpa` row into a record.
    pub fn from_csv_row(row: &StringRecord) -> Result<Self, ParseError> {
        if row.len() < 3 {
            return Err(ParseError::InvalidFormat(format!("{:?}", row)));
        }
        let id = numeric_field(row, 0, "id")?;
        let name = name_field(row, 1)?;
        let gpa = numeric_field(row, 2, "gpa")?;
        Ok(Student { id, name, gpa })
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student's data:")?;
        writeln!(f, "    id: {}", self.id)?;
        writeln!(f, "    Name: {}", self.name)?;
        write!(f, "    GPA: {:.2}", self.gpa)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record, ordered by id in the demo databases.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f32,
    pub cost: f32,
    pub stock: u32,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, price: f32, cost: f32, stock: u32) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            cost,
            stock,
        }
    }

    pub fn template(id: u64) -> Self {
        Product::new(id, "", 0.0, 0.0, 0)
    }

    pub fn compare_by_id(a: &Product, b: &Product) -> Ordering {
        a.id.cmp(&b.id)
    }

    /// Converts a `id,name,price,cost,stock` row into a record.
    pub fn from_csv_row(row: &StringRecord) -> Result<Self, ParseError> {
        if row.len() < 5 {
            return Err(ParseError::InvalidFormat(format!("{:?}", row)));
        }
        let id = numeric_field(row, 0, "id")?;
        let name = name_field(row, 1)?;
        let price = numeric_field(row, 2, "price")?;
        let cost = numeric_field(row, 3, "cost")?;
        let stock = numeric_field(row, 4, "stock")?;
        Ok(Product {
            id,
            name,
            price,
            cost,
            stock,
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product's data:")?;
        writeln!(f, "    id: {}", self.id)?;
        writeln!(f, "    Name: {}", self.name)?;
        writeln!(f, "    Price: {:.2}", self.price)?;
        writeln!(f, "    Cost: {:.2}", self.cost)?;
        write!(f, "    Available stock: {}", self.stock)
    }
}

// =============================================================================
// Tests
// =============================================================================
