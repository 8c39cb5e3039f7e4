use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, Trim};

use crate::records::{Product, Student};
use crate::sorted_array::SortedArray;
use crate::sorted_list::SortedLinkedList;

/// Outcome counts for one file load.
///
/// A bad row never aborts the load: it is counted and skipped. `rejected`
/// counts well-formed records the target container refused (full array,
/// duplicate key).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub rejected: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} loaded, {} skipped, {} rejected",
            self.loaded, self.skipped, self.rejected
        )
    }
}

// Headerless input, tolerant of padding around fields and of short rows;
// row problems surface per record instead of killing the reader.
fn open_reader(path: &Path) -> Result<Reader<File>, csv::Error> {
    ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
}

/// Loads `id,name,gpa` rows into an id-ordered student array.
pub fn load_students<P, C>(
    db: &mut SortedArray<Student, C>,
    path: P,
) -> Result<LoadReport, Box<dyn Error>>
where
    P: AsRef<Path>,
    C: Fn(&Student, &Student) -> Ordering,
{
    let mut reader = open_reader(path.as_ref())?;
    let mut report = LoadReport::default();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(_) => {
                report.skipped += 1;
                continue;
            }
        };
        match Student::from_csv_row(&row) {
            Ok(student) => match db.insert_sorted(student) {
                Ok(()) => report.loaded += 1,
                Err(_) => report.rejected += 1,
            },
            Err(_) => report.skipped += 1,
        }
    }

    Ok(report)
}

/// Loads `id,name,price,cost,stock` rows into an id-ordered product list.
pub fn load_products<P, C>(
    db: &mut SortedLinkedList<Product, C>,
    path: P,
) -> Result<LoadReport, Box<dyn Error>>
where
    P: AsRef<Path>,
    C: Fn(&Product, &Product) -> Ordering,
{
    let mut reader = open_reader(path.as_ref())?;
    let mut report = LoadReport::default();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(_) => {
                report.skipped += 1;
                continue;
            }
        };
        match Product::from_csv_row(&row) {
            Ok(product) => {
                db.insert_sorted(product);
                report.loaded += 1;
            }
            Err(_) => report.skipped += 1,
        }
    }

    Ok(report)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn student_array(capacity: usize) -> SortedArray<Student, fn(&Student, &Student) -> Ordering> {
        SortedArray::with_capacity(capacity, Student::compare_by_id)
    }

    fn product_list() -> SortedLinkedList<Product, fn(&Product, &Product) -> Ordering> {
        SortedLinkedList::new(Product::compare_by_id)
    }

    // ----- student loading tests -----

    #[test]
    fn test_load_students_sorted() {
        let file = create_test_csv("102,Bob,7.1\n100,Alice,9.5\n101,Juan,8.3\n");
        let mut db = student_array(10);

        let report = load_students(&mut db, file.path()).unwrap();

        assert_eq!(report, LoadReport { loaded: 3, skipped: 0, rejected: 0 });
        let ids: Vec<u64> = db.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![100, 101, 102]);
    }

    #[test]
    fn test_load_students_skips_malformed_rows() {
        let file = create_test_csv(
            "100,Alice,9.5\n\
             oops,Bob,7.1\n\
             101,Carol,not-a-gpa\n\
             102,Dave\n\
             103,Eve,8.8\n",
        );
        let mut db = student_array(10);

        let report = load_students(&mut db, file.path()).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 3);
        let ids: Vec<u64> = db.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![100, 103]);
    }

    #[test]
    fn test_load_students_rejects_duplicates() {
        let file = create_test_csv("100,Alice,9.5\n100,Alias,1.0\n");
        let mut db = student_array(10);

        let report = load_students(&mut db, file.path()).unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(db.find_binary(&Student::template(100)).unwrap().name, "Alice");
    }

    #[test]
    fn test_load_students_rejects_overflow() {
        let file = create_test_csv("3,C,7.0\n1,A,9.0\n2,B,8.0\n");
        let mut db = student_array(2);

        let report = load_students(&mut db, file.path()).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_load_students_tolerates_padding() {
        let file = create_test_csv(" 1 , Alice , 9.5 \n");
        let mut db = student_array(4);

        load_students(&mut db, file.path()).unwrap();

        let student = db.find_binary(&Student::template(1)).unwrap();
        assert_eq!(student.name, "Alice");
        assert_eq!(student.gpa, 9.5);
    }

    #[test]
    fn test_load_students_empty_file() {
        let file = create_test_csv("");
        let mut db = student_array(4);

        let report = load_students(&mut db, file.path()).unwrap();

        assert_eq!(report, LoadReport::default());
        assert!(db.is_empty());
    }

    #[test]
    fn test_load_students_missing_file_is_an_error() {
        let mut db = student_array(4);
        assert!(load_students(&mut db, "no/such/file.csv").is_err());
        assert!(db.is_empty());
    }

    // ----- product loading tests -----

    #[test]
    fn test_load_products_sorted() {
        let file = create_test_csv(
            "10,Monitor,199.99,120.0,4\n\
             5,Keyboard,49.99,20.5,12\n\
             15,Mouse,25.0,9.0,30\n",
        );
        let mut db = product_list();

        let report = load_products(&mut db, file.path()).unwrap();

        assert_eq!(report.loaded, 3);
        let ids: Vec<u64> = db.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 10, 15]);
    }

    #[test]
    fn test_load_products_allows_duplicate_ids() {
        let file = create_test_csv("5,Keyboard,49.99,20.5,12\n5,Keyboard v2,59.99,25.0,6\n");
        let mut db = product_list();

        let report = load_products(&mut db, file.path()).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(report.rejected, 0);
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_load_products_skips_malformed_rows() {
        let file = create_test_csv(
            "5,Keyboard,49.99,20.5,12\n\
             6,Webcam,79.99,not-a-cost,3\n\
             7,Headset,89.99,40.0,8\n",
        );
        let mut db = product_list();

        let report = load_products(&mut db, file.path()).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 1);
        let ids: Vec<u64> = db.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 7]);
    }

    // ----- report tests -----

    #[test]
    fn test_report_display() {
        let report = LoadReport { loaded: 3, skipped: 1, rejected: 2 };
        assert_eq!(report.to_string(), "3 loaded, 1 skipped, 2 rejected");
    }
}
