use std::cmp::Ordering;
use std::error::Error;

use colored::Colorize;

use collection_tradeoffs::loader::{load_products, load_students, LoadReport};
use collection_tradeoffs::records::{Product, Student};
use collection_tradeoffs::sorted_array::{InsertError, SortedArray};
use collection_tradeoffs::sorted_list::SortedLinkedList;

const STUDENTS_FILE: &str = "data/students.csv";
const PRODUCTS_FILE: &str = "data/products.csv";
const STUDENT_CAPACITY: usize = 100;

fn main() {
    println!("{}", "Initializing trade-offs test...".bold());
    println!();

    let mut student_db = SortedArray::with_capacity(STUDENT_CAPACITY, Student::compare_by_id);
    let mut product_db = SortedLinkedList::new(Product::compare_by_id);

    report_load(STUDENTS_FILE, load_students(&mut student_db, STUDENTS_FILE));
    report_load(PRODUCTS_FILE, load_products(&mut product_db, PRODUCTS_FILE));

    println!();
    println!("{}", "--- INITIAL LOADING COMPLETE ---".bold());
    print_students(&student_db);
    print_products(&product_db);

    println!();
    println!("{}", "--- STRESS TEST ---".bold());

    println!("Inserting 'Zoe' (id 50, lands at the front)...");
    report_insert(student_db.insert_sorted(Student::new(50, "Zoe (First)", 9.9)));

    println!("Inserting 'Alex' (id 500, lands at the back)...");
    report_insert(student_db.insert_sorted(Student::new(500, "Alex (Final)", 6.0)));

    println!("Inserting 'Pedro' (id 103, lands in the middle)...");
    report_insert(student_db.insert_sorted(Student::new(103, "Pedro (Middle)", 7.5)));

    println!("Removing student id 101 (from the middle)...");
    match student_db.remove(&Student::template(101)) {
        Some(student) => println!("  -> {} {}", "removed".green(), student.name),
        None => println!("  -> {}", "not found".yellow()),
    }

    println!("Removing product id 5 (the list head)...");
    match product_db.remove(&Product::template(5)) {
        Some(product) => println!("  -> {} {}", "removed".green(), product.name),
        None => println!("  -> {}", "not found".yellow()),
    }

    println!();
    println!("{}", "--- STRESS TEST COMPLETE, FINAL STATE ---".bold());
    print_students(&student_db);
    print_products(&product_db);
}

fn report_load(path: &str, result: Result<LoadReport, Box<dyn Error>>) {
    match result {
        Ok(report) => println!("Loaded {}: {}", path.cyan(), report),
        Err(err) => eprintln!("{} couldn't load {}: {}", "Error:".red().bold(), path, err),
    }
}

fn report_insert(result: Result<(), InsertError<Student>>) {
    match result {
        Ok(()) => println!("  -> {}", "inserted".green()),
        Err(err) => println!("  -> {} {}", "rejected:".red(), err),
    }
}

fn print_students<C>(db: &SortedArray<Student, C>)
where
    C: Fn(&Student, &Student) -> Ordering,
{
    println!();
    println!(
        "{}",
        format!("-----Array----- (Cap: {}, Count: {})", db.capacity(), db.len()).cyan()
    );
    if db.is_empty() {
        println!("Empty array.");
    }
    db.for_each(|student| println!("{student}"));
    println!("{}", "-----End of Array-----".cyan());
}

fn print_products<C>(db: &SortedLinkedList<Product, C>)
where
    C: Fn(&Product, &Product) -> Ordering,
{
    println!();
    println!(
        "{}",
        format!("-----List----- (Count: {})", db.len()).cyan()
    );
    if db.is_empty() {
        println!("Empty list.");
    }
    db.for_each(|product| println!("{product}"));
    println!("{}", "-----End of List-----".cyan());
}
