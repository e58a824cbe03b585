//! Print an int column next to a double column on stdout.

use std::io;

use ccsvlib::{print_columns, Column};

fn main() {
    let a = [1, 2, 3, 4, 5];
    let b = [6.24, 7.44, 8.92, 9.19, 10.45];

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_columns(&mut out, &[Column::new(&a), Column::new(&b)]).expect("Failed to print columns");
}
