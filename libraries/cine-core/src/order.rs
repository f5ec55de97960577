//! Natural ordering for file names
//!
//! Finder-style comparison: case-insensitive, with runs of ASCII digits
//! compared by numeric value so `Track 2` sorts before `Track 10`. Names that
//! compare equal this way fall back to a plain byte comparison, which keeps the
//! order total and deterministic.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

/// Compare two names in natural order
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ord = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let l = take_digits(&mut left);
                let r = take_digits(&mut right);
                compare_numeric(&l, &r)
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                fold_case(x).cmp(&fold_case(y))
            }
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Sort paths by their file name in natural order
pub fn sort_natural<P: AsRef<Path>>(paths: &mut [P]) {
    paths.sort_by(|a, b| natural_cmp(&file_name(a.as_ref()), &file_name(b.as_ref())));
}

fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

/// Compare two digit runs by value without parsing (runs may exceed u64)
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
