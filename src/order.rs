use std::{cmp::Ordering, iter::Peekable, str::Chars};

/// Sort keys descending, case-insensitive, with embedded digit runs
/// compared by numeric value ("message10" lands before "message2").
pub fn natural_sort_desc(mut keys: Vec<String>) -> Vec<String> {
    keys.sort_by(|a, b| natural_cmp(b, a));
    keys
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                match take_number(&mut a).cmp(&take_number(&mut b)) {
                    Ordering::Equal => {}
                    decided => return decided,
                }
            }
            (Some(x), Some(y)) => match x.to_lowercase().cmp(y.to_lowercase()) {
                Ordering::Equal => {
                    a.next();
                    b.next();
                }
                decided => return decided,
            },
        }
    }
}

fn take_number(chars: &mut Peekable<Chars>) -> u128 {
    let mut number: u128 = 0;

    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        number = number.saturating_mul(10).saturating_add(digit as u128);
        chars.next();
    }

    number
}

#[cfg(test)]
mod tests {
    use super::natural_sort_desc;

    fn keys(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_numeric_runs() {
        assert_eq!(
            natural_sort_desc(keys(&["message2", "message10", "message1"])),
            keys(&["message10", "message2", "message1"])
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            natural_sort_desc(keys(&["message2", "message10", "Message1"])),
            keys(&["message10", "message2", "Message1"])
        );
    }

    #[test]
    fn test_beats_lexicographic() {
        // Plain string order would put "message9" after "message10".
        assert_eq!(
            natural_sort_desc(keys(&["message9", "message10"])),
            keys(&["message10", "message9"])
        );
    }

    #[test]
    fn test_shared_prefix() {
        assert_eq!(
            natural_sort_desc(keys(&["message", "message1"])),
            keys(&["message1", "message"])
        );
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(
            natural_sort_desc(keys(&["alpha", "Gamma", "beta"])),
            keys(&["Gamma", "beta", "alpha"])
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(natural_sort_desc(Vec::new()), Vec::<String>::new());
    }
}
