//! Cell references for Excel worksheets.
//!
//! A reference such as `"B3"` is column letters followed by a 1-based row
//! number. Both functions here return zero-based positions and reject
//! anything beyond the largest sheet Excel allows (`XFD1048576`).

/// Number of columns in the largest Excel sheet (`A` through `XFD`).
pub const MAX_COLUMNS: u32 = 16_384;
/// Number of rows in the largest Excel sheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Convert column letters to a zero-based column index (A=0, Z=25, AA=26).
///
/// Letters are case-insensitive.
///
/// # Examples
///
/// ```
/// use longan::ooxml::xlsx::column_index;
///
/// assert_eq!(column_index("A"), Some(0));
/// assert_eq!(column_index("aa"), Some(26));
/// assert_eq!(column_index("1"), None);
/// ```
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }

    let mut index = 0u32;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        let digit = u32::from(b.to_ascii_uppercase() - b'A') + 1;
        index = index * 26 + digit;
        if index > MAX_COLUMNS {
            return None;
        }
    }
    Some(index - 1)
}

/// Convert column index to Excel column letters (0 -> "A", 26 -> "AA").
pub fn column_letters(index: u32) -> String {
    let mut letters = Vec::new();
    let mut col = index + 1;

    while col > 0 {
        col -= 1;
        letters.push((col % 26) as u8 + b'A');
        col /= 26;
    }

    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Parse a cell reference into a zero-based `(column, row)` pair.
///
/// # Examples
///
/// ```
/// use longan::ooxml::xlsx::parse_cell_reference;
///
/// assert_eq!(parse_cell_reference("B3"), Some((1, 2)));
/// assert_eq!(parse_cell_reference("B0"), None);
/// ```
pub fn parse_cell_reference(reference: &str) -> Option<(u32, u32)> {
    let split = reference
        .bytes()
        .position(|b| !b.is_ascii_alphabetic())
        .unwrap_or(reference.len());
    let (letters, digits) = reference.split_at(split);

    let column = column_index(letters)?;
    let row = parse_row_number(digits)?;
    Some((column, row))
}

/// Parse a 1-based row number into a zero-based row index.
pub(crate) fn parse_row_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row = atoi_simd::parse::<u32, false, false>(digits.as_bytes()).ok()?;
    (1..=MAX_ROWS).contains(&row).then(|| row - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A", Some(0))]
    #[case("Z", Some(25))]
    #[case("AA", Some(26))]
    #[case("AZ", Some(51))]
    #[case("ba", Some(52))]
    #[case("XFD", Some(16_383))]
    #[case("XFE", None)]
    #[case("", None)]
    #[case("A1", None)]
    fn test_column_index(#[case] letters: &str, #[case] expected: Option<u32>) {
        assert_eq!(column_index(letters), expected);
    }

    #[rstest]
    #[case("A1", Some((0, 0)))]
    #[case("C2", Some((2, 1)))]
    #[case("b3", Some((1, 2)))]
    #[case("AA10", Some((26, 9)))]
    #[case("XFD1048576", Some((16_383, 1_048_575)))]
    #[case("A1048577", None)]
    #[case("A0", None)]
    #[case("A", None)]
    #[case("12", None)]
    #[case("$A$1", None)]
    #[case("A1B", None)]
    #[case("A-1", None)]
    fn test_parse_cell_reference(#[case] reference: &str, #[case] expected: Option<(u32, u32)>) {
        assert_eq!(parse_cell_reference(reference), expected);
    }

    #[test]
    fn test_column_letters_inverts_index() {
        for index in [0, 25, 26, 51, 52, 701, 702, 16_383] {
            assert_eq!(column_index(&column_letters(index)), Some(index));
        }
        assert_eq!(column_letters(27), "AB");
    }
}
