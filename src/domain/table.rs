use crate::domain::utils::id::TableId;
use crate::error::{Error, Result};

/// A fixed seating unit of the restaurant.
///
/// The capacity is encoded in the identifier itself (`T<n>(<d>)`), so a `Table`
/// can only be built from a label that parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    id: TableId,

    /// Seats available at this table, always in 1..=9.
    capacity: u32,

    /// Zero-based column index of this table inside every timeslot row.
    position: usize,
}

impl Table {
    pub fn parse(label: &str, position: usize) -> Result<Self> {
        let capacity = parse_capacity(label)?;
        Ok(Table { id: TableId::new(label), capacity, position })
    }

    pub fn get_id(&self) -> &TableId {
        &self.id
    }

    pub fn get_capacity(&self) -> u32 {
        self.capacity
    }

    pub fn get_position(&self) -> usize {
        self.position
    }
}

/// Extracts the seating capacity from a table label of the form `T<n>(<d>)`.
///
/// `<n>` is one or more digits, `<d>` is a single digit in 1..=9.
///
/// # Returns
/// The capacity, or `Error::FormatError` if the label does not follow the format.
pub fn parse_capacity(label: &str) -> Result<u32> {
    let malformed = |reason: &str| Error::FormatError { label: label.to_string(), reason: reason.to_string() };

    let rest = label.strip_prefix('T').ok_or_else(|| malformed("expected leading 'T'"))?;
    let (number, capacity) = rest.split_once('(').ok_or_else(|| malformed("expected '(' after table number"))?;

    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed("table number must be one or more digits"));
    }

    let capacity = capacity.strip_suffix(')').ok_or_else(|| malformed("expected closing ')'"))?;

    let mut chars = capacity.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), None) => match digit.to_digit(10) {
            Some(0) => Err(malformed("capacity must be positive")),
            Some(value) => Ok(value),
            None => Err(malformed("capacity must be a digit")),
        },
        _ => Err(malformed("capacity must be a single digit")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capacity_of_well_formed_labels() {
        assert_eq!(parse_capacity("T1(2)").unwrap(), 2);
        assert_eq!(parse_capacity("T4(6)").unwrap(), 6);
        assert_eq!(parse_capacity("T12(9)").unwrap(), 9);
    }

    #[test]
    fn test_parse_capacity_rejects_malformed_labels() {
        for label in ["", "T", "X1(2)", "T(2)", "Ta(2)", "T1 2", "T1(2", "T1()", "T1(12)", "T1(0)", "T1(x)", "T1(2))"] {
            match parse_capacity(label) {
                Err(Error::FormatError { label: reported, .. }) => assert_eq!(reported, label),
                other => panic!("Expected FormatError for '{}', got {:?}", label, other),
            }
        }
    }

    #[test]
    fn test_table_keeps_position() {
        let table = Table::parse("T3(2)", 2).unwrap();
        assert_eq!(table.get_id().as_str(), "T3(2)");
        assert_eq!(table.get_capacity(), 2);
        assert_eq!(table.get_position(), 2);
    }
}
