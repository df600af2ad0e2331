//! The persisted contact record format.
//!
//! One record is exactly four newline-terminated lines:
//!
//! ```text
//! +---------+
//! | name    |
//! +---------+
//! | phone   |  (decimal)
//! +---------+
//! | address |
//! +---------+
//! | email   |
//! +---------+
//! ```
//!
//! No header, no footer, no version marker, no escaping. A field
//! containing a literal newline is unrepresentable and would corrupt
//! the file on reload; the book's field validation keeps the menu
//! driver from producing one, but the format itself cannot express
//! it. This is a documented hazard of the format, not something the
//! parser can detect.

use crate::book::Contact;

use super::errors::{StorageError, StorageResult};

/// Serializes contacts in their current order, four lines each.
pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        out.push_str(&contact.name);
        out.push('\n');
        out.push_str(&contact.phone.to_string());
        out.push('\n');
        out.push_str(&contact.address);
        out.push('\n');
        out.push_str(&contact.email);
        out.push('\n');
    }
    out
}

/// Parses text into contacts, consuming lines in groups of four.
///
/// Empty input yields an empty vector. Field shape is not validated
/// here beyond what the format requires: the phone line must parse as
/// a non-negative decimal integer, and the final record must be
/// complete.
///
/// # Errors
///
/// `ROLO_STORE_MALFORMED_RECORD` naming the record index when a phone
/// line does not parse, is negative, or when the input ends mid-record
/// (1-3 trailing lines).
pub fn parse_contacts(text: &str) -> StorageResult<Vec<Contact>> {
    let mut contacts = Vec::new();
    let mut lines = text.lines();

    loop {
        let record_index = contacts.len();

        let name = match lines.next() {
            Some(line) => line,
            None => break,
        };

        let phone_line = next_field(&mut lines, record_index, "phone")?;
        let phone: i64 = phone_line.trim().parse().map_err(|_| {
            StorageError::malformed_record(
                record_index,
                format!("phone line is not a number: '{}'", phone_line),
            )
        })?;
        if phone < 0 {
            return Err(StorageError::malformed_record(
                record_index,
                format!("phone number is negative: {}", phone),
            ));
        }

        let address = next_field(&mut lines, record_index, "address")?;
        let email = next_field(&mut lines, record_index, "email")?;

        contacts.push(Contact {
            name: name.to_string(),
            phone,
            address: address.to_string(),
            email: email.to_string(),
        });
    }

    Ok(contacts)
}

fn next_field<'a>(
    lines: &mut std::str::Lines<'a>,
    record_index: usize,
    field: &str,
) -> StorageResult<&'a str> {
    lines.next().ok_or_else(|| {
        StorageError::malformed_record(
            record_index,
            format!("truncated record: missing {} line", field),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("Bob", 5551234, "1 Main St", "bob@x.com").unwrap(),
            Contact::new("Amy", 5559999, "2 Oak St", "amy@x.com").unwrap(),
        ]
    }

    #[test]
    fn test_serialize_four_lines_per_contact() {
        let text = serialize_contacts(&sample());
        assert_eq!(
            text,
            "Bob\n5551234\n1 Main St\nbob@x.com\nAmy\n5559999\n2 Oak St\namy@x.com\n"
        );
    }

    #[test]
    fn test_serialize_empty_is_empty() {
        assert_eq!(serialize_contacts(&[]), "");
    }

    #[test]
    fn test_roundtrip() {
        let contacts = sample();
        let parsed = parse_contacts(&serialize_contacts(&contacts)).unwrap();
        assert_eq!(parsed, contacts);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_contacts("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let parsed = parse_contacts("Zoe\n1\naddr\nz@x.com\nAmy\n2\naddr\na@x.com\n").unwrap();
        assert_eq!(parsed[0].name, "Zoe");
        assert_eq!(parsed[1].name, "Amy");
    }

    #[test]
    fn test_parse_rejects_non_numeric_phone() {
        let err = parse_contacts("Bob\nnot-a-number\naddr\nb@x.com\n").unwrap_err();
        assert_eq!(err.code().code(), "ROLO_STORE_MALFORMED_RECORD");
        assert!(err.details().unwrap().contains("record_index: 0"));
    }

    #[test]
    fn test_parse_rejects_negative_phone() {
        let err = parse_contacts("Bob\n-5\naddr\nb@x.com\n").unwrap_err();
        assert_eq!(err.code().code(), "ROLO_STORE_MALFORMED_RECORD");
    }

    #[test]
    fn test_parse_rejects_trailing_partial_record() {
        let err = parse_contacts("Bob\n5551234\n1 Main St\nbob@x.com\nAmy\n42\n").unwrap_err();
        assert_eq!(err.code().code(), "ROLO_STORE_MALFORMED_RECORD");
        assert!(err.details().unwrap().contains("record_index: 1"));
        assert!(err.message().contains("address"));
    }

}
