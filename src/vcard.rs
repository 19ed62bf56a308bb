//! vCard 3.0 payloads built from contact form fields.

use serde::{Deserialize, Serialize};

/// Contact fields collected by the generator form. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Telephone number, emitted as `TEL`
    pub phone: String,
    /// Emitted as `EMAIL`
    pub email: String,
    /// Organization, emitted as `ORG`
    pub company: String,
    /// Emitted as `TITLE`
    pub job_title: String,
    /// Street address, first `ADR` component used
    pub street: String,
    /// Locality
    pub city: String,
    /// Region or state
    pub state: String,
    /// Postal code
    pub zip: String,
    /// Country name
    pub country: String,
    /// Emitted as `URL`
    pub website: String,
}

impl Contact {
    /// "First Last", skipping empty parts
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn has_address(&self) -> bool {
        [&self.street, &self.city, &self.state, &self.zip, &self.country]
            .iter()
            .any(|s| !s.trim().is_empty())
    }

    /// Serialize as a vCard 3.0 document, lines joined by `\n`
    pub fn to_vcard(&self) -> String {
        let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];
        lines.push(format!("FN:{}", escape(&self.full_name())));
        if !self.first_name.trim().is_empty() {
            lines.push(format!(
                "N:{};{};;;",
                escape(self.last_name.trim()),
                escape(self.first_name.trim())
            ));
        }
        push_field(&mut lines, "TEL", &self.phone);
        push_field(&mut lines, "EMAIL", &self.email);
        push_field(&mut lines, "ORG", &self.company);
        push_field(&mut lines, "TITLE", &self.job_title);
        if self.has_address() {
            let parts = [&self.street, &self.city, &self.state, &self.zip, &self.country]
                .map(|s| escape(s.trim()));
            lines.push(format!("ADR:;;{}", parts.join(";")));
        }
        push_field(&mut lines, "URL", &self.website);
        lines.push("END:VCARD".to_string());
        lines.join("\n")
    }
}

fn push_field(lines: &mut Vec<String>, name: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        lines.push(format!("{name}:{}", escape(value)));
    }
}

/// Escape a text value (RFC 2426 section 4)
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_contact() {
        let contact = Contact {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Contact::default()
        };
        assert_eq!(
            contact.to_vcard(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nN:Lovelace;Ada;;;\nEND:VCARD"
        );
    }

    #[test]
    fn test_full_contact_field_order() {
        let contact = Contact {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            phone: "+1 555 0100".into(),
            email: "grace@example.com".into(),
            company: "Navy".into(),
            job_title: "Rear Admiral".into(),
            city: "Arlington".into(),
            country: "USA".into(),
            website: "https://example.com".into(),
            ..Contact::default()
        };
        let expected = "BEGIN:VCARD\nVERSION:3.0\nFN:Grace Hopper\nN:Hopper;Grace;;;\n\
            TEL:+1 555 0100\nEMAIL:grace@example.com\nORG:Navy\nTITLE:Rear Admiral\n\
            ADR:;;;Arlington;;;USA\nURL:https://example.com\nEND:VCARD";
        assert_eq!(contact.to_vcard(), expected);
    }

    #[test]
    fn test_no_first_name_skips_n() {
        let contact = Contact {
            last_name: "Turing".into(),
            ..Contact::default()
        };
        assert_eq!(
            contact.to_vcard(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Turing\nEND:VCARD"
        );
    }

    #[test]
    fn test_escaping() {
        let contact = Contact {
            first_name: "Ada".into(),
            company: "Analytical Engines, Ltd; London".into(),
            ..Contact::default()
        };
        assert!(
            contact
                .to_vcard()
                .contains("ORG:Analytical Engines\\, Ltd\\; London")
        );
    }
}
