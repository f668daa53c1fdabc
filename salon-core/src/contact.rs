//! Contact form rules and the `mailto:` handoff it produces.

use serde::{Deserialize, Serialize};

use crate::error::ContactError;

const FOOTER: &str = "Bu mesaj Fleura Nails web sitesinden gönderilmiştir.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    KaliciOje,
    ManikurPedikur,
    ProtezTirnak,
    TirnakBakimi,
    NailArt,
    Diger,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::KaliciOje,
        Service::ManikurPedikur,
        Service::ProtezTirnak,
        Service::TirnakBakimi,
        Service::NailArt,
        Service::Diger,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Service::KaliciOje => "kalici-oje",
            Service::ManikurPedikur => "manikur-pedikur",
            Service::ProtezTirnak => "protez-tirnak",
            Service::TirnakBakimi => "tirnak-bakimi",
            Service::NailArt => "nail-art",
            Service::Diger => "diger",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Service::KaliciOje => "Kalıcı Oje",
            Service::ManikurPedikur => "Manikür & Pedikür",
            Service::ProtezTirnak => "Protez Tırnak",
            Service::TirnakBakimi => "Tırnak Bakımı & Onarım",
            Service::NailArt => "Nail Art & Özel Tasarım",
            Service::Diger => "Diğer / Bilgi Almak İstiyorum",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub service: Option<Service>,
    pub message: String,
}

fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn validate_name(name: &str) -> Result<(), ContactError> {
    if name.trim().chars().count() < 2 {
        return Err(ContactError::InvalidName);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ContactError> {
    match digits(phone).len() {
        10 | 11 => Ok(()),
        _ => Err(ContactError::InvalidPhone),
    }
}

pub fn validate_service(service: Option<Service>) -> Result<(), ContactError> {
    service.map(|_| ()).ok_or(ContactError::MissingService)
}

/// Checks every field and reports all failures at once, in form order.
pub fn validate(form: &ContactForm) -> Result<(), Vec<ContactError>> {
    let errors: Vec<ContactError> = [
        validate_name(&form.name),
        validate_phone(&form.phone),
        validate_service(form.service),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reformats phone input as the user types: digits only, at most 11 of them,
/// grouped as "0555 123 45 67".
pub fn format_phone_input(raw: &str) -> String {
    let value: String = digits(raw).chars().take(11).collect();
    match value.len() {
        0..=4 => value,
        5..=7 => format!("{} {}", &value[..4], &value[4..]),
        8..=9 => format!("{} {} {}", &value[..4], &value[4..7], &value[7..]),
        _ => format!(
            "{} {} {} {}",
            &value[..4],
            &value[4..7],
            &value[7..9],
            &value[9..]
        ),
    }
}

pub fn mail_subject(form: &ContactForm) -> String {
    format!("Yeni Randevu Talebi - {}", form.name)
}

pub fn mail_body(form: &ContactForm) -> String {
    let service = form
        .service
        .map(|s| s.display_name())
        .unwrap_or_default();

    let mut body = format!(
        "Yeni Randevu Talebi\n\nAd Soyad: {}\nTelefon: {}\nHizmet: {}\n",
        form.name, form.phone, service
    );
    if !form.message.is_empty() {
        body.push_str(&format!("Mesaj: {}\n", form.message));
    }
    body.push_str("\n---\n");
    body.push_str(FOOTER);
    body
}

pub fn mailto_link(recipient: &str, form: &ContactForm) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&mail_subject(form)),
        urlencoding::encode(&mail_body(form))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ayşe Yılmaz".to_string(),
            phone: "0555 123 45 67".to_string(),
            service: Some(Service::NailArt),
            message: String::new(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert_eq!(validate(&filled_form()), Ok(()));
    }

    #[test]
    fn test_validate_reports_every_failure() {
        let form = ContactForm {
            name: " a ".to_string(),
            phone: "555".to_string(),
            service: None,
            message: String::new(),
        };
        assert_eq!(
            validate(&form),
            Err(vec![
                ContactError::InvalidName,
                ContactError::InvalidPhone,
                ContactError::MissingService
            ])
        );
    }

    #[test]
    fn test_validate_phone_counts_digits_only() {
        assert!(validate_phone("(0555) 123-45-67").is_ok());
        assert!(validate_phone("555 123 45 67").is_ok());
        assert!(validate_phone("0555 123 45 678").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_error_fields_and_notices() {
        assert_eq!(ContactError::InvalidPhone.field(), "phone");
        assert_eq!(
            ContactError::MissingService.to_string(),
            "Lütfen bir hizmet seçin"
        );
    }

    #[test]
    fn test_format_phone_input() {
        assert_eq!(format_phone_input(""), "");
        assert_eq!(format_phone_input("055"), "055");
        assert_eq!(format_phone_input("05551"), "0555 1");
        assert_eq!(format_phone_input("0555123"), "0555 123");
        assert_eq!(format_phone_input("055512345"), "0555 123 45");
        assert_eq!(format_phone_input("05551234567"), "0555 123 45 67");
        assert_eq!(format_phone_input("0555-123-45-6789"), "0555 123 45 67");
        assert_eq!(format_phone_input("abc"), "");
    }

    #[test]
    fn test_service_slugs() {
        for service in Service::ALL {
            assert_eq!(Service::from_slug(service.slug()), Some(service));
        }
        assert_eq!(Service::from_slug("unknown"), None);
    }

    #[test]
    fn test_mail_body_includes_optional_message() {
        let mut form = filled_form();
        assert!(!mail_body(&form).contains("Mesaj:"));

        form.message = "Cumartesi uygun mu?".to_string();
        let body = mail_body(&form);
        assert!(body.contains("Hizmet: Nail Art & Özel Tasarım\nMesaj: Cumartesi uygun mu?\n"));
        assert!(body.ends_with("\n---\nBu mesaj Fleura Nails web sitesinden gönderilmiştir."));
    }

    #[test]
    fn test_mailto_link() {
        let link = mailto_link("salon@example.com", &filled_form());
        let (head, body) = link.split_once("&body=").unwrap();

        assert_eq!(
            head,
            "mailto:salon@example.com?subject=Yeni%20Randevu%20Talebi%20-%20Ay%C5%9Fe%20Y%C4%B1lmaz"
        );
        assert_eq!(urlencoding::decode(body).unwrap(), mail_body(&filled_form()));
    }
}
