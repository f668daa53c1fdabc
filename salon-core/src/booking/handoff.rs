use serde::{Deserialize, Serialize};

use super::flow::BookingSummary;

/// A composed message plus the deep link that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffRequest {
    pub message: String,
    pub url: String,
}

/// Receives confirmed bookings. Dispatch is fire-and-forget; whether the host
/// manages to open the link is not reported back.
pub trait Handoff {
    fn dispatch(&self, request: &HandoffRequest);
}

pub fn whatsapp_message(summary: &BookingSummary) -> String {
    format!(
        "Merhaba, randevu almak istiyorum.\n\nTarih: {}\nSaat: {}\n\nMüsait saatlerinizi öğrenebilir miyim?",
        summary.formatted_date, summary.time_label
    )
}

pub fn whatsapp_url(phone_number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone_number,
        urlencoding::encode(message)
    )
}

pub fn whatsapp_request(phone_number: &str, summary: &BookingSummary) -> HandoffRequest {
    let message = whatsapp_message(summary);
    let url = whatsapp_url(phone_number, &message);
    HandoffRequest { message, url }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> BookingSummary {
        BookingSummary {
            formatted_date: "14 Şubat 2025".to_string(),
            time_label: "10:00".to_string(),
        }
    }

    #[test]
    fn test_whatsapp_message_template() {
        assert_eq!(
            whatsapp_message(&summary()),
            "Merhaba, randevu almak istiyorum.\n\nTarih: 14 Şubat 2025\nSaat: 10:00\n\nMüsait saatlerinizi öğrenebilir miyim?"
        );
    }

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let url = whatsapp_url("905558903511", "Tarih: 14 Şubat\nSaat: 10:00?");
        assert_eq!(
            url,
            "https://wa.me/905558903511?text=Tarih%3A%2014%20%C5%9Eubat%0ASaat%3A%2010%3A00%3F"
        );
    }

    #[test]
    fn test_whatsapp_request_round_trips_message() {
        let request = whatsapp_request("905558903511", &summary());
        let (_, encoded) = request.url.split_once("?text=").unwrap();

        assert!(request.url.starts_with("https://wa.me/905558903511?text="));
        assert_eq!(urlencoding::decode(encoded).unwrap(), request.message);
    }
}
