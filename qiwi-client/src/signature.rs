//! HMAC-SHA256 signatures of payment notifications.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use qiwi_types::{Invoice, Notification};

type HmacSha256 = Hmac<Sha256>;

/// Fields covered by the signature, in order, joined by `|`:
/// currency, value, bill id, site id, status.
pub fn signature_payload(invoice: &Invoice) -> String {
    [
        invoice.amount.currency.as_str(),
        &invoice.amount.value.to_string(),
        invoice.bill_id.as_str(),
        invoice.site_id.as_str(),
        invoice.status.value.as_ref(),
    ]
    .join("|")
}

/// Computes the lowercase hex HMAC-SHA256 of an invoice.
pub fn sign_invoice(invoice: &Invoice, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(signature_payload(invoice).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a provider-supplied signature using constant-time comparison.
pub fn verify_invoice_signature(invoice: &Invoice, signature: &str, secret: &str) -> bool {
    let expected = sign_invoice(invoice, secret);
    expected
        .as_bytes()
        .ct_eq(signature.trim().to_ascii_lowercase().as_bytes())
        .into()
}

/// Verifies the signature sent alongside a notification.
pub fn verify_notification(notification: &Notification, signature: &str, secret: &str) -> bool {
    verify_invoice_signature(&notification.bill, signature, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invoice(status: &str) -> Invoice {
        Invoice::prepare(&json!({
            "siteId": "site1",
            "billId": "abc",
            "amount": {"currency": "RUB", "value": "100.00"},
            "status": {"value": status, "changedDateTime": "2019-08-28T16:26:36+03:00"},
            "creationDateTime": "2019-08-28T16:26:36+03:00",
            "expirationDateTime": "2019-08-29T16:26:36+03:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_signature_payload_order() {
        assert_eq!(signature_payload(&invoice("PAID")), "RUB|100.00|abc|site1|PAID");
    }

    #[test]
    fn test_signature_vector() {
        let signature = sign_invoice(&invoice("PAID"), "key");
        assert_eq!(
            signature,
            "183079b9d6ff5431641f24f5d32ac89e42ecfddb002d7bc34d673e82a759f4d7"
        );
        assert_eq!(signature.len(), 64);
    }

    #[test]
    fn test_signature_depends_on_status() {
        assert_eq!(
            sign_invoice(&invoice("WAITING"), "key"),
            "751a2fd82349f5c7fc393f72f90ac8217e91678cbe27d9c4a2a3d6851d074e50"
        );
    }

    #[test]
    fn test_verify_signature() {
        let paid = invoice("PAID");
        let signature = sign_invoice(&paid, "key");

        assert!(verify_invoice_signature(&paid, &signature, "key"));
        assert!(verify_invoice_signature(
            &paid,
            &signature.to_uppercase(),
            "key"
        ));
        assert!(!verify_invoice_signature(&paid, &signature, "wrong_key"));
        assert!(!verify_invoice_signature(&invoice("WAITING"), &signature, "key"));
        assert!(!verify_invoice_signature(&paid, "", "key"));
    }

    #[test]
    fn test_verify_notification() {
        let notification = Notification {
            bill: invoice("PAID"),
            version: "1".to_string(),
        };
        assert!(verify_notification(
            &notification,
            "183079b9d6ff5431641f24f5d32ac89e42ecfddb002d7bc34d673e82a759f4d7",
            "key"
        ));
    }
}
