//! Phone number desensitization for logging
//!
//! Phone numbers must never appear in full in log output; only the last
//! four digits are kept.

/// Mask a phone number for logging (show only the last 4 digits)
pub fn mask_phone(phone: &str) -> String {
    if phone.len() <= 4 {
        "****".to_string()
    } else {
        format!("***{}", &phone[phone.len() - 4..])
    }
}
