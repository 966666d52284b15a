//! Cache key scheme
//!
//! Every backend must derive keys through this one function so that the
//! caller-observable behavior does not depend on the chosen backend.

/// Namespace prefix of all verification code keys
pub const CODE_KEY_PREFIX: &str = "phone_code";

/// Map a (business context, phone number) pair to its cache key
pub fn code_key(biz: &str, phone: &str) -> String {
    format!("{}:{}:{}", CODE_KEY_PREFIX, biz, phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_key_format() {
        assert_eq!(
            code_key("login", "13800000000"),
            "phone_code:login:13800000000"
        );
    }

    #[test]
    fn test_code_key_distinguishes_business_contexts() {
        let phone = "13800000000";
        assert_ne!(code_key("login", phone), code_key("signup", phone));
    }
}
