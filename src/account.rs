// 💳 Bank Account - Value object with normalization and validation
//
// Holds the identifiers a payment processor needs (holder name, account
// number, routing number, account type) and decides whether they are
// well-formed enough to submit. Lives in memory for the duration of a
// validation check; nothing here persists or talks to a gateway.

use serde::{Deserialize, Serialize};

use crate::errors::{Errors, Field};
use crate::routing;

// ============================================================================
// ACCOUNT TYPE SETS
// ============================================================================

/// Account types the processor accepts.
///
/// "bogus" is the sandbox type: a bogus account only needs a holder name and
/// an account number to validate.
pub const ACCOUNT_TYPES: [&str; 4] = ["checking", "bogus", "savings", "business_checking"];

/// Standard entry classes accepted for echeck payments.
pub const ECHECK_TYPES: [&str; 2] = ["ccd", "ppd"];

/// Account type applied when none is given.
pub const DEFAULT_ACCOUNT_TYPE: &str = "checking";

// ============================================================================
// FIELD HELPERS
// ============================================================================

/// True when a field is unset for validation purposes: empty or
/// whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Keep decimal digits only, preserving order.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

// ============================================================================
// BANK ACCOUNT
// ============================================================================

/// Bank-account value object.
///
/// All fields are optional at construction and default to empty strings;
/// nothing is checked until `validate()` runs. Deserialization accepts
/// camelCase aliases and ignores unknown keys, so a record can be built
/// straight from a JSON configuration map or a CSV row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    #[serde(alias = "firstName")]
    pub first_name: String,

    #[serde(alias = "lastName")]
    pub last_name: String,

    #[serde(alias = "accountNumber")]
    pub account_number: String,

    #[serde(alias = "routingNumber")]
    pub routing_number: String,

    /// "checking", "savings", "business_checking", or the sandbox "bogus".
    #[serde(alias = "type", alias = "accountType")]
    pub account_type: String,

    /// Standard entry class for echeck payments ("ccd" or "ppd").
    #[serde(alias = "echeckType")]
    pub echeck_type: String,

    /// Free-form, never validated.
    #[serde(alias = "bankName")]
    pub bank_name: String,

    #[serde(skip)]
    errors: Errors,
}

impl BankAccount {
    /// Create an empty account record.
    pub fn new() -> Self {
        BankAccount::default()
    }

    // ========================================================================
    // BUILDERS
    // ========================================================================

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = account_number.into();
        self
    }

    pub fn with_routing_number(mut self, routing_number: impl Into<String>) -> Self {
        self.routing_number = routing_number.into();
        self
    }

    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = account_type.into();
        self
    }

    pub fn with_echeck_type(mut self, echeck_type: impl Into<String>) -> Self {
        self.echeck_type = echeck_type.into();
        self
    }

    pub fn with_bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = bank_name.into();
        self
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    /// Normalize raw input before the rule checks run.
    ///
    /// Strips non-digits from the account and routing numbers, lower-cases
    /// the account type, and defaults a blank type to "checking". Idempotent.
    fn normalize(&mut self) {
        self.account_number = digits_only(&self.account_number);
        self.routing_number = digits_only(&self.routing_number);
        self.account_type = self.account_type.to_ascii_lowercase();

        if is_blank(&self.account_type) {
            self.account_type = DEFAULT_ACCOUNT_TYPE.to_string();
        }
    }

    /// Normalize the fields, then rebuild the error collection from the rule
    /// checks. Never panics, whatever the field contents.
    pub fn validate(&mut self) {
        self.errors.clear();
        self.normalize();

        if is_blank(&self.first_name) {
            self.errors.add(Field::FirstName, "cannot be empty");
        }
        if is_blank(&self.last_name) {
            self.errors.add(Field::LastName, "cannot be empty");
        }
        if is_blank(&self.account_number) {
            self.errors.add(Field::AccountNumber, "cannot be empty");
        }

        // Bogus accounts skip the remaining checks: name + account number is
        // all the sandbox requires.
        if self.account_type == "bogus" {
            return;
        }

        if !ACCOUNT_TYPES.contains(&self.account_type.as_str()) {
            self.errors.add(Field::Type, "is invalid");
        }

        // The routing checks are independent; an empty routing number fires
        // all three.
        if is_blank(&self.routing_number) {
            self.errors.add(Field::RoutingNumber, "cannot be empty");
        }
        if self.routing_number.chars().count() != 9 {
            self.errors.add(Field::RoutingNumber, "should be 9 digits");
        }
        if !routing::checksum_valid(&self.routing_number) {
            self.errors.add(Field::RoutingNumber, "is invalid");
        }

        // Fires even when echeck_type was never set: blank is not in the
        // allowed set.
        if !ECHECK_TYPES.contains(&self.echeck_type.as_str()) {
            self.errors.add(Field::EcheckType, "is invalid");
        }
    }

    /// Run `validate()` and report whether the record came out clean.
    pub fn is_valid(&mut self) -> bool {
        self.validate();
        self.errors.is_empty()
    }

    /// Errors recorded by the last `validate()` call.
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    // ========================================================================
    // DERIVED VIEWS
    // ========================================================================

    pub fn has_first_name(&self) -> bool {
        !is_blank(&self.first_name)
    }

    pub fn has_last_name(&self) -> bool {
        !is_blank(&self.last_name)
    }

    pub fn has_account_number(&self) -> bool {
        !is_blank(&self.account_number)
    }

    pub fn has_routing_number(&self) -> bool {
        !is_blank(&self.routing_number)
    }

    pub fn has_name(&self) -> bool {
        self.has_first_name() && self.has_last_name()
    }

    /// Holder name, single-space join. Two empty parts yield a lone space.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Final 4 characters of the account number; numbers of 4 characters or
    /// fewer come back unchanged.
    pub fn last_digits(&self) -> String {
        let chars: Vec<char> = self.account_number.chars().collect();

        if chars.len() <= 4 {
            self.account_number.clone()
        } else {
            chars[chars.len() - 4..].iter().collect()
        }
    }

    /// Account number with everything but the last 4 characters masked.
    ///
    /// Example: "1111222233331234" → "XXXXXXXXXXXX1234". Numbers of 4
    /// characters or fewer are shown unmasked, and an empty account number
    /// yields an empty string.
    pub fn display_number(&self) -> String {
        let last_digits = self.last_digits();
        let masked = self.account_number.chars().count() - last_digits.chars().count();

        format!("{}{}", "X".repeat(masked), last_digits)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_account() -> BankAccount {
        BankAccount::new()
            .with_first_name("Jim")
            .with_last_name("Smith")
            .with_account_number("15378535")
            .with_routing_number("244183602")
            .with_account_type("checking")
            .with_echeck_type("ppd")
            .with_bank_name("Bank of Elbonia")
    }

    #[test]
    fn test_valid_account() {
        let mut account = valid_account();

        assert!(account.is_valid());
        assert!(account.errors().is_empty());
    }

    #[test]
    fn test_all_allowed_account_types() {
        for account_type in ["checking", "savings", "business_checking"] {
            let mut account = valid_account().with_account_type(account_type);
            assert!(account.is_valid(), "{} should be allowed", account_type);
        }
    }

    #[test]
    fn test_account_type_is_lower_cased() {
        let mut account = valid_account().with_account_type("CHECKING");

        assert!(account.is_valid());
        assert_eq!(account.account_type, "checking");
    }

    #[test]
    fn test_blank_account_type_defaults_to_checking() {
        let mut account = valid_account().with_account_type("");

        assert!(account.is_valid());
        assert_eq!(account.account_type, "checking");
    }

    #[test]
    fn test_unknown_account_type_is_invalid() {
        let mut account = valid_account().with_account_type("premium");

        assert!(!account.is_valid());
        assert_eq!(account.errors().on(Field::Type), &["is invalid".to_string()]);
    }

    #[test]
    fn test_default_account_is_invalid_but_does_not_panic() {
        let mut account = BankAccount::new();
        account.validate();

        assert!(!account.errors().is_empty());
        assert_eq!(account.errors().on(Field::FirstName), &["cannot be empty".to_string()]);
        assert_eq!(account.errors().on(Field::LastName), &["cannot be empty".to_string()]);
        assert_eq!(
            account.errors().on(Field::AccountNumber),
            &["cannot be empty".to_string()]
        );

        // Empty routing number fires all three routing checks
        assert_eq!(account.errors().on(Field::RoutingNumber).len(), 3);

        // Unset echeck type always fails outside the bogus branch
        assert_eq!(account.errors().on(Field::EcheckType), &["is invalid".to_string()]);

        // Blank type defaulted to checking, so no type error
        assert!(account.errors().on(Field::Type).is_empty());
    }

    #[test]
    fn test_blank_name_fields() {
        let mut account = valid_account().with_first_name("   ").with_last_name("");
        account.validate();

        assert_eq!(account.errors().on("first_name").len(), 1);
        assert_eq!(account.errors().on("last_name").len(), 1);
        assert!(account.errors().on("account_number").is_empty());
    }

    #[test]
    fn test_bogus_type_skips_routing_and_echeck_checks() {
        let mut account = BankAccount::new()
            .with_first_name("Jim")
            .with_last_name("Smith")
            .with_account_number("15378535")
            .with_account_type("bogus");

        assert!(account.is_valid());

        // Same instance, back to a real type: the skip is re-evaluated per call
        account.account_type = "checking".to_string();
        assert!(!account.is_valid());
        assert!(!account.errors().on(Field::RoutingNumber).is_empty());
    }

    #[test]
    fn test_bogus_type_still_requires_name_and_number() {
        let mut account = BankAccount::new().with_account_type("bogus");
        account.validate();

        assert!(!account.errors().is_empty());
        assert_eq!(account.errors().on(Field::FirstName).len(), 1);
        assert_eq!(account.errors().on(Field::AccountNumber).len(), 1);
        // Bogus branch stops before the echeck check
        assert!(account.errors().on(Field::EcheckType).is_empty());
    }

    #[test]
    fn test_bad_routing_numbers_do_not_touch_type() {
        for routing_number in ["1234567ff", "1", "1234567890111", "abcdefghi"] {
            let mut account = valid_account().with_routing_number(routing_number);

            assert!(!account.is_valid(), "{} should fail", routing_number);
            assert!(
                !account.errors().on(Field::RoutingNumber).is_empty(),
                "{} should record a routing error",
                routing_number
            );
            assert!(
                account.errors().on(Field::Type).is_empty(),
                "{} should not record a type error",
                routing_number
            );
        }
    }

    #[test]
    fn test_echeck_type_must_be_ccd_or_ppd() {
        for echeck_type in ["ccd", "ppd"] {
            let mut account = valid_account().with_echeck_type(echeck_type);
            assert!(account.is_valid(), "{} should be allowed", echeck_type);
        }

        for echeck_type in ["", "web", "CCD"] {
            let mut account = valid_account().with_echeck_type(echeck_type);
            assert!(!account.is_valid(), "{:?} should be rejected", echeck_type);
            assert_eq!(
                account.errors().on(Field::EcheckType),
                &["is invalid".to_string()]
            );
        }
    }

    #[test]
    fn test_account_number_stripping() {
        let mut account =
            valid_account().with_account_number("4242-4242      %%%%4242......4242");
        account.validate();

        assert_eq!(account.account_number, "4242424242424242");
        assert!(account.errors().on(Field::AccountNumber).is_empty());
    }

    #[test]
    fn test_routing_number_stripping_validates() {
        let mut account = valid_account().with_routing_number("11100 %% WOO BLAH @#$@ 0025");

        assert!(account.is_valid());
        assert_eq!(account.routing_number, "111000025");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut account = valid_account()
            .with_account_number("4242-4242      %%%%4242......4242")
            .with_account_type("SAVINGS");

        account.validate();
        let first_pass = account.clone();

        account.validate();
        assert_eq!(account, first_pass);
    }

    #[test]
    fn test_name_views() {
        let account = BankAccount::new().with_first_name("Jim").with_last_name("Smith");

        assert!(account.has_first_name());
        assert!(account.has_last_name());
        assert!(account.has_name());
        assert_eq!(account.name(), "Jim Smith");

        let empty = BankAccount::new();
        assert!(!empty.has_name());
        assert_eq!(empty.name(), " ");
    }

    #[test]
    fn test_presence_predicates() {
        let account = BankAccount::new()
            .with_account_number("15378535")
            .with_routing_number("244183602");

        assert!(account.has_account_number());
        assert!(account.has_routing_number());
        assert!(!account.has_first_name());

        let blank = BankAccount::new().with_account_number("   ");
        assert!(!blank.has_account_number());
    }

    #[test]
    fn test_last_digits() {
        let cases = [("4779139500118580", "8580"), ("1", "1"), ("", "")];

        for (account_number, expected) in cases {
            let account = BankAccount::new().with_account_number(account_number);
            assert_eq!(account.last_digits(), expected);
        }
    }

    #[test]
    fn test_display_number() {
        let cases = [
            ("1111222233331234", "XXXXXXXXXXXX1234"),
            ("12345", "X2345"),
            ("1234", "1234"),
            ("123", "123"),
            ("", ""),
        ];

        for (account_number, expected) in cases {
            let account = BankAccount::new().with_account_number(account_number);
            assert_eq!(account.display_number(), expected, "for {:?}", account_number);
        }
    }

    #[test]
    fn test_views_do_not_normalize() {
        let account = BankAccount::new().with_account_number("4242-4242");

        // Derived views read the field as-is; only validate() strips it
        assert_eq!(account.last_digits(), "4242");
        assert_eq!(account.display_number(), "XXXXX4242");
        assert_eq!(account.account_number, "4242-4242");
    }

    #[test]
    fn test_deserialize_from_camel_case_config() {
        let json = r#"{
            "firstName": "Jim",
            "lastName": "Smith",
            "accountNumber": "15378535",
            "routingNumber": "244183602",
            "type": "savings",
            "echeckType": "ccd",
            "bankName": "Bank of Elbonia",
            "nickname": "ignored"
        }"#;

        let mut account: BankAccount = serde_json::from_str(json).unwrap();

        assert_eq!(account.account_type, "savings");
        assert_eq!(account.bank_name, "Bank of Elbonia");
        assert!(account.is_valid());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let account: BankAccount = serde_json::from_str(r#"{"firstName": "Jim"}"#).unwrap();

        assert_eq!(account.first_name, "Jim");
        assert_eq!(account.last_name, "");
        assert_eq!(account.routing_number, "");
    }
}
