//! The base string rule.

use crate::foundation::ValidationError;

crate::validator! {
    /// Accepts every string, including the empty string.
    ///
    /// This is the rule refinements are attached to. It accepts exactly what
    /// the filename matcher's pass-through validator accepts.
    ///
    /// # Examples
    ///
    /// ```
    /// use filegate_validator::foundation::Validate;
    /// use filegate_validator::validators::string;
    ///
    /// assert!(string().validate("").is_ok());
    /// assert!(string().validate("CON").is_ok());
    /// ```
    pub AnyString for str;
    rule(input) { true }
    error(input) { ValidationError::new("string", "expected a string") }
    fn string();
}
