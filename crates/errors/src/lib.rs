use std::borrow::Cow;

/// ErrorMetadata object can be attached to an anyhow error chain via
/// `.context(e /*ErrorMetadata*/)` or raised directly with
/// `anyhow::bail!(e)`. It tags errors with the information callers use to
/// decide who is at fault and what can be shown to whom.
///
/// The msg is conveyed as a user facing error message if the error is
/// classified as user-caused. Invariant violations keep their msg for
/// operators and logs, but are shown to users as a generic internal error.
///
/// The short_msg is used as a tag - available for tests and for logging - to
/// have a message that is resilient to changes in copy.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("{msg}")]
pub struct ErrorMetadata {
    /// The error code associated with this ErrorMetadata
    pub code: ErrorCode,
    /// short ScreamingCamelCase. Usable in tests for string matching
    /// w/ a standard test helper.
    /// Eg DuplicateIndexIds
    pub short_msg: Cow<'static, str>,
    /// human readable - developer facing. Should be longer and descriptive.
    /// Eg "Index definitions contain duplicate index ids: [..]"
    pub msg: Cow<'static, str>,
}

#[cfg_attr(any(test, feature = "testing"), derive(proptest_derive::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The submitted definition is semantically invalid. Safe to surface to
    /// whoever submitted it.
    BadRequest,

    /// The proposed catalog state as a whole is inconsistent. These should be
    /// prevented upstream, so seeing one means a bug or a race in the caller.
    InvariantViolation,
}

impl ErrorMetadata {
    /// Bad Request. The definition itself is invalid.
    ///
    /// The short_msg should be a CapitalCamelCased describing the error.
    /// The msg should be a descriptive message targeted toward the developer.
    pub fn bad_request(
        short_msg: impl Into<Cow<'static, str>>,
        msg: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            short_msg: short_msg.into(),
            msg: msg.into(),
        }
    }

    /// Catalog invariant violation. The batch must be rejected as a whole and
    /// nothing about it persisted.
    ///
    /// The short_msg should be a CapitalCamelCased describing the violated
    /// invariant (eg DuplicateGenerationIds). The msg should list the
    /// offending ids so an operator can find them.
    pub fn invariant_violation(
        short_msg: impl Into<Cow<'static, str>>,
        msg: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: ErrorCode::InvariantViolation,
            short_msg: short_msg.into(),
            msg: msg.into(),
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.code == ErrorCode::BadRequest
    }

    pub fn is_invariant_violation(&self) -> bool {
        self.code == ErrorCode::InvariantViolation
    }

    /// Return true if this error is deterministically caused by user input,
    /// i.e. resubmitting the same definition will fail the same way.
    pub fn is_deterministic_user_error(&self) -> bool {
        match self.code {
            ErrorCode::BadRequest => true,
            ErrorCode::InvariantViolation => false,
        }
    }

    fn user_facing_message(&self) -> String {
        match self.code {
            ErrorCode::BadRequest => self.msg.to_string(),
            ErrorCode::InvariantViolation => INTERNAL_SERVER_ERROR_MSG.to_string(),
        }
    }
}

pub trait ErrorMetadataAnyhowExt {
    fn is_bad_request(&self) -> bool;
    fn is_invariant_violation(&self) -> bool;
    fn is_deterministic_user_error(&self) -> bool;
    fn user_facing_message(&self) -> String;
    fn short_msg(&self) -> &str;
    fn msg(&self) -> &str;
    fn wrap_error_message<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String;
}

impl ErrorMetadataAnyhowExt for anyhow::Error {
    /// Returns true if error is tagged as BadRequest
    fn is_bad_request(&self) -> bool {
        if let Some(e) = self.downcast_ref::<ErrorMetadata>() {
            return e.is_bad_request();
        }
        false
    }

    /// Returns true if error is tagged as InvariantViolation
    fn is_invariant_violation(&self) -> bool {
        if let Some(e) = self.downcast_ref::<ErrorMetadata>() {
            return e.is_invariant_violation();
        }
        false
    }

    fn is_deterministic_user_error(&self) -> bool {
        if let Some(e) = self.downcast_ref::<ErrorMetadata>() {
            return e.is_deterministic_user_error();
        }
        false
    }

    fn user_facing_message(&self) -> String {
        if let Some(e) = self.downcast_ref::<ErrorMetadata>() {
            return e.user_facing_message();
        }
        INTERNAL_SERVER_ERROR_MSG.to_string()
    }

    /// Return the short_msg associated with this Error
    fn short_msg(&self) -> &str {
        if let Some(e) = self.downcast_ref::<ErrorMetadata>() {
            return &e.short_msg;
        }
        INTERNAL_SERVER_ERROR
    }

    /// Return the descriptive msg associated with this Error
    fn msg(&self) -> &str {
        if let Some(e) = self.downcast_ref::<ErrorMetadata>() {
            return &e.msg;
        }
        INTERNAL_SERVER_ERROR_MSG
    }

    /// Wrap the underlying error message, maintaining the underlying error
    /// metadata short code if it exists.
    fn wrap_error_message<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        if let Some(mut em) = self.downcast_ref::<ErrorMetadata>().cloned() {
            // Underlying ErrorMetadata. Reuse and reattach it.
            em.msg = f(em.msg.to_string()).into();
            return self.context(em);
        }

        // No underlying code. Just use .context()
        let new_msg = f(self.to_string());
        self.context(new_msg)
    }
}

pub const INTERNAL_SERVER_ERROR_MSG: &str = "Your request couldn't be completed. Try again later.";
pub const INTERNAL_SERVER_ERROR: &str = "InternalServerError";

#[cfg(any(test, feature = "testing"))]
mod proptest_impls {
    use proptest::prelude::*;

    use super::{
        ErrorCode,
        ErrorMetadata,
    };

    impl Arbitrary for ErrorMetadata {
        type Parameters = ();

        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<ErrorCode>()
                .prop_map(|ec| match ec {
                    ErrorCode::BadRequest => ErrorMetadata::bad_request("bad", "request"),
                    ErrorCode::InvariantViolation => {
                        ErrorMetadata::invariant_violation("invariant", "violation")
                    },
                })
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        ErrorCode,
        ErrorMetadata,
        ErrorMetadataAnyhowExt,
        INTERNAL_SERVER_ERROR,
        INTERNAL_SERVER_ERROR_MSG,
    };

    proptest! {
        #![proptest_config(
            ProptestConfig { failure_persistence: None, ..ProptestConfig::default() }
        )]

        #[test]
        fn test_user_facing_visibility(err in any::<ErrorMetadata>()) {
            let anyhow_err = anyhow::Error::from(err.clone());
            if err.is_deterministic_user_error() {
                // User is responsible for error and gets the details.
                assert_eq!(anyhow_err.user_facing_message(), err.msg);
                assert_eq!(err.code, ErrorCode::BadRequest);
            } else {
                // Internal details stay in logs.
                assert_eq!(anyhow_err.user_facing_message(), INTERNAL_SERVER_ERROR_MSG);
                assert_eq!(anyhow_err.msg(), err.msg);
            }
            assert_ne!(anyhow_err.short_msg(), INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_unclassified_errors_are_internal() {
        let err = anyhow::anyhow!("something broke");
        assert!(!err.is_bad_request());
        assert!(!err.is_invariant_violation());
        assert_eq!(err.short_msg(), INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_facing_message(), INTERNAL_SERVER_ERROR_MSG);
    }

    #[test]
    fn test_wrap_error_message_keeps_classification() {
        let err: anyhow::Error =
            ErrorMetadata::invariant_violation("DuplicateIndexIds", "duplicate ids").into();
        let err = err.wrap_error_message(|msg| format!("In collection c: {msg}"));
        assert!(err.is_invariant_violation());
        assert_eq!(err.short_msg(), "DuplicateIndexIds");
        assert_eq!(err.msg(), "In collection c: duplicate ids");
    }
}
