//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`]: a unit validator (struct + `Validate` impl + factory fn)
//! - [`compose!`]: AND-chain multiple validators

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a zero-sized validator: struct definition, `Validate`
/// implementation and an optional `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always applied.
///
/// ```rust,ignore
/// validator! {
///     pub NoLeadingDash for str;
///     rule(input) { !input.starts_with('-') }
///     error(input) { ValidationError::new("leading_dash", "must not start with '-'") }
///     fn no_leading_dash();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```rust,ignore
/// let portable = compose![
///     filename_for(System::Linux)?,
///     filename_for(System::Macos)?,
///     filename_for(System::Windows)?,
/// ];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
