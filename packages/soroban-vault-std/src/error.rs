/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

/// Assert that the result of a `try_` client call is the given contract error.
///
/// Client `try_` calls return `Result<Result<T, ConversionError>, Result<E, InvokeError>>`,
/// a contract error surfaces as `Err(Ok(E))`.
#[macro_export]
macro_rules! assert_contract_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            std::result::Result::Err(std::result::Result::Ok(e)) => {
                if $e != e {
                    panic!("Expected error {:?}, got {:?} instead", $e, e)
                }
            }
            std::result::Result::Err(std::result::Result::Err(e)) => {
                panic!(
                    "Expected error {:?} when calling {}, got invoke error {:?} instead",
                    $e,
                    stringify!($x),
                    e
                );
            }
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error {:?} when calling {}, got {:?} instead",
                    $e,
                    stringify!($x),
                    v
                );
            }
        }
    };
}

/// Assert that the result of a `try_` client call failed outside the contract's own error type,
/// e.g. because `require_auth` was not satisfied.
#[macro_export]
macro_rules! assert_auth_err {
    ( $x:expr ) => {
        match $x {
            std::result::Result::Err(std::result::Result::Err(_)) => {}
            other => {
                panic!(
                    "Expected auth error when calling {}, got {:?} instead",
                    stringify!($x),
                    other
                );
            }
        }
    };
}
