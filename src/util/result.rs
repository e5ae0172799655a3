use std::error::Error;

/// Turns the [`Result`] of a `try_` operation into the value of its panicking counterpart.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the value, or panics with the [`Display`](std::fmt::Display) message of the error.
    /// Unlike [`Result::unwrap`], the message is the error alone, without its [`Debug`] form, and
    /// the panic is reported at the caller of the panicking operation.
    ///
    /// # Panics
    /// Panics if the operation rejected its arguments.
    #[track_caller]
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
