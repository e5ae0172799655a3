use derive_more::IsVariant;

/// The value returned by traversal callbacks to decide whether iteration carries on.
///
/// `true` converts to [`Signal::Continue`] and `false` to [`Signal::Stop`], so callbacks can also
/// be written in terms of a boolean and finished off with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Signal {
    Continue,
    Stop,
}

impl From<bool> for Signal {
    fn from(value: bool) -> Self {
        if value {
            Signal::Continue
        } else {
            Signal::Stop
        }
    }
}
