//! Common behaviour of the serializers in Sparrow.
//!
//! Serializers write to an [`io::Write`](std::io::Write) target given at construction.
//! Those targetting a `Vec<u8>` are also [`Stringifier`]s.

/// A stringifier is a serializer that:
///
/// + uses a text-based format encoded in UTF8;
/// + stores the serialized data in memory;
/// + gives access to the serialized data as `str` or `String`.
pub trait Stringifier {
    /// Borrows the internal serialized data.
    ///
    /// # Note to implementers
    /// It is the responsibility of implementors to ensure that this data is valid UTF8.
    /// The methods [`as_str`](#method.as_str) and
    /// [`to_string`](#method.to_string) rely on this.
    fn as_utf8(&self) -> &[u8];

    /// Borrows the internal serialized data as a `str`.
    fn as_str(&self) -> &str {
        unsafe { std::str::from_utf8_unchecked(self.as_utf8()) }
    }

    /// Copy the internal serialized data to a `String`.
    fn to_string(&self) -> String {
        self.as_str().to_string()
    }
}
