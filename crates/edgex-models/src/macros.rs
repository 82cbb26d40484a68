//! Declarative macros used by the record types.

/// Generate `with_*` builder methods for a struct.
///
/// Each entry names the method, the field it sets, and the field's type.
/// The generated method accepts anything convertible into that type.
///
/// ```rust,ignore
/// builder_methods!(Addressable {
///     with_protocol => protocol: String,
///     with_port => port: i64,
/// });
/// ```
macro_rules! builder_methods {
    ($struct_name:ident { $($method:ident => $field:ident: $ty:ty),* $(,)? }) => {
        impl $struct_name {
            $(
                #[inline]
                pub fn $method(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = value.into();
                    self
                }
            )*
        }
    };
}
