/// Macro to generate common From implementations for lettre errors
///
/// Usage:
/// ```ignore
/// impl_service_error_conversions!(MessageBuildError, Malformed, InvalidAddress);
/// ```
#[macro_export]
macro_rules! impl_service_error_conversions {
  ($error_type:ty, $build_variant:ident, $address_variant:ident) => {
    impl From<lettre::error::Error> for $error_type {
      fn from(err: lettre::error::Error) -> Self {
        <$error_type>::$build_variant(format!("Message construction error: {}", err))
      }
    }

    impl From<lettre::address::AddressError> for $error_type {
      fn from(err: lettre::address::AddressError) -> Self {
        <$error_type>::$address_variant(format!("Address error: {}", err))
      }
    }
  };
}
