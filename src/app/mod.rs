pub mod ports;
pub mod address_search_use_case;
pub mod otp_use_case;

pub use address_search_use_case::AddressSearchUseCase;
pub use otp_use_case::OtpUseCase;
