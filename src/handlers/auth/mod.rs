pub mod generate_otp;
pub mod verify_otp;
