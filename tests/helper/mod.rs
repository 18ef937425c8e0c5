pub mod fakes;
pub mod helper;

pub use fakes::FakeProvisioner;
pub use fakes::MemoryOtpStore;
pub use fakes::RecordingNotifier;

pub use helper::generate_otp;
pub use helper::send_json;
pub use helper::test_context;
pub use helper::verify_otp;
pub use helper::TestContext;
