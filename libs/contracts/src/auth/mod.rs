//! Identity and authentication contracts

pub mod role;
pub mod session;
pub mod user;

// Re-export for convenience
pub use role::Role;
pub use session::{
    AuthStatus, ChangePasswordRequest, DeviceInfo, LoginRequest, LoginResponse, RegisterRequest,
};
pub use user::{UpdateProfileRequest, User};
