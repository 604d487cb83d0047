mod rigid_body;

pub use self::rigid_body::{Body, MAX_ANGULAR_SPEED};
