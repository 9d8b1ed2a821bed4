mod ec;
mod rsa;

pub use self::ec::*;
pub use self::rsa::*;
