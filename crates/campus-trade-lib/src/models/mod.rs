pub mod favorite;
pub use favorite::*;

pub mod toast;
pub use toast::*;
