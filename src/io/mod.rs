//! Image I/O entry points
//!
//! `imread`, `imsave`, `imshow` and `show` route to whichever plugin the
//! store resolves for the call.

mod dispatch;

pub use dispatch::{imread, imsave, imshow, show};
