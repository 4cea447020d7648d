pub use derive_new::new;
pub use failure::{bail, format_err, Error};
pub use log::{debug, info};
pub use sheepshead_util::*;
