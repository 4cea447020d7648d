pub mod negext;

pub use self::negext::*;
pub use plain_enum::*;
pub use derive_new::new;
pub use log::{debug, info, trace, warn};
pub use sheepshead_util::*;
