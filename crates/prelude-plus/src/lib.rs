//! The std and third-party names which every Cardboard binary ends up
//! importing anyway.

pub use std::fmt;
pub use std::io::{self, BufRead, BufWriter, Write};

#[cfg(feature = "anyhow")]
pub use ::anyhow::{self, Context as ResultContextExt, Result as AnyResult};
#[cfg(feature = "log")]
pub use ::log::{self, debug, error, info};
