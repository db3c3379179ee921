//! Player identity: the locally saved name and the remote roster.

mod resolve;
mod store;

pub use resolve::{resolve, resolve_player, validate_name, NameResolution, NAME_MIN_LENGTH};
pub use store::{FileNameStore, NameStore};
