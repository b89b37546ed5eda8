mod artifact_kind;
pub use self::artifact_kind::*;

mod browser_targets;
pub use self::browser_targets::*;

mod build_mode;
pub use self::build_mode::*;

mod dev_server;
pub use self::dev_server::*;

mod naming;
pub use self::naming::*;

mod output;
pub use self::output::*;
