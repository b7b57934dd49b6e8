mod fallback;
mod remote;

pub use fallback::{FallbackSuggester, Origin, Suggestions};
pub use remote::{RemoteError, RemoteSuggester};
