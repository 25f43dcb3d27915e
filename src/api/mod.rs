pub mod downloads;
pub mod hosts;
pub mod settings;
pub mod streaming;
pub mod system;
pub mod torrents;
pub mod traffic;
pub mod unrestrict;
pub mod user;

// Re-export for convenience
pub use downloads::Downloads;
pub use hosts::Hosts;
pub use settings::Settings;
pub use streaming::Streaming;
pub use system::System;
pub use torrents::Torrents;
pub use traffic::Traffic;
pub use unrestrict::Unrestrict;
pub use user::User;
