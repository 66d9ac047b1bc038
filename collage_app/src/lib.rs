// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collage App: a headless collage session.
//!
//! [`CollageSession`] wires a venue ([`collage_scene`]), an item registry
//! ([`collage_items`]) and a layout factory ([`collage_layout`]) together and
//! maps the collage hotkeys and pointer gestures ([`Command`]) onto them.
//! Configuration comes from a TOML [`Config`].
//!
//! Rendering, media decoding and windowing live elsewhere; media reach the
//! session only as pixel sizes plus metadata.
//!
//! ```rust
//! use collage_app::{CollageSession, Command, Config};
//! use collage_items::ItemSpec;
//!
//! let mut session = CollageSession::from_config(&Config::default())?;
//! session.load([ItemSpec::new(640.0, 480.0), ItemSpec::new(480.0, 640.0)])?;
//! for command in Command::parse_keys("5a")? {
//!     session.handle(command)?;
//! }
//! assert_eq!(session.registry().selected().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod command;
pub mod config;
mod media;
mod report;
mod session;

pub use command::{Command, NUDGE_STEP, ParseKeysError};
pub use config::Config;
pub use media::{MediaArg, ParseMediaError};
pub use report::{ItemReport, Report};
pub use session::{CollageSession, SessionError};
