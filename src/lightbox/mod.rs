// SPDX-License-Identifier: MPL-2.0
//! Lightbox core: a deterministic state machine over an ordered image list.
//!
//! ## Architecture
//!
//! ```text
//! controller.rs (Event -> Effect)
//!     ├── session   - GallerySession, Snapshot, generation token
//!     ├── gesture   - swipe classification and thresholds
//!     ├── wheel     - monotonic rate gate for wheel navigation
//!     └── keyboard  - key to command mapping
//! ```
//!
//! ## States
//!
//! ```text
//!            toggle_zoom              begin_drag
//!   Idle ───────────────► Zoomed ───────────────► Dragging
//!    ▲  ◄───────────────   │  ◄───────────────      │
//!    │     toggle_zoom     │       end_drag         │
//!    └─────────────────────┴────────────────────────┘
//!          next / prev / go_to_image / toggle_zoom
//! ```
//!
//! Fullscreen is an orthogonal flag mirrored from the platform. Image
//! references are opaque: the controller never looks inside them.

mod controller;
mod gesture;
mod keyboard;
mod session;
mod wheel;

pub use controller::{Controller, Effect, Event, FullscreenRequest, PreloadTicket};
pub use gesture::{classify_swipe, SwipeAction, SwipeThreshold, SwipeThresholds};
pub use keyboard::{command_for, Command, FocusContext, Key};
pub use session::{GallerySession, Generation, Mode, PanOffset, Point, Snapshot};
pub use wheel::{WheelGate, WheelInterval};
