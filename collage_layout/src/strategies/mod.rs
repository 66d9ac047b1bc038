// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The five built-in strategies.

mod fill_room;
mod random;
mod simple_double;
mod simple_single;
mod smart_single;

pub use fill_room::FillRoomLayoutManager;
pub use random::RandomLayoutManager;
pub use simple_double::SimpleDoubleLayoutManager;
pub use simple_single::SimpleSingleLayoutManager;
pub use smart_single::{SmartSingleLayoutManager, fitting_scale, images_per_display};
