// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use collage_items::CollageItem;
use tracing::{debug, error, warn};

use crate::{
    FillRoomLayoutManager, LayoutEnv, LayoutError, LayoutKind, LayoutManager,
    RandomLayoutManager, SimpleDoubleLayoutManager, SimpleSingleLayoutManager,
    SmartSingleLayoutManager,
};

/// Creates strategies and owns the active one.
///
/// At most one strategy is active. Switching releases the previous one
/// without running a layout.
#[derive(Debug, Default)]
pub struct LayoutFactory {
    active: Option<Box<dyn LayoutManager>>,
    seed: Option<u64>,
}

impl LayoutFactory {
    /// A factory with no active strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose random strategies are seeded with `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            active: None,
            seed: Some(seed),
        }
    }

    /// Seed used for random strategies created from now on.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Builds a fresh strategy of `kind`.
    #[must_use]
    pub fn create_layout_manager(&self, kind: LayoutKind) -> Box<dyn LayoutManager> {
        match kind {
            LayoutKind::SimpleSingle => Box::new(SimpleSingleLayoutManager::new()),
            LayoutKind::SimpleDouble => Box::new(SimpleDoubleLayoutManager::new()),
            LayoutKind::SmartSingle => Box::new(SmartSingleLayoutManager::new()),
            LayoutKind::Random => Box::new(match self.seed {
                Some(seed) => RandomLayoutManager::with_seed(seed),
                None => RandomLayoutManager::new(),
            }),
            LayoutKind::FillRoom => Box::new(FillRoomLayoutManager::new()),
        }
    }

    /// Makes `kind` the active strategy.
    pub fn set_layout_manager(&mut self, kind: LayoutKind) {
        let previous = self.active_kind();
        self.active = Some(self.create_layout_manager(kind));
        debug!(?previous, %kind, "switched layout");
    }

    /// Kind of the active strategy, if any.
    #[must_use]
    pub fn active_kind(&self) -> Option<LayoutKind> {
        self.active.as_ref().map(|manager| manager.kind())
    }

    /// Runs the active strategy, activating
    /// [`SimpleSingle`](LayoutKind::SimpleSingle) first if none is.
    pub fn layout(
        &mut self,
        items: &mut [CollageItem],
        env: &LayoutEnv<'_>,
        start: usize,
    ) -> Result<(), LayoutError> {
        let manager = self
            .active
            .get_or_insert_with(|| Box::new(SimpleSingleLayoutManager::new()));
        manager.layout(items, env, start)
    }

    /// Runs the active strategy; on a configuration error, logs it and lays
    /// out with [`SimpleSingle`](LayoutKind::SimpleSingle) instead.
    ///
    /// Returns the kind that produced the final arrangement. The active
    /// strategy is not changed by the fallback.
    pub fn layout_or_fallback(
        &mut self,
        items: &mut [CollageItem],
        env: &LayoutEnv<'_>,
        start: usize,
    ) -> Result<LayoutKind, LayoutError> {
        match self.layout(items, env, start) {
            Ok(()) => Ok(self.active_kind().unwrap_or_default()),
            Err(err) if err.is_configuration() => {
                warn!(kind = ?self.active_kind(), error = %err, "layout failed, falling back to simple_single");
                SimpleSingleLayoutManager::new().layout(items, env, start)?;
                Ok(LayoutKind::SimpleSingle)
            }
            Err(err) => {
                error!(kind = ?self.active_kind(), error = %err, "layout failed");
                Err(err)
            }
        }
    }
}
