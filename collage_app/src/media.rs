// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media descriptions given on the command line.

use core::str::FromStr;

use collage_items::ItemSpec;

/// Error from parsing a [`MediaArg`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected WIDTHxHEIGHT[:PATH] with positive sizes, got `{0}`")]
pub struct ParseMediaError(pub String);

/// `WIDTHxHEIGHT[:PATH]`, for example `1024x768:photos/beach.jpg`.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaArg(pub ItemSpec);

impl FromStr for MediaArg {
    type Err = ParseMediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMediaError(s.to_owned());
        let (size, path) = match s.split_once(':') {
            Some((size, path)) => (size, Some(path)),
            None => (s, None),
        };
        let (w, h) = size.split_once(['x', 'X']).ok_or_else(err)?;
        let width: u32 = w.trim().parse().map_err(|_| err())?;
        let height: u32 = h.trim().parse().map_err(|_| err())?;
        if width == 0 || height == 0 {
            return Err(err());
        }
        let spec = ItemSpec::new(f64::from(width), f64::from(height));
        Ok(Self(match path {
            Some(path) if !path.is_empty() => spec.with_path(path),
            _ => spec,
        }))
    }
}
