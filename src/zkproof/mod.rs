use curv::elliptic::curves::{Curve, Point};
use curv::BigInt;
use tracing::error;

use crate::{Error, Result};

pub mod alice_range;
pub mod bob;
pub mod paillier_key;

/// Affine coordinates of `point`. The point at infinity has none.
pub(crate) fn point_coords<E: Curve>(
    point: &Point<E>,
) -> Result<(BigInt, BigInt)> {
    match (point.x_coord(), point.y_coord()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => {
            error!("curve point has no affine coordinates");
            Err(Error::Encoding)
        }
    }
}

/// Rebuilds a point from coordinates, checking it lies on the curve.
pub(crate) fn point_from_coords<E: Curve>(
    x: &BigInt,
    y: &BigInt,
) -> Result<Point<E>> {
    Point::from_coords(x, y).map_err(|_| {
        error!("coordinates do not describe a curve point");
        Error::Encoding
    })
}
