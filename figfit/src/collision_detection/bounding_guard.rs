use crate::geometry::ExtremePoints;

/// Returns `false` if the object is taller or wider than the figure, in which case no
/// translation can ever fit it.
/// Equal extents pass the guard.
#[inline(always)]
pub fn fits_within(figure: &ExtremePoints, object: &ExtremePoints) -> bool {
    object.height() <= figure.height() && object.width() <= figure.width()
}
