//! Evenly spaced sampling of the a*/b* plane.

use log::warn;

use crate::{color::Component, config::MAX_TICKS, math::lerp};

/// `num` evenly spaced values from `start` to `stop`, both included.
///
/// The last value is exactly `stop`. A single value yields `[start]` and zero
/// values yield an empty vector.
pub fn linspace(start: Component, stop: Component, num: usize) -> Vec<Component> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let last = (num - 1) as Component;
            let mut values: Vec<Component> = (0..num)
                .map(|i| lerp(start, stop, i as Component / last))
                .collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Values from `start` up to but excluding `stop`, `step` apart.
///
/// Callers wanting an inclusive upper bound pad `stop` by half a step the way
/// the tick layout does. `step` must be positive, and ranges that would
/// produce more than [`MAX_TICKS`] values yield nothing.
pub fn arange(start: Component, stop: Component, step: Component) -> Vec<Component> {
    if !(step > 0.0) || !(stop > start) {
        return vec![];
    }

    let count = ((stop - start) / step).ceil();
    if !(count <= MAX_TICKS as Component) {
        warn!("refusing to lay out {count} values from {start} to {stop} by {step}");
        return vec![];
    }

    (0..count as usize)
        .map(|i| start + step * i as Component)
        .collect()
}

/// A square grid of (a*, b*) samples sharing one lightness.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    values: Vec<Component>,
    lightness: Component,
}

impl SampleGrid {
    /// Sample `num_points` values over `[min, max]` on both axes.
    pub fn new(min: Component, max: Component, num_points: usize, lightness: Component) -> Self {
        Self {
            values: linspace(min, max, num_points),
            lightness,
        }
    }

    /// The shared 1D sequence used for both the a* and the b* axis.
    pub fn values(&self) -> &[Component] {
        &self.values
    }

    /// The lightness of the slice.
    pub fn lightness(&self) -> Component {
        self.lightness
    }

    /// Number of samples along one axis.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the grid has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over columns: one a* value with the Lab triple of every b*
    /// value, in b* order.
    pub fn columns(&self) -> impl Iterator<Item = (Component, Vec<[Component; 3]>)> + '_ {
        self.values.iter().map(move |&a| {
            let column = self
                .values
                .iter()
                .map(|&b| [self.lightness, a, b])
                .collect();
            (a, column)
        })
    }
}
