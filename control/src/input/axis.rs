//! Analog axis remembering its value from the previous tick.

#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axis {
    pub value: f64,
    pub previous: f64,
}

impl Axis {
    pub fn update(&mut self, value: f64) {
        self.previous = self.value;
        self.value = value;
    }

    /// Take over the current value as if it did not move.
    pub fn settle(&mut self, value: f64) {
        self.previous = value;
        self.value = value;
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn moved(&self) -> bool {
        self.value != self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_value_changes_it_is_reported_as_moved() {
        let mut axis = Axis::default();
        axis.update(0.5);
        assert!(axis.moved());
        axis.update(0.5);
        assert!(!axis.moved());
    }

    #[test]
    fn when_settled_it_is_not_reported_as_moved() {
        let mut axis = Axis::default();
        axis.settle(0.7);
        assert!(!axis.moved());
        assert_relative_eq!(axis.value, 0.7);
    }
}
