use std::time::Duration;

/// One scheduled phase, `at` measured from the moment the group was spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue<P> {
    pub at: Duration,
    pub phase: P,
}

/// Ordered phases with non-decreasing offsets.
///
/// Offsets are only ever extended from the last cue, so a script can
/// never schedule a phase before the one that precedes it.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseScript<P> {
    cues: Vec<Cue<P>>,
}

impl<P> Default for PhaseScript<P> {
    fn default() -> Self {
        Self { cues: Vec::new() }
    }
}

impl<P> PhaseScript<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// First phase, fired as soon as the group starts.
    pub fn starting_with(phase: P) -> Self {
        Self::new().then_after(0, phase)
    }

    /// Schedule `phase` `delay_ms` after the previous cue.
    pub fn then_after(mut self, delay_ms: u64, phase: P) -> Self {
        let at = self.total() + Duration::from_millis(delay_ms);
        self.cues.push(Cue { at, phase });
        self
    }

    /// Schedule `phase` at an absolute offset, clamped so it never precedes the previous cue.
    pub fn at(mut self, offset_ms: u64, phase: P) -> Self {
        let at = Duration::from_millis(offset_ms).max(self.total());
        self.cues.push(Cue { at, phase });
        self
    }

    /// Offset of the last cue.
    pub fn total(&self) -> Duration {
        self.cues.last().map(|cue| cue.at).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn cues(&self) -> &[Cue<P>] {
        &self.cues
    }

    /// Multiply every offset by `factor`. Non-finite or negative factors collapse to zero.
    pub fn scaled(self, factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 { factor } else { 0.0 };
        let cues = self
            .cues
            .into_iter()
            .map(|cue| Cue {
                at: cue.at.mul_f64(factor),
                phase: cue.phase,
            })
            .collect();
        Self { cues }
    }
}

impl<P> IntoIterator for PhaseScript<P> {
    type Item = Cue<P>;
    type IntoIter = std::vec::IntoIter<Cue<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_cues_accumulate() {
        let script = PhaseScript::starting_with('a').then_after(900, 'b').then_after(1300, 'c');
        let offsets: Vec<u128> = script.cues().iter().map(|c| c.at.as_millis()).collect();
        assert_eq!(offsets, vec![0, 900, 2200]);
        assert_eq!(script.total(), Duration::from_millis(2200));
    }

    #[test]
    fn test_absolute_cue_never_precedes_previous() {
        let script = PhaseScript::new().at(1500, 1).at(500, 2).at(2000, 3);
        let offsets: Vec<u128> = script.cues().iter().map(|c| c.at.as_millis()).collect();
        assert_eq!(offsets, vec![1500, 1500, 2000]);
    }

    #[test]
    fn test_scaling_keeps_order() {
        let script = PhaseScript::starting_with(1).then_after(1000, 2).then_after(500, 3).scaled(0.5);
        let offsets: Vec<u128> = script.cues().iter().map(|c| c.at.as_millis()).collect();
        assert_eq!(offsets, vec![0, 500, 750]);
    }

    #[test]
    fn test_bad_scale_factor_collapses_to_zero() {
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let script = PhaseScript::starting_with(1).then_after(1000, 2).scaled(factor);
            assert_eq!(script.total(), Duration::ZERO, "factor {factor}");
            assert_eq!(script.len(), 2);
        }
    }
}
