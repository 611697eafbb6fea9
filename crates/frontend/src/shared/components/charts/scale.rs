//! Linear scales and "nice" axis ticks for the SVG charts

/// Maps a data domain onto a pixel range (the range may be inverted for y axes)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel length of a span of data units
    pub fn length(&self, span: f64) -> f64 {
        (self.map(span) - self.map(0.0)).abs()
    }
}

/// Step of 1, 2 or 5 times a power of ten giving roughly `target` intervals
pub fn nice_step(span: f64, target: usize) -> f64 {
    if span <= 0.0 || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Domain widened outward to multiples of the nice step; never degenerate
pub fn nice_domain(min: f64, max: f64, target: usize) -> (f64, f64) {
    let (mut lo, mut hi) = if min <= max { (min, max) } else { (max, min) };
    if (hi - lo).abs() < f64::EPSILON {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        lo -= pad;
        hi += pad;
    }
    let step = nice_step(hi - lo, target);
    ((lo / step).floor() * step, (hi / step).ceil() * step)
}

/// Domain for a value axis starting at zero (bar charts)
pub fn zero_based_domain(max: f64, target: usize) -> (f64, f64) {
    if max <= 0.0 {
        return (0.0, 1.0);
    }
    nice_domain(0.0, max, target)
}

/// Domain with a fraction of the span added on both sides before rounding,
/// so markers at the extremes stay inside the plot
pub fn padded_domain(min: f64, max: f64, fraction: f64, target: usize) -> (f64, f64) {
    let pad = (max - min).abs() * fraction;
    nice_domain(min - pad, max + pad, target)
}

/// Tick values from the start to the end of a nice domain
pub fn ticks(domain: (f64, f64), target: usize) -> Vec<f64> {
    let (lo, hi) = domain;
    let step = nice_step(hi - lo, target);
    let count = ((hi - lo) / step).round() as usize;
    (0..=count)
        .map(|i| {
            let value = lo + step * i as f64;
            // drop float noise such as 0.30000000000000004
            (value / step).round() * step
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_inverted_range() {
        let scale = LinearScale::new((0.0, 200.0), (300.0, 0.0));
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(100.0), 150.0);
        assert_eq!(scale.map(200.0), 0.0);
        assert_eq!(scale.length(50.0), 75.0);
    }

    #[test]
    fn test_map_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.map(5.0), 50.0);
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(200.0, 5), 50.0);
        assert_eq!(nice_step(750.0, 5), 200.0);
        assert_eq!(nice_step(36.0, 5), 10.0);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }

    #[test]
    fn test_zero_based_domain() {
        assert_eq!(zero_based_domain(200.0, 5), (0.0, 200.0));
        assert_eq!(zero_based_domain(330.0, 5), (0.0, 400.0));
        assert_eq!(zero_based_domain(0.0, 5), (0.0, 1.0));
    }

    #[test]
    fn test_padded_domain_keeps_extremes_inside() {
        let (lo, hi) = padded_domain(5.0, 10.0, 0.05, 5);
        assert!(lo < 5.0);
        assert!(hi > 10.0);
        assert_eq!((lo, hi), (4.0, 12.0));
    }

    #[test]
    fn test_single_value_domain() {
        let (lo, hi) = nice_domain(120.0, 120.0, 5);
        assert!(lo < 120.0 && hi > 120.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks((0.0, 200.0), 5), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
        assert_eq!(ticks((4.0, 12.0), 5), vec![4.0, 6.0, 8.0, 10.0, 12.0]);
    }
}
