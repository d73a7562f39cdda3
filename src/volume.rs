use crate::error::MixerError;

/// Decibel spans up to this many dB are mapped linearly.
pub const MAX_LINEAR_DB_SCALE: i64 = 24;

// centibels per decade of perceived loudness
const DB_DECADE: f64 = 6000.0;

// a few ulps of an f32 fraction, relative
const F32_SLACK: f64 = 4.0 * f32::EPSILON as f64;

/// Clamp a volume fraction into `[0, 1]`. NaN counts as silence.
pub fn trim_pct(pct: f32) -> f32 {
    if pct.is_nan() || pct < 0.0 {
        0.0
    } else if pct > 1.0 {
        1.0
    } else {
        pct
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeRange {
    pub min: i64,
    pub max: i64,
}

impl VolumeRange {
    pub const fn new(min: i64, max: i64) -> VolumeRange {
        VolumeRange { min, max }
    }

    /// Raw value at `pct` of the range, rounded down.
    ///
    /// Products within `f32` precision of a whole step count as that step, so
    /// `0.29` of `0..100` is 29 even though `0.29f32` is slightly below it.
    pub fn raw_from_fraction(&self, pct: f32) -> i64 {
        let offset = (trim_pct(pct) as f64) * (self.max - self.min) as f64;
        let nearest = offset.round();

        let steps = if (offset - nearest).abs() <= offset.max(1.0) * F32_SLACK {
            nearest
        } else {
            offset.floor()
        };

        self.min + steps as i64
    }

    /// Fraction of the range covered by `raw`, quantized to whole percents.
    pub fn fraction_from_raw(&self, raw: i64) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }

        let fraction = (raw - self.min) as f64 / (self.max - self.min) as f64;
        ((fraction * 100.0).round() / 100.0) as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbRange {
    pub min: i64,
    pub max: i64,
    min_is_mute: bool,
}

impl DbRange {
    pub const fn new(min: i64, max: i64, mute_sentinel: i64) -> DbRange {
        DbRange { min, max, min_is_mute: min == mute_sentinel }
    }

    pub fn span(&self) -> i64 {
        self.max - self.min
    }

    pub fn is_linear(&self) -> bool {
        self.span() <= MAX_LINEAR_DB_SCALE * 100
    }

    fn min_norm(&self) -> f64 {
        10f64.powf((self.min - self.max) as f64 / DB_DECADE)
    }

    pub fn normalized_from_db(&self, value: i64) -> f64 {
        if self.is_linear() {
            return (value - self.min) as f64 / self.span() as f64;
        }

        let normalized = 10f64.powf((value - self.max) as f64 / DB_DECADE);

        if self.min_is_mute {
            normalized
        } else {
            let min_norm = self.min_norm();
            (normalized - min_norm) / (1.0 - min_norm)
        }
    }

    /// Inverse of `normalized_from_db`. The result always lies inside the range.
    pub fn db_from_normalized(&self, pct: f64) -> i64 {
        if self.is_linear() {
            return (pct * self.span() as f64).round() as i64 + self.min;
        }

        let pct = if self.min_is_mute {
            pct
        } else {
            let min_norm = self.min_norm();
            pct * (1.0 - min_norm) + min_norm
        };

        // log10(0) is -inf, which saturates to i64::MIN
        let value = (DB_DECADE * pct.log10()).round() as i64;
        value.saturating_add(self.max).clamp(self.min, self.max)
    }
}

/// Outcome of asking the hardware for its decibel range.
#[derive(Debug)]
pub enum DbRangeQuery {
    Valid(DbRange),
    Degenerate,
    Failed(MixerError),
}

impl DbRangeQuery {
    pub fn new(result: Result<(i64, i64), MixerError>, mute_sentinel: i64) -> DbRangeQuery {
        match result {
            Ok((min, max)) if min < max => DbRangeQuery::Valid(DbRange::new(min, max, mute_sentinel)),
            Ok(_) => DbRangeQuery::Degenerate,
            Err(err) => DbRangeQuery::Failed(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{trim_pct, DbRange, DbRangeQuery, VolumeRange};
    use crate::control::DB_GAIN_MUTE;
    use crate::error::MixerError;

    #[test]
    fn test_trim_pct() {
        assert_eq!(trim_pct(-0.25), 0.0);
        assert_eq!(trim_pct(-100.0), 0.0);
        assert_eq!(trim_pct(1.5), 1.0);
        assert_eq!(trim_pct(f32::INFINITY), 1.0);
        assert_eq!(trim_pct(f32::NAN), 0.0);

        for pct in &[0.0, 0.01, 0.5, 0.99, 1.0] {
            assert_eq!(trim_pct(*pct), *pct);
        }
    }

    #[test]
    fn test_raw_from_fraction_floors() {
        let range = VolumeRange::new(0, 65535);

        assert_eq!(range.raw_from_fraction(0.5), 32767);
        assert_eq!(range.raw_from_fraction(0.0), 0);
        assert_eq!(range.raw_from_fraction(1.0), 65535);
        assert_eq!(range.raw_from_fraction(2.0), 65535);

        let negative = VolumeRange::new(-101, 0);
        assert_eq!(negative.raw_from_fraction(0.5), -51);
    }

    #[test]
    fn test_raw_from_fraction_hits_whole_percents() {
        let range = VolumeRange::new(0, 100);

        assert_eq!(range.raw_from_fraction(0.01), 1);
        assert_eq!(range.raw_from_fraction(0.29), 29);
        assert_eq!(range.raw_from_fraction(0.005), 0);
        assert_eq!(range.raw_from_fraction(0.999), 99);

        for percent in 0..=100 {
            assert_eq!(range.raw_from_fraction(percent as f32 / 100.0), percent as i64);
            assert_eq!(VolumeRange::new(-100, 0).raw_from_fraction(percent as f32 / 100.0), percent as i64 - 100);
        }

        assert_eq!(VolumeRange::new(0, 65535).raw_from_fraction(0.01), 655);
    }

    #[test]
    fn test_fraction_from_raw_rounds_to_percent() {
        let range = VolumeRange::new(0, 65535);

        assert_eq!(range.fraction_from_raw(32767), 0.5);
        assert_eq!(range.fraction_from_raw(65535), 1.0);
        assert_eq!(VolumeRange::new(-50, 50).fraction_from_raw(0), 0.5);
        assert_eq!(VolumeRange::new(10, 10).fraction_from_raw(10), 0.0);
    }

    #[test]
    fn test_linear_db_branch() {
        let range = DbRange::new(-1200, 0, DB_GAIN_MUTE);

        assert!(range.is_linear());
        assert_eq!(range.db_from_normalized(0.5), -600);
        assert_eq!(range.db_from_normalized(0.0), -1200);
        assert_eq!(range.db_from_normalized(1.0), 0);
        assert_eq!(range.normalized_from_db(-600), 0.5);
        assert!(DbRange::new(-2400, 0, DB_GAIN_MUTE).is_linear());
        assert!(!DbRange::new(-2401, 0, DB_GAIN_MUTE).is_linear());
    }

    #[test]
    fn test_exponential_db_branch_inverts() {
        let range = DbRange::new(-3000, 0, DB_GAIN_MUTE);

        assert!(!range.is_linear());
        assert_eq!(range.db_from_normalized(1.0), 0);
        assert_eq!(range.db_from_normalized(0.0), -3000);

        for step in 0..=20 {
            let pct = step as f64 / 20.0;
            let value = range.db_from_normalized(pct);
            assert!((range.normalized_from_db(value) - pct).abs() < 1e-3, "pct {} -> {} dB", pct, value);
        }
    }

    #[test]
    fn test_mute_sentinel_skips_rescale() {
        let range = DbRange::new(DB_GAIN_MUTE, 0, DB_GAIN_MUTE);

        assert_eq!(range.db_from_normalized(0.1), -6000);
        assert!((range.normalized_from_db(-6000) - 0.1).abs() < 1e-9);
        assert_eq!(range.db_from_normalized(0.0), DB_GAIN_MUTE);
    }

    #[test]
    fn test_db_range_query() {
        assert!(matches!(DbRangeQuery::new(Ok((-1200, 0)), DB_GAIN_MUTE), DbRangeQuery::Valid(_)));
        assert!(matches!(DbRangeQuery::new(Ok((0, 0)), DB_GAIN_MUTE), DbRangeQuery::Degenerate));
        assert!(matches!(DbRangeQuery::new(Ok((10, -10)), DB_GAIN_MUTE), DbRangeQuery::Degenerate));
        assert!(matches!(DbRangeQuery::new(Err(MixerError::control("get dB range", "no TLV")), DB_GAIN_MUTE), DbRangeQuery::Failed(_)));
    }
}
