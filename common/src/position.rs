//! Oversampled potentiometer acquisition.
//!
//! The azimuth pot is a noisy analog source: the feed line picks up RF and
//! the wiper itself scratches. An RC input filter takes the worst of it out
//! of the signal; the rest is handled in software by averaging a burst of
//! samples per read. Float-to-integer conversion is deliberately avoided:
//! the whole pipeline stays in u32 arithmetic.

use crate::config::{ADC_FULL_SCALE, OVERSAMPLE_COUNT};
use crate::hw::AnalogInput;

/// Read a potentiometer-backed position, scaled to `[0, domain_max]` degrees.
///
/// Takes 128 sequential samples, averages with integer truncation, then maps
/// the 10-bit ADC range linearly onto the mechanical domain. Deterministic
/// for a static input; blocks for the full sampling burst.
///
/// Averaging has no outlier rejection: one transient spike shifts the window
/// average by spike/128. That is a documented property of this filter; the
/// RC input stage keeps spikes rare enough for it to be acceptable.
pub fn read_position<A: AnalogInput>(adc: &mut A, domain_max: u32) -> u16 {
    let mut sum: u32 = 0;
    for _ in 0..OVERSAMPLE_COUNT {
        sum += u32::from(adc.read());
    }
    (((sum / OVERSAMPLE_COUNT) * domain_max) / ADC_FULL_SCALE) as u16
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AZIMUTH_DOMAIN_MAX, PRESET_DOMAIN_MAX};
    use crate::hw::doubles::{ConstantAnalog, ScriptedAnalog};

    #[test]
    fn test_full_scale_maps_to_domain_max() {
        let mut adc = ConstantAnalog(1023);
        assert_eq!(read_position(&mut adc, AZIMUTH_DOMAIN_MAX), 450);
        let mut adc = ConstantAnalog(1023);
        assert_eq!(read_position(&mut adc, PRESET_DOMAIN_MAX), 360);
    }

    #[test]
    fn test_zero_maps_to_zero() {
        let mut adc = ConstantAnalog(0);
        assert_eq!(read_position(&mut adc, AZIMUTH_DOMAIN_MAX), 0);
    }

    #[test]
    fn test_static_input_is_deterministic() {
        let mut a = ConstantAnalog(512);
        let mut b = ConstantAnalog(512);
        let first = read_position(&mut a, AZIMUTH_DOMAIN_MAX);
        let second = read_position(&mut b, AZIMUTH_DOMAIN_MAX);
        assert_eq!(first, second);
        // (512 * 450) / 1023, all integer
        assert_eq!(first, 225);
    }

    #[test]
    fn test_scaling_is_monotonic() {
        let mut prev = 0;
        for raw in 0..=1023 {
            let mut adc = ConstantAnalog(raw);
            let scaled = read_position(&mut adc, AZIMUTH_DOMAIN_MAX);
            assert!(scaled >= prev, "scale({raw}) went backwards");
            prev = scaled;
        }
        assert_eq!(prev, 450);
    }

    #[test]
    fn test_consumes_exactly_128_samples() {
        // 127 samples of 100 and one of 228 average to 101; a script any
        // shorter or longer would land elsewhere.
        let mut samples = vec![100u16; 127];
        samples.push(228);
        let mut adc = ScriptedAnalog::new(&samples);
        let scaled = read_position(&mut adc, 1023);
        assert_eq!(scaled, 101);
    }

    #[test]
    fn test_single_spike_shifts_average_proportionally() {
        // A lone full-scale spike in an otherwise flat window moves the
        // average by (1023 - 100) / 128 = 7 counts, no more.
        let mut samples = vec![100u16; 128];
        samples[40] = 1023;
        let mut adc = ScriptedAnalog::new(&samples);
        let spiked = read_position(&mut adc, 1023);

        let mut flat = ConstantAnalog(100);
        let baseline = read_position(&mut flat, 1023);

        assert_eq!(spiked, baseline + 7);
    }

    #[test]
    fn test_average_truncates_toward_zero() {
        // 127 ones and a zero sum to 127; 127 / 128 truncates to 0.
        let mut samples = vec![1u16; 127];
        samples.push(0);
        let mut adc = ScriptedAnalog::new(&samples);
        assert_eq!(read_position(&mut adc, 1023), 0);
    }
}
