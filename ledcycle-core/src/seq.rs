//! Data-driven colour sequencing over an abstract LED.

use crate::rgb::Rgb;

/// Seam for anything that can display a single colour.
///
/// The firmware implements this for the RMT-backed WS2812 driver; tests
/// implement it with an in-memory mock.
pub trait LedWrite {
    type Error;

    fn set(&mut self, colour: Rgb) -> Result<(), Self::Error>;
}

/// One step of a sequence: show `colour`, then hold it for `hold_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub colour: Rgb,
    pub hold_ms: u32,
}

impl Step {
    pub const fn new(colour: Rgb, hold_ms: u32) -> Self {
        Self { colour, hold_ms }
    }
}

/// Plays `steps` once in order, holding each colour via the supplied
/// delay. A write error aborts the pass immediately and propagates to the
/// caller; the failed step is not retried.
pub fn run_once<L, D>(led: &mut L, mut delay_ms: D, steps: &[Step]) -> Result<(), L::Error>
where
    L: LedWrite,
    D: FnMut(u32),
{
    for step in steps {
        log::info!("LED {} for {}ms", step.colour.name(), step.hold_ms);
        led.set(step.colour)?;
        delay_ms(step.hold_ms);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb;

    #[derive(Default)]
    struct MockLed {
        written: [Option<Rgb>; 8],
        writes: usize,
        attempts: usize,
        fail_on: Option<usize>,
    }

    impl LedWrite for MockLed {
        type Error = &'static str;

        fn set(&mut self, colour: Rgb) -> Result<(), Self::Error> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_on == Some(attempt) {
                return Err("transmit rejected");
            }
            self.written[self.writes] = Some(colour);
            self.writes += 1;
            Ok(())
        }
    }

    const STEPS: [Step; 3] = [
        Step::new(rgb::GREEN, 30),
        Step::new(rgb::OFF, 10),
        Step::new(rgb::RED, 20),
    ];

    #[test]
    fn plays_steps_in_order() {
        let mut led = MockLed::default();
        let mut held = [0u32; 8];
        let mut holds = 0;
        run_once(
            &mut led,
            |ms| {
                held[holds] = ms;
                holds += 1;
            },
            &STEPS,
        )
        .unwrap();
        assert_eq!(led.writes, 3);
        assert_eq!(led.written[0], Some(rgb::GREEN));
        assert_eq!(led.written[1], Some(rgb::OFF));
        assert_eq!(led.written[2], Some(rgb::RED));
        assert_eq!(&held[..holds], &[30, 10, 20]);
    }

    #[test]
    fn second_pass_is_independent_and_identical() {
        let mut led = MockLed::default();
        run_once(&mut led, |_| {}, &STEPS).unwrap();
        run_once(&mut led, |_| {}, &STEPS).unwrap();
        assert_eq!(led.writes, 6);
        assert_eq!(&led.written[..3], &led.written[3..6]);
    }

    #[test]
    fn write_error_aborts_without_retry() {
        let mut led = MockLed {
            fail_on: Some(1),
            ..Default::default()
        };
        let mut holds = 0;
        let result = run_once(&mut led, |_| holds += 1, &STEPS);
        assert_eq!(result, Err("transmit rejected"));
        // first step landed, the failing one was attempted exactly once
        assert_eq!(led.attempts, 2);
        assert_eq!(led.writes, 1);
        assert_eq!(holds, 1);
    }
}
